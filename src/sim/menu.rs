//! Start menu cursor and name entry buffer

use crate::consts::NAME_MAX_CHARS;
use crate::settings::{GameMode, MatchSettings};

/// Start menu rows, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Mode,
    Difficulty,
    BallSpeed,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Mode, MenuItem::Difficulty, MenuItem::BallSpeed];

    pub fn index(self) -> usize {
        match self {
            MenuItem::Mode => 0,
            MenuItem::Difficulty => 1,
            MenuItem::BallSpeed => 2,
        }
    }

    /// Whether the row is shown (difficulty only applies against the AI)
    pub fn visible(self, mode: GameMode) -> bool {
        !(self == MenuItem::Difficulty && mode == GameMode::VsPlayer)
    }

    /// Next visible row, wrapping
    pub fn next(self, mode: GameMode) -> Self {
        self.step(mode, 1)
    }

    /// Previous visible row, wrapping
    pub fn prev(self, mode: GameMode) -> Self {
        self.step(mode, -1)
    }

    fn step(self, mode: GameMode, step: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let mut index = self.index() as isize;
        loop {
            index = (index + step).rem_euclid(len);
            let item = Self::ALL[index as usize];
            if item.visible(mode) {
                return item;
            }
        }
    }
}

/// Cycle the value on the selected row; `forward` is Right, otherwise Left
pub fn cycle_option(settings: &mut MatchSettings, item: MenuItem, forward: bool) {
    match (item, forward) {
        (MenuItem::Mode, true) => settings.mode = settings.mode.next(),
        (MenuItem::Mode, false) => settings.mode = settings.mode.prev(),
        (MenuItem::Difficulty, true) => settings.difficulty = settings.difficulty.next(),
        (MenuItem::Difficulty, false) => settings.difficulty = settings.difficulty.prev(),
        (MenuItem::BallSpeed, true) => settings.ball_speed = settings.ball_speed.next(),
        (MenuItem::BallSpeed, false) => settings.ball_speed = settings.ball_speed.prev(),
    }
}

/// Append typed text, stopping at the name limit; control characters are dropped
pub fn push_name_text(buffer: &mut String, text: &str) {
    let mut len = buffer.chars().count();
    for c in text.chars().filter(|c| !c.is_control()) {
        if len >= NAME_MAX_CHARS {
            break;
        }
        buffer.push(c);
        len += 1;
    }
}

/// Remove the last character; empty stays empty
pub fn pop_name_char(buffer: &mut String) {
    buffer.pop();
}
