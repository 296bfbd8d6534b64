//! Match configuration
//!
//! Edited from the start menu and kept for the session only; nothing here is saved.

use serde::{Deserialize, Serialize};

/// Who controls the left paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GameMode {
    #[default]
    VsAi,
    VsPlayer,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::VsAi, GameMode::VsPlayer];

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::VsAi => "Player vs AI",
            GameMode::VsPlayer => "Player vs Player",
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

/// AI tracking speed preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" | "med" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Pixels per tick the AI paddle moves while tracking
    pub fn ai_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 5.5,
            Difficulty::Medium => 5.9,
            Difficulty::Hard => 7.0,
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

/// Ball serve speed preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BallSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl BallSpeed {
    pub const ALL: [BallSpeed; 3] = [BallSpeed::Slow, BallSpeed::Normal, BallSpeed::Fast];

    pub fn as_str(&self) -> &'static str {
        match self {
            BallSpeed::Slow => "Slow",
            BallSpeed::Normal => "Normal",
            BallSpeed::Fast => "Fast",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(BallSpeed::Slow),
            "normal" => Some(BallSpeed::Normal),
            "fast" => Some(BallSpeed::Fast),
            _ => None,
        }
    }

    /// Per-axis ball speed (pixels per tick) applied on serve
    pub fn base_speed(&self) -> f32 {
        match self {
            BallSpeed::Slow => 5.0,
            BallSpeed::Normal => 7.0,
            BallSpeed::Fast => 10.0,
        }
    }

    pub fn next(self) -> Self {
        cycle(&Self::ALL, self, 1)
    }

    pub fn prev(self) -> Self {
        cycle(&Self::ALL, self, -1)
    }
}

/// Step through a fixed ordered list with wraparound
fn cycle<T: Copy + PartialEq>(all: &[T], current: T, step: isize) -> T {
    let len = all.len() as isize;
    let index = all.iter().position(|v| *v == current).unwrap_or(0) as isize;
    all[(index + step).rem_euclid(len) as usize]
}

/// Settings chosen on the start menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchSettings {
    pub mode: GameMode,
    /// Only meaningful in `GameMode::VsAi`
    pub difficulty: Difficulty,
    pub ball_speed: BallSpeed,
}

impl MatchSettings {
    pub fn vs_ai(&self) -> bool {
        self.mode == GameMode::VsAi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = MatchSettings::default();
        assert_eq!(settings.mode, GameMode::VsAi);
        assert_eq!(settings.difficulty, Difficulty::Medium);
        assert_eq!(settings.ball_speed, BallSpeed::Normal);
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Difficulty::Hard.next(), Difficulty::Easy);
        assert_eq!(Difficulty::Easy.prev(), Difficulty::Hard);
        assert_eq!(BallSpeed::Fast.next(), BallSpeed::Slow);
        assert_eq!(BallSpeed::Slow.prev(), BallSpeed::Fast);
        assert_eq!(GameMode::VsPlayer.next(), GameMode::VsAi);
        assert_eq!(GameMode::VsAi.prev(), GameMode::VsPlayer);
    }

    #[test]
    fn test_tier_values() {
        assert_eq!(Difficulty::Easy.ai_speed(), 5.5);
        assert_eq!(Difficulty::Medium.ai_speed(), 5.9);
        assert_eq!(Difficulty::Hard.ai_speed(), 7.0);
        assert_eq!(BallSpeed::Slow.base_speed(), 5.0);
        assert_eq!(BallSpeed::Normal.base_speed(), 7.0);
        assert_eq!(BallSpeed::Fast.base_speed(), 10.0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("med"), Some(Difficulty::Medium));
        assert_eq!(BallSpeed::from_str("fast"), Some(BallSpeed::Fast));
        assert_eq!(BallSpeed::from_str("warp"), None);
    }
}
