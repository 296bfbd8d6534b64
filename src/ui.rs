//! Text layer: what to print for each phase
//!
//! Positions are in playfield pixels. The browser front end turns the lines into
//! absolutely positioned DOM elements over the canvas, setting the text with
//! `set_text_content` so typed names are never parsed as markup.

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GameState, MenuItem, NameStep, Phase, Side};

/// Font size tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Title,
    Large,
    Medium,
    Small,
}

impl TextSize {
    pub fn px(self) -> u32 {
        match self {
            TextSize::Title => 70,
            TextSize::Large => 32,
            TextSize::Medium => 28,
            TextSize::Small => 20,
        }
    }
}

/// Text colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Normal,
    Accent,
}

impl Tone {
    pub fn css(self) -> &'static str {
        match self {
            Tone::Normal => "#c8c8c8",
            Tone::Accent => "#45b3e7",
        }
    }
}

/// Horizontal anchor of `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

/// One line of text on screen
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub x: f32,
    /// Top of the line
    pub y: f32,
    pub size: TextSize,
    pub tone: Tone,
    pub align: Align,
}

impl TextLine {
    fn centered(text: impl Into<String>, y: f32, size: TextSize, tone: Tone) -> Self {
        Self {
            text: text.into(),
            x: SCREEN_WIDTH / 2.0,
            y,
            size,
            tone,
            align: Align::Center,
        }
    }

    fn at(text: impl Into<String>, x: f32, y: f32, size: TextSize, tone: Tone) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            size,
            tone,
            align: Align::Left,
        }
    }

    /// Inline CSS placing the line over the canvas
    ///
    /// Coordinates are percentages of the playfield so the overlay scales with the canvas.
    /// The text itself is never part of the style; front ends set it as plain text.
    pub fn css_style(&self) -> String {
        let shift = match self.align {
            Align::Left => "",
            Align::Center => "transform:translateX(-50%);",
        };
        format!(
            "position:absolute;left:{:.2}%;top:{:.2}%;{}font-size:calc({} * var(--px));color:{};white-space:pre",
            self.x / SCREEN_WIDTH * 100.0,
            self.y / SCREEN_HEIGHT * 100.0,
            shift,
            self.size.px(),
            self.tone.css()
        )
    }
}

/// Start prompt blinks: shown 40 frames out of every 60
pub fn prompt_visible(frame: u64) -> bool {
    frame % 60 < 40
}

/// Text to show for the current phase
pub fn screen_text(state: &GameState) -> Vec<TextLine> {
    let cx = SCREEN_WIDTH / 2.0;
    let cy = SCREEN_HEIGHT / 2.0;
    let mut lines = Vec::new();

    match &state.phase {
        Phase::StartMenu => {
            lines.push(TextLine::centered("P I N G", cy - 200.0, TextSize::Title, Tone::Accent));
            lines.push(TextLine::centered("P O N G", cy - 120.0, TextSize::Title, Tone::Accent));

            let mut y = cy - 20.0;
            for item in MenuItem::ALL {
                if !item.visible(state.settings.mode) {
                    continue;
                }
                let (label, value) = match item {
                    MenuItem::Mode => ("Mode:", state.settings.mode.as_str()),
                    MenuItem::Difficulty => ("Difficulty:", state.settings.difficulty.as_str()),
                    MenuItem::BallSpeed => ("Ball Speed:", state.settings.ball_speed.as_str()),
                };
                let tone = if item == state.menu_cursor {
                    Tone::Accent
                } else {
                    Tone::Normal
                };
                lines.push(TextLine::at(label, cx - 150.0, y, TextSize::Medium, tone));
                lines.push(TextLine::at(
                    format!("< {} >", value),
                    cx + 30.0,
                    y,
                    TextSize::Medium,
                    tone,
                ));
                y += 50.0;
            }

            if prompt_visible(state.frame) {
                lines.push(TextLine::centered(
                    "Press SPACE to Start",
                    cy + 150.0,
                    TextSize::Large,
                    Tone::Normal,
                ));
            }
        }
        Phase::EnterName { step, buffer } => {
            let prompt = match step {
                NameStep::P1 => "Enter Player 1 Name:",
                NameStep::P2 => "Enter Player 2 Name:",
            };
            lines.push(TextLine::centered(prompt, cy - 100.0, TextSize::Large, Tone::Normal));
            lines.push(TextLine::at(
                buffer.clone(),
                cx - 140.0,
                cy - 15.0,
                TextSize::Large,
                Tone::Normal,
            ));
            lines.push(TextLine::centered(
                "Press ENTER to continue",
                cy + 100.0,
                TextSize::Medium,
                Tone::Normal,
            ));
            lines.push(back_hint());
        }
        Phase::Playing => {
            if !state.settings.vs_ai() {
                for (side, x) in [(Side::Right, SCREEN_WIDTH * 0.75), (Side::Left, SCREEN_WIDTH * 0.25)] {
                    let name = state.names.for_side(side).unwrap_or_default();
                    lines.push(TextLine {
                        text: name.to_string(),
                        x,
                        y: 20.0,
                        size: TextSize::Medium,
                        tone: Tone::Normal,
                        align: Align::Center,
                    });
                }
            }

            lines.push(TextLine::at(
                state.scores.right.to_string(),
                cx + 20.0,
                cy - 16.0,
                TextSize::Large,
                Tone::Normal,
            ));
            lines.push(TextLine::at(
                state.scores.left.to_string(),
                cx - 45.0,
                cy - 16.0,
                TextSize::Large,
                Tone::Normal,
            ));

            if state.ball.is_serve_pending() {
                lines.push(TextLine::centered(
                    "Press SPACE to Serve",
                    cy + 50.0,
                    TextSize::Medium,
                    Tone::Normal,
                ));
            }
            lines.push(back_hint());
        }
        Phase::GameOver { winner_name, .. } => {
            lines.push(TextLine::centered(
                format!("{} Won!", winner_name),
                cy - 100.0,
                TextSize::Title,
                Tone::Accent,
            ));
            lines.push(TextLine::centered(
                "Press SPACE to Return to Menu",
                cy + 20.0,
                TextSize::Large,
                Tone::Normal,
            ));
            lines.push(back_hint());
        }
    }

    lines
}

fn back_hint() -> TextLine {
    TextLine::at("ESC to Menu", 20.0, SCREEN_HEIGHT - 40.0, TextSize::Small, Tone::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameMode;

    fn texts(state: &GameState) -> Vec<String> {
        screen_text(state).into_iter().map(|l| l.text).collect()
    }

    #[test]
    fn test_menu_rows_vs_ai() {
        let state = GameState::new(1);
        let texts = texts(&state);
        assert!(texts.contains(&"P I N G".to_string()));
        assert!(texts.contains(&"P O N G".to_string()));
        assert!(texts.contains(&"Mode:".to_string()));
        assert!(texts.contains(&"< Player vs AI >".to_string()));
        assert!(texts.contains(&"Difficulty:".to_string()));
        assert!(texts.contains(&"< Medium >".to_string()));
        assert!(texts.contains(&"< Normal >".to_string()));
    }

    #[test]
    fn test_menu_hides_difficulty_vs_player() {
        let mut state = GameState::new(1);
        state.settings.mode = GameMode::VsPlayer;
        let texts = texts(&state);
        assert!(!texts.contains(&"Difficulty:".to_string()));
        assert!(texts.contains(&"Ball Speed:".to_string()));
    }

    #[test]
    fn test_selected_row_is_accented() {
        let mut state = GameState::new(1);
        state.menu_cursor = MenuItem::BallSpeed;
        let lines = screen_text(&state);
        let speed = lines.iter().find(|l| l.text == "Ball Speed:").unwrap();
        let mode = lines.iter().find(|l| l.text == "Mode:").unwrap();
        assert_eq!(speed.tone, Tone::Accent);
        assert_eq!(mode.tone, Tone::Normal);
    }

    #[test]
    fn test_start_prompt_blinks() {
        let mut state = GameState::new(1);
        state.frame = 10;
        assert!(texts(&state).contains(&"Press SPACE to Start".to_string()));
        state.frame = 45;
        assert!(!texts(&state).contains(&"Press SPACE to Start".to_string()));
        assert!(prompt_visible(60));
        assert!(!prompt_visible(119));
    }

    #[test]
    fn test_name_entry_text() {
        let mut state = GameState::new(1);
        state.phase = Phase::EnterName {
            step: NameStep::P2,
            buffer: "Bob".to_string(),
        };
        let texts = texts(&state);
        assert!(texts.contains(&"Enter Player 2 Name:".to_string()));
        assert!(texts.contains(&"Bob".to_string()));
        assert!(texts.contains(&"Press ENTER to continue".to_string()));
        assert!(texts.contains(&"ESC to Menu".to_string()));
    }

    #[test]
    fn test_playing_hud() {
        let mut state = GameState::new(1);
        state.reset_match();
        state.scores.left = 2;
        state.scores.right = 4;
        let texts = texts(&state);
        assert!(texts.contains(&"2".to_string()));
        assert!(texts.contains(&"4".to_string()));
        assert!(texts.contains(&"Press SPACE to Serve".to_string()));

        state.ball.serve(7.0);
        assert!(!super::screen_text(&state).iter().any(|l| l.text == "Press SPACE to Serve"));
    }

    #[test]
    fn test_player_names_shown_two_player() {
        let mut state = GameState::new(1);
        state.settings.mode = GameMode::VsPlayer;
        state.names.p1 = Some("Ada".to_string());
        state.names.p2 = Some("Linus".to_string());
        state.reset_match();
        let lines = screen_text(&state);
        let ada = lines.iter().find(|l| l.text == "Ada").unwrap();
        let linus = lines.iter().find(|l| l.text == "Linus").unwrap();
        assert!(ada.x > linus.x);
    }

    #[test]
    fn test_game_over_text() {
        let mut state = GameState::new(1);
        state.phase = Phase::GameOver {
            winner: Side::Right,
            winner_name: "You".to_string(),
        };
        let texts = texts(&state);
        assert!(texts.contains(&"You Won!".to_string()));
        assert!(texts.contains(&"Press SPACE to Return to Menu".to_string()));
    }

    #[test]
    fn test_css_style_positions() {
        let line = TextLine::centered("x", 150.0, TextSize::Title, Tone::Accent);
        let style = line.css_style();
        assert!(style.contains("left:50.00%"));
        assert!(style.contains("top:25.00%"));
        assert!(style.contains("translateX(-50%)"));
        assert!(style.contains("calc(70 * var(--px))"));
        assert!(style.contains("#45b3e7"));

        let hint = back_hint();
        assert!(!hint.css_style().contains("translateX"));
    }

    #[test]
    fn test_typed_name_kept_verbatim() {
        let mut state = GameState::new(1);
        state.phase = Phase::EnterName {
            step: NameStep::P1,
            buffer: "<b>&".to_string(),
        };
        let lines = screen_text(&state);
        let name = lines.iter().find(|l| l.text == "<b>&").unwrap();
        assert!(!name.css_style().contains("<b>"));
    }
}
