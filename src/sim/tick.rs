//! Input dispatch and the fixed timestep simulation tick
//!
//! Each frame: drain queued input through `handle_event`, then call `tick` once.
//!
//! `InputEvent::Quit` is for front ends that own a window. The browser build has
//! none (closing the tab ends the game) and the native build runs headless, so
//! neither produces it today.

use std::ops::ControlFlow;

use super::ai;
use super::collision::{hits_horizontal_wall, hits_paddle, scoring_side};
use super::menu::{MenuItem, cycle_option, pop_name_char, push_name_text};
use super::state::{GameEvent, GameState, NameStep, Phase, Side};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    S,
    Space,
    Return,
    Backspace,
    Escape,
}

/// One input event, already translated from the platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Typed text (used by name entry)
    Text(String),
    /// Window closed
    Quit,
}

/// Route one input event according to the current phase
///
/// Returns `ControlFlow::Break` when the player asked to quit.
pub fn handle_event(state: &mut GameState, event: &InputEvent) -> ControlFlow<()> {
    if *event == InputEvent::Quit {
        log::info!("Quit requested");
        return ControlFlow::Break(());
    }

    // Escape abandons whatever is in progress
    if *event == InputEvent::KeyDown(Key::Escape) && state.phase != Phase::StartMenu {
        state.set_phase(Phase::StartMenu);
        state.menu_cursor = MenuItem::Mode;
        return ControlFlow::Continue(());
    }

    match state.phase {
        Phase::Playing => handle_playing(state, event),
        Phase::StartMenu => handle_start_menu(state, event),
        Phase::EnterName { .. } => handle_enter_name(state, event),
        Phase::GameOver { .. } => {
            if *event == InputEvent::KeyDown(Key::Space) {
                state.set_phase(Phase::StartMenu);
            }
        }
    }
    ControlFlow::Continue(())
}

fn handle_playing(state: &mut GameState, event: &InputEvent) {
    let two_player = !state.settings.vs_ai();
    match event {
        InputEvent::KeyDown(Key::Space) if state.ball.is_serve_pending() => serve(state),
        InputEvent::KeyDown(Key::Down) => state.right.press_down(),
        InputEvent::KeyDown(Key::Up) => state.right.press_up(),
        InputEvent::KeyDown(Key::S) if two_player => state.left.press_down(),
        InputEvent::KeyDown(Key::W) if two_player => state.left.press_up(),
        InputEvent::KeyUp(Key::Down) => state.right.release_down(),
        InputEvent::KeyUp(Key::Up) => state.right.release_up(),
        InputEvent::KeyUp(Key::S) if two_player => state.left.release_down(),
        InputEvent::KeyUp(Key::W) if two_player => state.left.release_up(),
        _ => {}
    }
}

fn handle_start_menu(state: &mut GameState, event: &InputEvent) {
    let InputEvent::KeyDown(key) = event else {
        return;
    };
    let mode = state.settings.mode;
    match key {
        Key::Space => {
            if state.settings.vs_ai() {
                state.reset_match();
            } else {
                state.names.clear();
                state.set_phase(Phase::EnterName {
                    step: NameStep::P1,
                    buffer: String::new(),
                });
            }
        }
        Key::Down => state.menu_cursor = state.menu_cursor.next(mode),
        Key::Up => state.menu_cursor = state.menu_cursor.prev(mode),
        Key::Right | Key::Left => {
            cycle_option(&mut state.settings, state.menu_cursor, *key == Key::Right);
            log::debug!(
                "Menu: {} / {} / {}",
                state.settings.mode.as_str(),
                state.settings.difficulty.as_str(),
                state.settings.ball_speed.as_str()
            );
        }
        _ => {}
    }
}

fn handle_enter_name(state: &mut GameState, event: &InputEvent) {
    let Phase::EnterName { step, buffer } = &mut state.phase else {
        return;
    };
    match event {
        InputEvent::KeyDown(Key::Return) if !buffer.is_empty() => {
            let name = std::mem::take(buffer);
            let step = *step;
            match step {
                NameStep::P1 => {
                    state.names.p1 = Some(name);
                    state.set_phase(Phase::EnterName {
                        step: NameStep::P2,
                        buffer: String::new(),
                    });
                }
                NameStep::P2 => {
                    state.names.p2 = Some(name);
                    state.reset_match();
                }
            }
        }
        InputEvent::KeyDown(Key::Backspace) => pop_name_char(buffer),
        InputEvent::Text(text) => push_name_text(buffer, text),
        _ => {}
    }
}

/// Put a resting ball into play
fn serve(state: &mut GameState) {
    state.ball.serve(state.base_ball_speed);
    log::debug!("Serve at {}", state.base_ball_speed);
    state.emit(GameEvent::Served);
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) {
    state.frame += 1;

    if state.phase.is_playing() {
        state.effects.advance();

        if state.autoplay && state.ball.is_serve_pending() {
            serve(state);
        }

        advance_ball(state);

        if state.autoplay {
            ai::track_ball(&mut state.right, &state.ball, Side::Right, state.ai_speed);
        } else {
            state.right.advance();
        }
        if state.settings.vs_ai() {
            ai::track_ball(&mut state.left, &state.ball, Side::Left, state.ai_speed);
        } else {
            state.left.advance();
        }

        let center = state.ball.rect.center();
        state.effects.record_trail(center);
    }

    state.effects.update_shake();
}

/// Move the ball, bounce it, and award points
fn advance_ball(state: &mut GameState) {
    state.ball.rect.pos += state.ball.vel;

    if hits_horizontal_wall(&state.ball.rect) {
        state.ball.vel.y = -state.ball.vel.y;
        state.emit(GameEvent::WallBounce);
    }

    if let Some(side) = scoring_side(&state.ball.rect) {
        state.scores.add_point(side);
        log::info!(
            "Point {:?}: {} - {}",
            side,
            state.scores.left,
            state.scores.right
        );
        state.emit(GameEvent::Scored(side));
        state.check_for_winner();
        state.ball.restart();
    }

    for side in [Side::Right, Side::Left] {
        if hits_paddle(&state.ball.rect, &state.paddle(side).rect) {
            state.ball.vel.x = -state.ball.vel.x;
            state.emit(GameEvent::PaddleHit(side));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::screen_center;
    use crate::settings::{BallSpeed, Difficulty, GameMode};
    use glam::Vec2;
    use proptest::prelude::*;

    fn press(state: &mut GameState, key: Key) {
        let _ = handle_event(state, &InputEvent::KeyDown(key));
    }

    fn release(state: &mut GameState, key: Key) {
        let _ = handle_event(state, &InputEvent::KeyUp(key));
    }

    fn type_text(state: &mut GameState, text: &str) {
        let _ = handle_event(state, &InputEvent::Text(text.to_string()));
    }

    fn playing_state() -> GameState {
        let mut state = GameState::new(12345);
        press(&mut state, Key::Space);
        state
    }

    #[test]
    fn test_confirm_vs_ai_starts_match() {
        let mut state = GameState::new(12345);
        state.scores.left = 3;
        press(&mut state, Key::Space);
        assert_eq!(state.phase, Phase::Playing);
        assert_eq!(state.scores.left, 0);
        assert_eq!(state.scores.right, 0);
        assert_eq!(state.ball.rect.center(), screen_center());
        assert_eq!(state.ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_serve_uses_tier_speed() {
        let mut state = playing_state();
        press(&mut state, Key::Space);
        assert_eq!(state.ball.vel, Vec2::new(-7.0, -7.0));

        // A second serve does nothing while the ball is moving
        state.ball.vel = Vec2::new(3.0, 4.0);
        press(&mut state, Key::Space);
        assert_eq!(state.ball.vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_serve_fast_tier() {
        let mut state = GameState::new(1);
        state.settings.ball_speed = BallSpeed::Fast;
        press(&mut state, Key::Space);
        press(&mut state, Key::Space);
        assert_eq!(state.ball.vel, Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn test_reset_applies_difficulty() {
        let mut state = GameState::new(1);
        state.settings.difficulty = Difficulty::Hard;
        press(&mut state, Key::Space);
        assert_eq!(state.ai_speed, 7.0);
    }

    #[test]
    fn test_ball_waits_for_serve() {
        let mut state = playing_state();
        for _ in 0..120 {
            tick(&mut state);
        }
        assert_eq!(state.ball.rect.center(), screen_center());
        assert!(state.ball.is_serve_pending());
    }

    #[test]
    fn test_wall_bounce_negates_vertical() {
        let mut state = playing_state();
        state.ball.rect.pos = Vec2::new(400.0, 3.0);
        state.ball.vel = Vec2::new(-7.0, -7.0);
        tick(&mut state);
        assert_eq!(state.ball.vel, Vec2::new(-7.0, 7.0));
        assert!(state.drain_events().contains(&GameEvent::WallBounce));
    }

    #[test]
    fn test_bottom_wall_bounce() {
        let mut state = playing_state();
        state.ball.rect.pos = Vec2::new(400.0, 565.0);
        state.ball.vel = Vec2::new(5.0, 5.0);
        tick(&mut state);
        assert_eq!(state.ball.vel, Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_paddle_hit_negates_horizontal() {
        let mut state = playing_state();
        let paddle_top = state.right.rect.top();
        state.ball.rect.pos = Vec2::new(RIGHT_PADDLE_X - 30.0, paddle_top + 20.0);
        state.ball.vel = Vec2::new(7.0, 7.0);
        tick(&mut state);
        assert_eq!(state.ball.vel, Vec2::new(-7.0, 7.0));
        assert!(state.drain_events().contains(&GameEvent::PaddleHit(Side::Right)));
        assert_eq!(state.effects.squash_ticks, crate::sim::effects::SQUASH_TICKS);
    }

    #[test]
    fn test_left_edge_scores_for_right() {
        let mut state = playing_state();
        state.ball.rect.pos = Vec2::new(4.0, 20.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);
        // Keep the left paddle away from the ball
        state.left.rect.pos.y = 400.0;
        tick(&mut state);
        assert_eq!(state.scores.right, 1);
        assert_eq!(state.scores.left, 0);
        assert_eq!(state.ball.rect.center(), screen_center());
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.effects.screen_flash_ticks, crate::sim::effects::SCREEN_FLASH_TICKS);
    }

    #[test]
    fn test_right_edge_scores_for_left() {
        let mut state = playing_state();
        state.ball.rect.pos = Vec2::new(SCREEN_WIDTH - 33.0, 20.0);
        state.ball.vel = Vec2::new(7.0, 7.0);
        state.right.rect.pos.y = 400.0;
        tick(&mut state);
        assert_eq!(state.scores.left, 1);
        assert!(state.ball.is_serve_pending());
    }

    #[test]
    fn test_fifth_point_ends_match() {
        let mut state = playing_state();
        state.scores.left = WINNING_SCORE - 1;
        state.scores.right = WINNING_SCORE - 1;
        state.ball.rect.pos = Vec2::new(SCREEN_WIDTH - 33.0, 20.0);
        state.ball.vel = Vec2::new(7.0, 7.0);
        state.right.rect.pos.y = 400.0;
        tick(&mut state);
        assert_eq!(
            state.phase,
            Phase::GameOver {
                winner: Side::Left,
                winner_name: "AI".to_string()
            }
        );
    }

    #[test]
    fn test_fourth_point_keeps_playing() {
        let mut state = playing_state();
        state.scores.right = WINNING_SCORE - 2;
        state.ball.rect.pos = Vec2::new(4.0, 20.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);
        state.left.rect.pos.y = 400.0;
        tick(&mut state);
        assert_eq!(state.scores.right, WINNING_SCORE - 1);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_fifth_point_for_right_side_ends_match() {
        let mut state = playing_state();
        state.scores.right = WINNING_SCORE - 1;
        state.ball.rect.pos = Vec2::new(4.0, 20.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);
        state.left.rect.pos.y = 400.0;
        tick(&mut state);
        assert_eq!(state.scores.right, WINNING_SCORE);
        assert_eq!(
            state.phase,
            Phase::GameOver {
                winner: Side::Right,
                winner_name: "You".to_string()
            }
        );
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::Scored(Side::Right)));
        assert!(events.contains(&GameEvent::MatchWon(Side::Right)));
        assert!(state.ball.is_serve_pending());
    }

    #[test]
    fn test_left_paddle_hit_sends_ball_right() {
        let mut state = playing_state();
        let paddle_top = state.left.rect.top();
        state.ball.rect.pos = Vec2::new(LEFT_PADDLE_X + PADDLE_WIDTH + 5.0, paddle_top + 20.0);
        state.ball.vel = Vec2::new(-7.0, 7.0);
        tick(&mut state);
        assert_eq!(state.ball.vel, Vec2::new(7.0, 7.0));
        assert_eq!(state.scores, crate::sim::Scores::default());
        assert!(state.drain_events().contains(&GameEvent::PaddleHit(Side::Left)));
        assert_eq!(state.effects.flash_ticks(Side::Left), crate::sim::effects::PADDLE_FLASH_TICKS);
        assert_eq!(state.effects.flash_ticks(Side::Right), 0);
    }

    #[test]
    fn test_game_over_confirm_returns_to_menu() {
        let mut state = playing_state();
        state.scores.right = WINNING_SCORE;
        state.check_for_winner();
        assert!(matches!(state.phase, Phase::GameOver { winner: Side::Right, .. }));
        press(&mut state, Key::Space);
        assert_eq!(state.phase, Phase::StartMenu);
    }

    #[test]
    fn test_escape_from_playing_discards_match() {
        let mut state = playing_state();
        press(&mut state, Key::Down);
        press(&mut state, Key::Down);
        state.scores.left = 2;
        press(&mut state, Key::Escape);
        assert_eq!(state.phase, Phase::StartMenu);
        assert_eq!(state.menu_cursor, MenuItem::Mode);

        press(&mut state, Key::Space);
        assert_eq!(state.scores.left, 0);
    }

    #[test]
    fn test_escape_resets_cursor_from_name_entry() {
        let mut state = GameState::new(1);
        press(&mut state, Key::Right);
        press(&mut state, Key::Down);
        assert_eq!(state.menu_cursor, MenuItem::BallSpeed);
        press(&mut state, Key::Space);
        assert!(matches!(state.phase, Phase::EnterName { .. }));
        press(&mut state, Key::Escape);
        assert_eq!(state.phase, Phase::StartMenu);
        assert_eq!(state.menu_cursor, MenuItem::Mode);
    }

    #[test]
    fn test_escape_on_menu_is_noop() {
        let mut state = GameState::new(1);
        press(&mut state, Key::Down);
        press(&mut state, Key::Escape);
        assert_eq!(state.menu_cursor, MenuItem::Difficulty);
    }

    #[test]
    fn test_two_player_name_flow() {
        let mut state = GameState::new(1);
        press(&mut state, Key::Right);
        assert_eq!(state.settings.mode, GameMode::VsPlayer);
        press(&mut state, Key::Space);
        assert_eq!(
            state.phase,
            Phase::EnterName {
                step: NameStep::P1,
                buffer: String::new()
            }
        );

        // Empty names are not accepted
        press(&mut state, Key::Return);
        assert!(matches!(state.phase, Phase::EnterName { step: NameStep::P1, .. }));

        type_text(&mut state, "Ada");
        press(&mut state, Key::Backspace);
        type_text(&mut state, "a");
        press(&mut state, Key::Return);
        assert_eq!(state.names.p1.as_deref(), Some("Ada"));
        assert_eq!(
            state.phase,
            Phase::EnterName {
                step: NameStep::P2,
                buffer: String::new()
            }
        );

        type_text(&mut state, "Linus");
        press(&mut state, Key::Return);
        assert_eq!(state.names.p2.as_deref(), Some("Linus"));
        assert_eq!(state.phase, Phase::Playing);
        assert!(state.ball.is_serve_pending());
    }

    #[test]
    fn test_new_two_player_match_clears_names() {
        let mut state = GameState::new(1);
        state.settings.mode = GameMode::VsPlayer;
        state.names.p1 = Some("Old".to_string());
        press(&mut state, Key::Space);
        assert_eq!(state.names.p1, None);
    }

    #[test]
    fn test_menu_skips_difficulty_in_two_player() {
        let mut state = GameState::new(1);
        press(&mut state, Key::Right);
        press(&mut state, Key::Down);
        assert_eq!(state.menu_cursor, MenuItem::BallSpeed);
        press(&mut state, Key::Up);
        assert_eq!(state.menu_cursor, MenuItem::Mode);
        press(&mut state, Key::Up);
        assert_eq!(state.menu_cursor, MenuItem::BallSpeed);
    }

    #[test]
    fn test_player_paddle_moves_with_keys() {
        let mut state = playing_state();
        let start = state.right.rect.pos.y;
        press(&mut state, Key::Down);
        tick(&mut state);
        assert_eq!(state.right.rect.pos.y, start + PADDLE_STEP);
        release(&mut state, Key::Down);
        tick(&mut state);
        assert_eq!(state.right.rect.pos.y, start + PADDLE_STEP);
    }

    #[test]
    fn test_ws_ignored_against_ai() {
        let mut state = playing_state();
        press(&mut state, Key::S);
        assert_eq!(state.left.speed, 0.0);
    }

    #[test]
    fn test_ws_moves_left_paddle_two_player() {
        let mut state = GameState::new(1);
        state.settings.mode = GameMode::VsPlayer;
        state.reset_match();
        let start = state.left.rect.pos.y;
        press(&mut state, Key::W);
        tick(&mut state);
        assert_eq!(state.left.rect.pos.y, start - PADDLE_STEP);
    }

    #[test]
    fn test_ai_moves_toward_ball() {
        let mut state = playing_state();
        state.ball.rect.pos = Vec2::new(400.0, 450.0);
        state.ball.vel = Vec2::new(-7.0, 1.0);
        let start = state.left.rect.pos.y;
        tick(&mut state);
        assert_eq!(state.left.rect.pos.y, start + state.ai_speed);
    }

    #[test]
    fn test_quit_breaks() {
        let mut state = GameState::new(1);
        assert_eq!(handle_event(&mut state, &InputEvent::Quit), ControlFlow::Break(()));
    }

    #[test]
    fn test_menu_text_ignored() {
        let mut state = GameState::new(1);
        type_text(&mut state, "x");
        assert_eq!(state.phase, Phase::StartMenu);
    }

    fn arb_key() -> impl Strategy<Value = Key> {
        prop_oneof![
            Just(Key::Up),
            Just(Key::Down),
            Just(Key::W),
            Just(Key::S),
            Just(Key::Space),
        ]
    }

    fn arb_event() -> impl Strategy<Value = InputEvent> {
        prop_oneof![
            arb_key().prop_map(InputEvent::KeyDown),
            arb_key().prop_map(InputEvent::KeyUp),
        ]
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_on_screen(
            events in proptest::collection::vec((arb_event(), 0u8..4), 1..200),
            two_player in any::<bool>(),
        ) {
            let mut state = GameState::new(99);
            if two_player {
                state.settings.mode = GameMode::VsPlayer;
            }
            state.reset_match();
            for (event, ticks) in &events {
                let _ = handle_event(&mut state, event);
                for _ in 0..*ticks {
                    tick(&mut state);
                    for paddle in [&state.left, &state.right] {
                        prop_assert!(paddle.rect.top() >= 0.0);
                        prop_assert!(paddle.rect.bottom() <= SCREEN_HEIGHT);
                    }
                }
            }
        }
    }
}
