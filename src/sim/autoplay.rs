//! Demo mode: both paddles AI-driven, serves happen on their own
//!
//! Serves always go the same way and both sides track at the same speed, so many
//! tier combinations settle into an endless rally. `max_ticks` bounds those.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState, Phase, Scores, Side};
use super::tick::tick;
use crate::settings::{GameMode, MatchSettings};

/// Outcome of a headless demo match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub settings: MatchSettings,
    /// Seed for the cosmetic effects RNG; it has no influence on the rally
    pub seed: u64,
    pub ticks: u64,
    pub scores: Scores,
    /// `None` when `max_ticks` ran out first
    pub winner: Option<Side>,
    pub paddle_hits: u32,
    pub wall_bounces: u32,
}

/// Play one AI-vs-AI match without a display
///
/// The match is always vs AI; `settings.mode` is ignored.
pub fn run_headless(settings: MatchSettings, seed: u64, max_ticks: u64) -> MatchSummary {
    let settings = MatchSettings {
        mode: GameMode::VsAi,
        ..settings
    };
    let mut state = GameState::new(seed);
    state.settings = settings;
    state.autoplay = true;
    state.reset_match();

    let mut ticks = 0;
    let mut paddle_hits = 0;
    let mut wall_bounces = 0;
    while ticks < max_ticks && state.phase.is_playing() {
        tick(&mut state);
        ticks += 1;
        for event in state.drain_events() {
            match event {
                GameEvent::PaddleHit(_) => paddle_hits += 1,
                GameEvent::WallBounce => wall_bounces += 1,
                _ => {}
            }
        }
    }

    let winner = match state.phase {
        Phase::GameOver { winner, .. } => Some(winner),
        _ => None,
    };
    if winner.is_none() {
        log::warn!(
            "No winner after {} ticks: the AIs are locked in a rally ({} / {})",
            ticks,
            settings.difficulty.as_str(),
            settings.ball_speed.as_str()
        );
    }
    log::info!(
        "Demo finished after {} ticks: {} - {} ({} paddle hits)",
        ticks,
        state.scores.left,
        state.scores.right,
        paddle_hits
    );

    MatchSummary {
        settings,
        seed,
        ticks,
        scores: state.scores,
        winner,
        paddle_hits,
        wall_bounces,
    }
}
