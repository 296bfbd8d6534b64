//! Fixed-step simulation
//!
//! All gameplay logic lives here:
//! - Fixed timestep only (one `tick` per frame)
//! - Seeded RNG only (cosmetic effects)
//! - No rendering or platform dependencies

pub mod ai;
pub mod autoplay;
pub mod collision;
pub mod effects;
pub mod menu;
pub mod rect;
pub mod state;
pub mod tick;

pub use autoplay::{MatchSummary, run_headless};
pub use effects::{Effects, Particle};
pub use menu::MenuItem;
pub use rect::Rect;
pub use state::{
    Ball, GameEvent, GameState, NameStep, Paddle, Phase, PlayerNames, Scores, Side,
};
pub use tick::{InputEvent, Key, handle_event, tick};
