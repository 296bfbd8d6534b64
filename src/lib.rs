//! Ping Pong - single-screen arcade Pong with a reactive AI opponent
//!
//! Core modules:
//! - `sim`: Fixed-step simulation (phase machine, physics, AI, effects)
//! - `settings`: Match configuration edited from the start menu
//! - `ui`: Text layer for menus, prompts and the HUD
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Sound cues with a silent fallback

pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{BallSpeed, Difficulty, GameMode, MatchSettings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Playfield dimensions (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Ball is a 30x30 box drawn as a circle
    pub const BALL_RADIUS: f32 = 15.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 140.0;
    /// Right paddle sits 20px in from the right edge
    pub const RIGHT_PADDLE_X: f32 = SCREEN_WIDTH - 20.0 - PADDLE_WIDTH;
    pub const LEFT_PADDLE_X: f32 = 10.0;
    /// Speed added per held movement key
    pub const PADDLE_STEP: f32 = 7.0;

    /// First side to reach this wins the match
    pub const WINNING_SCORE: u32 = 5;

    /// Longest accepted player name, in characters
    pub const NAME_MAX_CHARS: usize = 10;

    /// Window / page caption
    pub const CAPTION: &str = "AI Ping Pong";
}

/// Center of the playfield
#[inline]
pub fn screen_center() -> Vec2 {
    Vec2::new(consts::SCREEN_WIDTH / 2.0, consts::SCREEN_HEIGHT / 2.0)
}
