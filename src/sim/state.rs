//! Game state and core simulation types
//!
//! Everything the loop mutates lives in `GameState`; step functions take it by `&mut`.

use std::ops::Not;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::effects::Effects;
use super::menu::MenuItem;
use super::rect::Rect;
use crate::consts::*;
use crate::screen_center;
use crate::settings::MatchSettings;

/// One side of the court
///
/// The right paddle belongs to Player 1; the left paddle is the AI or Player 2.
/// `!side` gives the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Not for Side {
    type Output = Side;
    fn not(self) -> Self::Output {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Which name is being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameStep {
    P1,
    P2,
}

/// Top-level phase; the only authority on input routing and rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Mode / difficulty / speed selection
    StartMenu,
    /// Typing a player name (vs player only)
    EnterName { step: NameStep, buffer: String },
    /// Match in progress
    Playing,
    /// Match finished
    GameOver { winner: Side, winner_name: String },
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing)
    }

    /// Short label for logs
    pub fn label(&self) -> &'static str {
        match self {
            Phase::StartMenu => "start_menu",
            Phase::EnterName { step: NameStep::P1, .. } => "enter_name_p1",
            Phase::EnterName { step: NameStep::P2, .. } => "enter_name_p2",
            Phase::Playing => "playing",
            Phase::GameOver { .. } => "game_over",
        }
    }
}

/// Things that happened during a step, consumed by effects and audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball reflected off the top or bottom edge
    WallBounce,
    /// Ball overlapped this side's paddle
    PaddleHit(Side),
    /// This side won a point
    Scored(Side),
    /// This side reached the winning score
    MatchWon(Side),
    /// Ball put into play
    Served,
}

/// The ball
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per tick; exactly zero while waiting for a serve
    pub vel: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            rect: Rect::centered_at(screen_center(), BALL_RADIUS * 2.0, BALL_RADIUS * 2.0),
            vel: Vec2::ZERO,
        }
    }
}

impl Ball {
    /// Ball at rest, waiting for a serve
    pub fn is_serve_pending(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Back to the middle of the screen, stopped
    pub fn restart(&mut self) {
        self.rect.set_center(screen_center());
        self.vel = Vec2::ZERO;
    }

    /// Put the ball in play: leftward and upward at the base speed
    pub fn serve(&mut self, base_speed: f32) {
        self.vel = Vec2::new(-base_speed, -base_speed);
    }
}

/// A vertical paddle driven by held keys or the AI
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
    /// Signed vertical speed accumulated from held keys
    pub speed: f32,
    up_held: bool,
    down_held: bool,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        };
        Self {
            rect: Rect::new(
                x,
                SCREEN_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            speed: 0.0,
            up_held: false,
            down_held: false,
        }
    }

    pub fn press_up(&mut self) {
        if !self.up_held {
            self.up_held = true;
            self.speed -= PADDLE_STEP;
        }
    }

    pub fn release_up(&mut self) {
        if self.up_held {
            self.up_held = false;
            self.speed += PADDLE_STEP;
        }
    }

    pub fn press_down(&mut self) {
        if !self.down_held {
            self.down_held = true;
            self.speed += PADDLE_STEP;
        }
    }

    pub fn release_down(&mut self) {
        if self.down_held {
            self.down_held = false;
            self.speed -= PADDLE_STEP;
        }
    }

    /// Forget held keys (match reset)
    pub fn release_all(&mut self) {
        self.up_held = false;
        self.down_held = false;
        self.speed = 0.0;
    }

    /// Apply the accumulated speed, then clamp to the screen
    pub fn advance(&mut self) {
        self.rect.pos.y += self.speed;
        self.rect.clamp_vertical(SCREEN_HEIGHT);
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub left: u32,
    pub right: u32,
}

impl Scores {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn add_point(&mut self, side: Side) -> u32 {
        let score = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *score += 1;
        *score
    }
}

/// Display names for a two-player match
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerNames {
    /// Right paddle
    pub p1: Option<String>,
    /// Left paddle
    pub p2: Option<String>,
}

impl PlayerNames {
    pub fn for_side(&self, side: Side) -> Option<&str> {
        match side {
            Side::Right => self.p1.as_deref(),
            Side::Left => self.p2.as_deref(),
        }
    }

    pub fn clear(&mut self) {
        self.p1 = None;
        self.p2 = None;
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub settings: MatchSettings,
    /// Start menu row being edited
    pub menu_cursor: MenuItem,
    pub names: PlayerNames,
    pub ball: Ball,
    /// Opponent paddle (AI or Player 2)
    pub left: Paddle,
    /// Player 1 paddle
    pub right: Paddle,
    pub scores: Scores,
    /// AI tracking speed for the current match
    pub ai_speed: f32,
    /// Serve speed for the current match
    pub base_ball_speed: f32,
    /// Demo mode: the right paddle is AI-driven and serves happen automatically
    pub autoplay: bool,
    /// Frames since start (drives the menu prompt blink)
    pub frame: u64,
    /// Visual effects (not gameplay-affecting)
    pub effects: Effects,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session on the start menu; `seed` feeds the effects RNG
    pub fn new(seed: u64) -> Self {
        let settings = MatchSettings::default();
        Self {
            phase: Phase::StartMenu,
            settings,
            menu_cursor: MenuItem::Mode,
            names: PlayerNames::default(),
            ball: Ball::default(),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            scores: Scores::default(),
            ai_speed: settings.difficulty.ai_speed(),
            base_ball_speed: settings.ball_speed.base_speed(),
            autoplay: false,
            frame: 0,
            effects: Effects::new(seed),
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Record an event and let the effects layer react to it
    pub fn emit(&mut self, event: GameEvent) {
        let ball_center = self.ball.rect.center();
        self.effects.on_event(event, ball_center);
        self.events.push(event);
    }

    /// Take the events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Start a new match with the current settings
    pub fn reset_match(&mut self) {
        self.scores = Scores::default();
        self.effects.clear();
        if self.settings.vs_ai() {
            self.ai_speed = self.settings.difficulty.ai_speed();
        }
        self.base_ball_speed = self.settings.ball_speed.base_speed();
        self.left.release_all();
        self.right.release_all();
        self.ball.restart();
        self.set_phase(Phase::Playing);
        log::info!(
            "Match started: {} / {} / ball {}",
            self.settings.mode.as_str(),
            self.settings.difficulty.as_str(),
            self.settings.ball_speed.as_str()
        );
    }

    /// Winner label: the player's name in two-player mode, "You"/"AI" otherwise
    pub fn winner_name(&self, side: Side) -> String {
        if self.settings.vs_ai() {
            match side {
                Side::Right => "You".to_string(),
                Side::Left => "AI".to_string(),
            }
        } else {
            self.names.for_side(side).unwrap_or_default().to_string()
        }
    }

    /// Move to the game-over phase if either side has reached the winning score
    pub fn check_for_winner(&mut self) {
        let winner = if self.scores.right >= WINNING_SCORE {
            Side::Right
        } else if self.scores.left >= WINNING_SCORE {
            Side::Left
        } else {
            return;
        };
        let winner_name = self.winner_name(winner);
        log::info!(
            "{} Won! ({} - {})",
            winner_name,
            self.scores.left,
            self.scores.right
        );
        self.set_phase(Phase::GameOver {
            winner,
            winner_name,
        });
        self.emit(GameEvent::MatchWon(winner));
    }

    pub fn set_phase(&mut self, phase: Phase) {
        if self.phase.label() != phase.label() {
            log::debug!("Phase {} -> {}", self.phase.label(), phase.label());
        }
        self.phase = phase;
    }
}
