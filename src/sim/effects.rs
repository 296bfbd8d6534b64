//! Cosmetic effects driven by game events
//!
//! Nothing here feeds back into gameplay. Timers count frames.

use std::collections::VecDeque;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GameEvent, Side};

/// Ball squash after a paddle hit
pub const SQUASH_TICKS: u32 = 10;
/// White overlay after a point
pub const SCREEN_FLASH_TICKS: u32 = 15;
/// Screen shake after a paddle hit
pub const SHAKE_TICKS: u32 = 8;
/// Maximum shake offset in pixels (per axis)
pub const SHAKE_MAGNITUDE: i32 = 4;
/// Paddle highlight after a hit
pub const PADDLE_FLASH_TICKS: u32 = 10;
/// Particles spawned per paddle hit
pub const PARTICLES_PER_HIT: usize = 10;
/// Ball positions kept for the trail
pub const TRAIL_LENGTH: usize = 10;

/// A square spark that drifts and shrinks
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames left; drawn size shrinks with it
    pub life: u32,
}

impl Particle {
    pub fn size(&self) -> f32 {
        self.life as f32 * 0.5
    }
}

/// All transient visual state
#[derive(Debug, Clone)]
pub struct Effects {
    pub particles: Vec<Particle>,
    /// Recent ball centers, oldest first
    pub trail: VecDeque<Vec2>,
    pub squash_ticks: u32,
    pub screen_flash_ticks: u32,
    pub shake_ticks: u32,
    pub left_flash_ticks: u32,
    pub right_flash_ticks: u32,
    /// Offset applied to the whole frame this tick
    pub shake_offset: Vec2,
    rng: Pcg32,
}

impl Effects {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::new(),
            trail: VecDeque::with_capacity(TRAIL_LENGTH + 1),
            squash_ticks: 0,
            screen_flash_ticks: 0,
            shake_ticks: 0,
            left_flash_ticks: 0,
            right_flash_ticks: 0,
            shake_offset: Vec2::ZERO,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Drop everything (new match)
    pub fn clear(&mut self) {
        self.particles.clear();
        self.trail.clear();
        self.squash_ticks = 0;
        self.screen_flash_ticks = 0;
        self.shake_ticks = 0;
        self.left_flash_ticks = 0;
        self.right_flash_ticks = 0;
        self.shake_offset = Vec2::ZERO;
    }

    pub fn flash_ticks(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_flash_ticks,
            Side::Right => self.right_flash_ticks,
        }
    }

    /// React to a gameplay event
    pub fn on_event(&mut self, event: GameEvent, ball_center: Vec2) {
        match event {
            GameEvent::PaddleHit(side) => {
                self.squash_ticks = SQUASH_TICKS;
                self.shake_ticks = SHAKE_TICKS;
                match side {
                    Side::Left => self.left_flash_ticks = PADDLE_FLASH_TICKS,
                    Side::Right => self.right_flash_ticks = PADDLE_FLASH_TICKS,
                }
                self.spawn_particles(ball_center);
            }
            GameEvent::Scored(_) => self.screen_flash_ticks = SCREEN_FLASH_TICKS,
            GameEvent::WallBounce | GameEvent::MatchWon(_) | GameEvent::Served => {}
        }
    }

    fn spawn_particles(&mut self, origin: Vec2) {
        for _ in 0..PARTICLES_PER_HIT {
            let vel = Vec2::new(
                self.rng.random_range(-3.0..=3.0),
                self.rng.random_range(-3.0..=3.0),
            );
            let life = self.rng.random_range(10..=20);
            self.particles.push(Particle {
                pos: origin,
                vel,
                life,
            });
        }
    }

    /// Count down playfield timers and move particles (one playing frame)
    pub fn advance(&mut self) {
        self.squash_ticks = self.squash_ticks.saturating_sub(1);
        self.screen_flash_ticks = self.screen_flash_ticks.saturating_sub(1);
        self.left_flash_ticks = self.left_flash_ticks.saturating_sub(1);
        self.right_flash_ticks = self.right_flash_ticks.saturating_sub(1);

        for particle in self.particles.iter_mut() {
            particle.pos += particle.vel;
            particle.life = particle.life.saturating_sub(1);
        }
        self.particles.retain(|p| p.life > 0);
    }

    /// Remember the ball position for the trail
    pub fn record_trail(&mut self, ball_center: Vec2) {
        self.trail.push_back(ball_center);
        while self.trail.len() > TRAIL_LENGTH {
            self.trail.pop_front();
        }
    }

    /// Pick this frame's shake offset (runs every frame, in every phase)
    pub fn update_shake(&mut self) {
        if self.shake_ticks > 0 {
            self.shake_offset = Vec2::new(
                self.rng.random_range(-SHAKE_MAGNITUDE..=SHAKE_MAGNITUDE) as f32,
                self.rng.random_range(-SHAKE_MAGNITUDE..=SHAKE_MAGNITUDE) as f32,
            );
            self.shake_ticks -= 1;
        } else {
            self.shake_offset = Vec2::ZERO;
        }
    }
}
