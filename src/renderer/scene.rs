//! Build the frame's geometry from the game state

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{BALL_RADIUS, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sim::{GameState, Phase, Rect, Side};

const CIRCLE_SEGMENTS: u32 = 32;

/// Name entry box, centered on screen
pub fn name_box() -> Rect {
    Rect::centered_at(crate::screen_center(), 300.0, 50.0)
}

/// All shapes for the current frame, in screen pixels with the shake applied
pub fn build(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    match state.phase {
        Phase::Playing => playfield(state, &mut vertices),
        Phase::EnterName { .. } => {
            vertices.extend(shapes::outline(&name_box(), 2.0, colors::ACCENT));
        }
        Phase::StartMenu | Phase::GameOver { .. } => {}
    }

    let offset = state.effects.shake_offset;
    if offset != Vec2::ZERO {
        for v in vertices.iter_mut() {
            v.position[0] += offset.x;
            v.position[1] += offset.y;
        }
    }
    vertices
}

fn playfield(state: &GameState, out: &mut Vec<Vertex>) {
    let fx = &state.effects;

    // Trail first so it sits behind the ball; older points are smaller
    let len = fx.trail.len() as f32;
    for (i, pos) in fx.trail.iter().enumerate() {
        let radius = i as f32 / len * BALL_RADIUS * 0.5;
        out.extend(shapes::circle(*pos, radius, colors::ACCENT, 16));
    }

    for side in [Side::Right, Side::Left] {
        let color = if fx.flash_ticks(side) > 0 {
            colors::LIGHT_GREY
        } else {
            colors::ACCENT
        };
        out.extend(shapes::rect(&state.paddle(side).rect, color));
    }

    if fx.squash_ticks > 0 {
        let squashed = Rect::centered_at(
            state.ball.rect.center(),
            BALL_RADIUS * 2.5,
            BALL_RADIUS * 1.5,
        );
        out.extend(shapes::ellipse(&squashed, colors::LIGHT_GREY, CIRCLE_SEGMENTS));
    } else {
        out.extend(shapes::ellipse(&state.ball.rect, colors::ACCENT, CIRCLE_SEGMENTS));
    }

    out.extend(shapes::line(
        Vec2::new(SCREEN_WIDTH / 2.0, 0.0),
        Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT),
        1.0,
        colors::LIGHT_GREY,
    ));

    if fx.screen_flash_ticks > 0 {
        out.extend(shapes::rect(
            &Rect::new(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT),
            colors::SCORE_FLASH,
        ));
    }

    for particle in &fx.particles {
        let size = particle.size();
        out.extend(shapes::rect(
            &Rect::centered_at(particle.pos, size, size),
            colors::LIGHT_GREY,
        ));
    }
}
