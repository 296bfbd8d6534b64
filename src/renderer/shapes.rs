//! Shape generation for 2D primitives
//!
//! Everything is emitted as a triangle list in screen pixels.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Filled axis-aligned rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, b, color),
    ]
}

/// Rectangle border drawn inside `r`
pub fn outline(r: &Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = r.width();
    let h = r.height();
    let t = thickness.min(w / 2.0).min(h / 2.0);
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(&Rect::new(r.left(), r.top(), w, t), color));
    vertices.extend(rect(&Rect::new(r.left(), r.bottom() - t, w, t), color));
    vertices.extend(rect(&Rect::new(r.left(), r.top() + t, t, h - 2.0 * t), color));
    vertices.extend(rect(
        &Rect::new(r.right() - t, r.top() + t, t, h - 2.0 * t),
        color,
    ));
    vertices
}

/// Filled ellipse inscribed in `r`
pub fn ellipse(r: &Rect, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let center = r.center();
    let radii = r.size() / 2.0;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radii.x * theta1.cos(),
            center.y + radii.y * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radii.x * theta2.cos(),
            center.y + radii.y * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    if radius <= 0.0 {
        return Vec::new();
    }
    let d = radius * 2.0;
    ellipse(&Rect::centered_at(center, d, d), color, segments)
}

/// Straight line as a thin quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}
