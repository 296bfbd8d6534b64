//! Axis-aligned rectangle geometry for the ball and paddles
//!
//! Screen space: origin at the top-left corner, y grows downward.

use glam::Vec2;

/// A rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (fixed after construction)
    size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Build a rectangle of the given size centered on `center`
    pub fn centered_at(center: Vec2, width: f32, height: f32) -> Self {
        let size = Vec2::new(width, height);
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size / 2.0;
    }

    /// AABB overlap test, touching edges count as overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Keep the rectangle inside `[0, bounds_height]` vertically
    pub fn clamp_vertical(&mut self, bounds_height: f32) {
        if self.top() <= 0.0 {
            self.pos.y = 0.0;
        }
        if self.bottom() >= bounds_height {
            self.pos.y = bounds_height - self.size.y;
        }
    }
}
