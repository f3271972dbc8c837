//! Drawing primitives required from a render target.
//!
//! The game only ever clears the surface and fills glowing rectangles, so a
//! target needs nothing more than these two operations.

use crate::types::{Rgb, GLOW_BLUR};

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Fill colour plus glow (shadow blur radius, same colour as the fill).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Paint {
    pub color: Rgb,
    pub glow: u8,
}

impl Paint {
    /// Solid fill with the standard neon glow.
    pub const fn neon(color: Rgb) -> Self {
        Self {
            color,
            glow: GLOW_BLUR,
        }
    }
}

/// A 2D surface the game renders into.
pub trait DrawSurface {
    /// Erase the whole surface.
    fn clear(&mut self);

    /// Fill `rect` with `paint`. Parts outside the surface are clipped.
    fn fill_rect(&mut self, rect: Rect, paint: Paint);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn fill_rect(&mut self, rect: Rect, paint: Paint) {
        (**self).fill_rect(rect, paint);
    }
}
