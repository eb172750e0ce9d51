//! Screen-space value types shared by the editor and the draw list
//!
//! Everything here is in pixels of the host window. The editor hands these in,
//! the draw list stores them as-is.

use std::ops::{Add, Sub};

/// Position or size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Vec2::new(x, y)
    }
}

/// Axis-aligned rectangle given by its two corners
///
/// The default (all zero) rectangle has zero width, which the display treats
/// as "no clipping".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top_left: Vec2,
    pub bottom_right: Vec2,
}

impl Rect {
    pub const fn new(top_left: Vec2, bottom_right: Vec2) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Build from origin and size, the way layout code usually has it
    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin, origin + size)
    }

    pub fn width(&self) -> f32 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f32 {
        self.bottom_right.y - self.top_left.y
    }

    pub fn size(&self) -> Vec2 {
        self.bottom_right - self.top_left
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.top_left.x
            && point.x < self.bottom_right.x
            && point.y >= self.top_left.y
            && point.y < self.bottom_right.y
    }

    /// Whether this rect should clip anything - zero width means it doesn't
    pub fn is_clipping(&self) -> bool {
        self.width() != 0.0
    }
}

/// Normalized RGBA color as the editor theme produces it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Pack into the draw list's native 32-bit format (A in the high byte, R in the low byte)
    pub fn to_packed_abgr(self) -> u32 {
        let r = channel_to_u8(self.r) as u32;
        let g = channel_to_u8(self.g) as u32;
        let b = channel_to_u8(self.b) as u32;
        let a = channel_to_u8(self.a) as u32;
        (a << 24) | (b << 16) | (g << 8) | r
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Color::new(r, g, b, a)
    }
}

fn channel_to_u8(value: f32) -> u8 {
    // NaN saturates to 0
    let clamped = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    (clamped * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_abgr_byte_order() {
        let color = Color::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(color.to_packed_abgr(), 0x0000_00FF);

        let color = Color::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(color.to_packed_abgr(), 0xFFFF_0000);

        assert_eq!(Color::WHITE.to_packed_abgr(), 0xFFFF_FFFF);
        assert_eq!(Color::TRANSPARENT.to_packed_abgr(), 0);
    }

    #[test]
    fn test_packed_abgr_rounds_and_saturates() {
        // 0.5 * 255 + 0.5 = 128.0
        let color = Color::new(0.5, 2.0, -1.0, 1.0);
        assert_eq!(color.to_packed_abgr(), 0xFF00_FF80);
    }

    #[test]
    fn test_zero_width_rect_does_not_clip() {
        assert!(!Rect::default().is_clipping());

        // Height alone doesn't count
        let tall = Rect::new(Vec2::new(10.0, 0.0), Vec2::new(10.0, 500.0));
        assert!(!tall.is_clipping());

        let rect = Rect::from_origin_size(Vec2::new(10.0, 20.0), Vec2::new(100.0, 50.0));
        assert!(rect.is_clipping());
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 50.0);
        assert!(rect.contains(Vec2::new(10.0, 20.0)));
        assert!(!rect.contains(Vec2::new(110.0, 20.0)));
    }
}
