//! Editor-facing display contract
//!
//! Editor code only ever talks to [`Display`]: it asks for fonts by logical
//! [`FontSlot`] and draws in screen pixels. Which toolkit sits behind it is the
//! implementor's business.

use crate::coordinates::{Color, Rect, Vec2};
use ahash::HashMap;
use serde::Deserialize;
use std::path::Path;

/// Logical font roles used by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSlot {
    Body,
    Heading1,
    Heading2,
    Heading3,
    /// Fixed-width runs inside proportional text
    Fixed,
}

impl FontSlot {
    pub const COUNT: usize = 5;

    pub const ALL: [FontSlot; FontSlot::COUNT] = [
        FontSlot::Body,
        FontSlot::Heading1,
        FontSlot::Heading2,
        FontSlot::Heading3,
        FontSlot::Fixed,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Editor-side metrics cache for one slot
///
/// The display only sets `char_cache_dirty`; the editor decides when to drop
/// its cached sizes.
#[derive(Debug, Default, Clone)]
pub struct FontCache {
    pub char_cache_dirty: bool,
    pub char_sizes: HashMap<char, Vec2>,
}

pub trait Display {
    /// Rendered size of the slot's font
    fn font_point_size(&self, slot: FontSlot) -> f32;

    /// Rescale the slot's font and mark its metrics cache dirty
    fn set_font_point_size(&mut self, slot: FontSlot, size: f32);

    /// Line height in pixels
    fn font_height_pixels(&self, slot: FontSlot) -> f32;

    /// Measure a UTF-8 byte run
    fn text_size(&self, slot: FontSlot, text: &[u8]) -> Vec2;

    fn draw_chars(&mut self, slot: FontSlot, pos: Vec2, color: Color, text: &[u8]);

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, width: f32);

    fn draw_rect_filled(&mut self, rect: Rect, color: Color);

    /// Every push must be matched by a pop
    fn push_font(&mut self, slot: FontSlot);

    fn pop_font(&mut self);

    /// Replace the clip rect; a zero-width rect turns clipping off
    fn set_clip_rect(&mut self, rect: Rect);

    fn clip_rect(&self) -> Rect;

    /// Load a font file into a slot, replacing whatever was there
    fn add_font(&mut self, slot: FontSlot, pixel_height: f32, path: &Path);

    fn font_cache(&self, slot: FontSlot) -> &FontCache;

    fn font_cache_mut(&mut self, slot: FontSlot) -> &mut FontCache;

    /// Cached size of a single character
    fn char_size(&mut self, slot: FontSlot, ch: char) -> Vec2 {
        let cache = self.font_cache_mut(slot);
        if cache.char_cache_dirty {
            cache.char_sizes.clear();
            cache.char_cache_dirty = false;
        }
        if let Some(&size) = cache.char_sizes.get(&ch) {
            return size;
        }

        let mut buf = [0u8; 4];
        let size = self.text_size(slot, ch.encode_utf8(&mut buf).as_bytes());
        self.font_cache_mut(slot).char_sizes.insert(ch, size);
        size
    }
}
