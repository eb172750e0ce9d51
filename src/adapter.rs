//! Display adapter - editor draw calls in, draw list commands out
//!
//! Fonts are looked up per call through the shared atlas, so a slot whose font
//! went away with an atlas rebuild quietly falls back to the default font.

use crate::coordinates::{Color, Rect, Vec2};
use crate::display::{Display, FontCache, FontSlot};
use crate::draw_list::{DrawCmd, DrawList};
use crate::font::{Font, FontAtlas, FontConfig, FontId, SharedFontAtlas};
use crate::glyph_ranges::GlyphRanges;
use std::ops::{Deref, DerefMut};
use std::path::Path;

/// Stand-in measured when a run has no width at all
const FALLBACK_CHAR: &[u8] = b"A";

/// Oversampling used for every font registered through the display
const FONT_OVERSAMPLE: u8 = 4;

/// [`Display`] implementation that records into a frame [`DrawList`]
pub struct DrawListDisplay {
    atlas: SharedFontAtlas,
    /// Host-provided font used for any slot without a live font
    default_font: FontId,
    fonts: [Option<FontId>; FontSlot::COUNT],
    caches: [FontCache; FontSlot::COUNT],
    clip_rect: Rect,
    draw_list: DrawList,
    /// Built once at construction and handed to every `add_font` load
    ranges: GlyphRanges,
}

impl DrawListDisplay {
    pub fn new(atlas: SharedFontAtlas, default_font: FontId) -> Self {
        Self {
            atlas,
            default_font,
            fonts: [None; FontSlot::COUNT],
            caches: std::array::from_fn(|_| FontCache::default()),
            clip_rect: Rect::default(),
            draw_list: DrawList::new(),
            ranges: GlyphRanges::editor_default(),
        }
    }

    /// Font that drawing with `slot` will use
    pub fn resolve_font(&self, slot: FontSlot) -> FontId {
        let atlas = self.atlas.lock();
        self.resolve_in(&atlas, slot)
    }

    fn resolve_in(&self, atlas: &FontAtlas, slot: FontSlot) -> FontId {
        self.fonts[slot.index()]
            .filter(|&id| atlas.is_live(id))
            .unwrap_or(self.default_font)
    }

    fn with_font<R>(&self, slot: FontSlot, f: impl FnOnce(FontId, &Font) -> R) -> Option<R> {
        let atlas = self.atlas.lock();
        let id = self.resolve_in(&atlas, slot);
        atlas.font(id).map(|font| f(id, font))
    }

    /// Raw slot binding, without falling back
    pub fn slot_font(&self, slot: FontSlot) -> Option<FontId> {
        self.fonts[slot.index()]
    }

    pub fn default_font(&self) -> FontId {
        self.default_font
    }

    /// Swap the fallback font, e.g. after the host rebuilt its atlas
    pub fn set_default_font(&mut self, font: FontId) {
        self.default_font = font;
        for cache in &mut self.caches {
            cache.char_cache_dirty = true;
        }
    }

    pub fn atlas(&self) -> &SharedFontAtlas {
        &self.atlas
    }

    pub fn glyph_ranges(&self) -> &GlyphRanges {
        &self.ranges
    }

    /// Start a new frame, dropping anything left from the previous one
    pub fn begin_frame(&mut self) {
        self.draw_list.clear();
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    /// Hand the recorded frame to the renderer
    pub fn take_draw_list(&mut self) -> Vec<DrawCmd> {
        self.draw_list.take()
    }

    /// Push a font for the lifetime of the returned guard
    pub fn font_scope(&mut self, slot: FontSlot) -> FontScope<'_> {
        self.push_font(slot);
        FontScope { display: self }
    }

    /// Clip to `rect` for the lifetime of the returned guard
    pub fn clip_scope(&mut self, rect: Rect) -> ClipScope<'_> {
        let previous = self.clip_rect;
        self.clip_rect = rect;
        ClipScope {
            display: self,
            previous,
        }
    }

    /// Run a single primitive, bracketed by the clip rect when one is active
    fn clipped(&mut self, draw: impl FnOnce(&mut DrawList)) {
        let clip = self.clip_rect;
        if clip.is_clipping() {
            self.draw_list.push_clip_rect(clip);
            draw(&mut self.draw_list);
            self.draw_list.pop_clip_rect();
        } else {
            draw(&mut self.draw_list);
        }
    }
}

impl Display for DrawListDisplay {
    fn font_point_size(&self, slot: FontSlot) -> f32 {
        self.with_font(slot, |_, font| font.scaled_size())
            .unwrap_or(0.0)
    }

    fn set_font_point_size(&mut self, slot: FontSlot, size: f32) {
        let mut atlas = self.atlas.lock();
        let id = self.resolve_in(&atlas, slot);

        // Slots sharing the font (e.g. all unbound ones on the default) change size too
        let shares_font = FontSlot::ALL.map(|other| self.resolve_in(&atlas, other) == id);
        for (cache, shared) in self.caches.iter_mut().zip(shares_font) {
            if shared {
                cache.char_cache_dirty = true;
            }
        }

        if let Some(font) = atlas.font_mut(id) {
            if font.font_size > 0.0 {
                font.scale = size / font.font_size;
            }
        }
    }

    fn font_height_pixels(&self, slot: FontSlot) -> f32 {
        self.font_point_size(slot)
    }

    fn text_size(&self, slot: FontSlot, text: &[u8]) -> Vec2 {
        self.with_font(slot, |_, font| {
            let size = font.scaled_size();
            let measured = font.calc_text_size(size, text);
            if measured.x == 0.0 {
                // Zero-width runs would collapse layout; give them a cell's width
                font.calc_text_size(size, FALLBACK_CHAR)
            } else {
                measured
            }
        })
        .unwrap_or(Vec2::ZERO)
    }

    fn draw_chars(&mut self, slot: FontSlot, pos: Vec2, color: Color, text: &[u8]) {
        let Some((font, size)) = self.with_font(slot, |id, font| (id, font.scaled_size())) else {
            log::debug!("No live font for {:?}, skipping text draw", slot);
            return;
        };
        let color = color.to_packed_abgr();
        self.clipped(|list| list.add_text(font, size, pos, color, text));
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, color: Color, width: f32) {
        let color = color.to_packed_abgr();
        self.clipped(|list| list.add_line(start, end, color, width));
    }

    fn draw_rect_filled(&mut self, rect: Rect, color: Color) {
        let color = color.to_packed_abgr();
        self.clipped(|list| list.add_rect_filled(rect.top_left, rect.bottom_right, color));
    }

    fn push_font(&mut self, slot: FontSlot) {
        let font = self.resolve_font(slot);
        self.draw_list.push_font(font);
    }

    fn pop_font(&mut self) {
        self.draw_list.pop_font();
    }

    fn set_clip_rect(&mut self, rect: Rect) {
        self.clip_rect = rect;
    }

    fn clip_rect(&self) -> Rect {
        self.clip_rect
    }

    fn add_font(&mut self, slot: FontSlot, pixel_height: f32, path: &Path) {
        let config = FontConfig {
            oversample_h: FONT_OVERSAMPLE,
            oversample_v: FONT_OVERSAMPLE,
        };

        let font = self
            .atlas
            .lock()
            .add_font_from_file(path, pixel_height, &config, &self.ranges);
        self.fonts[slot.index()] = font;
        self.caches[slot.index()].char_cache_dirty = true;

        log::info!("Type: {:?} Font Pixel Size: {}", slot, pixel_height);
    }

    fn font_cache(&self, slot: FontSlot) -> &FontCache {
        &self.caches[slot.index()]
    }

    fn font_cache_mut(&mut self, slot: FontSlot) -> &mut FontCache {
        &mut self.caches[slot.index()]
    }
}

/// Pops its font when dropped
pub struct FontScope<'a> {
    display: &'a mut DrawListDisplay,
}

impl Deref for FontScope<'_> {
    type Target = DrawListDisplay;
    fn deref(&self) -> &DrawListDisplay {
        self.display
    }
}

impl DerefMut for FontScope<'_> {
    fn deref_mut(&mut self) -> &mut DrawListDisplay {
        self.display
    }
}

impl Drop for FontScope<'_> {
    fn drop(&mut self) {
        self.display.pop_font();
    }
}

/// Restores the previous clip rect when dropped
pub struct ClipScope<'a> {
    display: &'a mut DrawListDisplay,
    previous: Rect,
}

impl Deref for ClipScope<'_> {
    type Target = DrawListDisplay;
    fn deref(&self) -> &DrawListDisplay {
        self.display
    }
}

impl DerefMut for ClipScope<'_> {
    fn deref_mut(&mut self) -> &mut DrawListDisplay {
        self.display
    }
}

impl Drop for ClipScope<'_> {
    fn drop(&mut self) {
        self.display.clip_rect = self.previous;
    }
}
