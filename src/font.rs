//! Font atlas - the toolkit side of font ownership
//!
//! The atlas owns every loaded font. Everyone else holds a [`FontId`], which is
//! only a weak reference: once the atlas is rebuilt with [`FontAtlas::clear`],
//! older ids stop resolving instead of dangling.

use crate::coordinates::Vec2;
use crate::glyph_ranges::GlyphRanges;
use parking_lot::{Mutex, MutexGuard};
use std::path::Path;
use std::sync::Arc;

/// Glyph metrics source behind a loaded font
pub trait FontFace: Send + Sync {
    /// Horizontal advance of `ch` at `px` pixels, `None` if the face has no glyph for it
    fn advance(&self, ch: char, px: f32) -> Option<f32>;
}

impl FontFace for fontdue::Font {
    fn advance(&self, ch: char, px: f32) -> Option<f32> {
        // Index 0 is .notdef
        if self.lookup_glyph_index(ch) == 0 {
            return None;
        }
        Some(self.metrics(ch, px).advance_width)
    }
}

/// Turns a font file into a face
pub trait FaceLoader: Send + Sync {
    fn load(&self, path: &Path, pixel_height: f32) -> Option<Box<dyn FontFace>>;
}

/// Loads TTF/OTF files from disk with fontdue
#[derive(Debug, Default, Clone, Copy)]
pub struct FontdueLoader;

impl FaceLoader for FontdueLoader {
    fn load(&self, path: &Path, pixel_height: f32) -> Option<Box<dyn FontFace>> {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                log::debug!("Failed to read font {}: {}", path.display(), e);
                return None;
            }
        };

        let settings = fontdue::FontSettings {
            scale: pixel_height,
            ..fontdue::FontSettings::default()
        };
        match fontdue::Font::from_bytes(data, settings) {
            Ok(font) => Some(Box::new(font)),
            Err(e) => {
                log::debug!("Failed to parse font {}: {}", path.display(), e);
                None
            }
        }
    }
}

/// Per-font load options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontConfig {
    pub oversample_h: u8,
    pub oversample_v: u8,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            oversample_h: 2,
            oversample_v: 1,
        }
    }
}

/// A font living in the atlas
pub struct Font {
    face: Box<dyn FontFace>,
    /// Pixel height the font was loaded at
    pub font_size: f32,
    /// Runtime scale applied on top of `font_size`
    pub scale: f32,
    pub config: FontConfig,
    ranges: GlyphRanges,
}

impl Font {
    /// Size the font actually renders at
    pub fn scaled_size(&self) -> f32 {
        self.font_size * self.scale
    }

    pub fn ranges(&self) -> &GlyphRanges {
        &self.ranges
    }

    /// Advance for one character, zero when the atlas can't draw it
    pub fn char_advance(&self, ch: char, size: f32) -> f32 {
        if !self.ranges.contains(ch) {
            return 0.0;
        }
        self.face.advance(ch, size).unwrap_or(0.0)
    }

    /// Measure a UTF-8 byte run at `size` pixels
    ///
    /// Width is the widest line, height is one `size` per line. A trailing
    /// empty line after the last `\n` adds no height. Invalid UTF-8 decodes to
    /// U+FFFD, which usually isn't in range and so adds nothing.
    pub fn calc_text_size(&self, size: f32, text: &[u8]) -> Vec2 {
        let text = String::from_utf8_lossy(text);

        let mut max_width = 0.0f32;
        let mut line_width = 0.0f32;
        let mut newlines = 0;
        let mut last_line_has_text = false;

        for ch in text.chars() {
            match ch {
                '\n' => {
                    max_width = max_width.max(line_width);
                    line_width = 0.0;
                    newlines += 1;
                    last_line_has_text = false;
                }
                '\r' => {}
                _ => {
                    line_width += self.char_advance(ch, size);
                    last_line_has_text = true;
                }
            }
        }

        let lines = if last_line_has_text || newlines == 0 {
            newlines + 1
        } else {
            newlines
        };
        Vec2::new(max_width.max(line_width), lines as f32 * size)
    }
}

impl std::fmt::Debug for Font {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Font")
            .field("font_size", &self.font_size)
            .field("scale", &self.scale)
            .field("config", &self.config)
            .field("ranges", &self.ranges.ranges().len())
            .finish()
    }
}

/// Weak handle to a font in a [`FontAtlas`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FontId {
    index: u32,
    generation: u32,
}

/// All fonts loaded for the current atlas build
pub struct FontAtlas {
    fonts: Vec<Font>,
    generation: u32,
    loader: Box<dyn FaceLoader>,
}

impl FontAtlas {
    pub fn new(loader: impl FaceLoader + 'static) -> Self {
        Self {
            fonts: Vec::new(),
            generation: 0,
            loader: Box::new(loader),
        }
    }

    /// Load a font file, `None` if the loader couldn't produce a face
    pub fn add_font_from_file(
        &mut self,
        path: &Path,
        pixel_height: f32,
        config: &FontConfig,
        ranges: &GlyphRanges,
    ) -> Option<FontId> {
        let face = self.loader.load(path, pixel_height)?;
        Some(self.add_font_face(face, pixel_height, config, ranges))
    }

    /// Add an already constructed face
    pub fn add_font_face(
        &mut self,
        face: Box<dyn FontFace>,
        pixel_height: f32,
        config: &FontConfig,
        ranges: &GlyphRanges,
    ) -> FontId {
        let id = FontId {
            index: self.fonts.len() as u32,
            generation: self.generation,
        };
        self.fonts.push(Font {
            face,
            font_size: pixel_height,
            scale: 1.0,
            config: *config,
            ranges: ranges.clone(),
        });
        id
    }

    pub fn font(&self, id: FontId) -> Option<&Font> {
        if id.generation != self.generation {
            return None;
        }
        self.fonts.get(id.index as usize)
    }

    pub fn font_mut(&mut self, id: FontId) -> Option<&mut Font> {
        if id.generation != self.generation {
            return None;
        }
        self.fonts.get_mut(id.index as usize)
    }

    pub fn is_live(&self, id: FontId) -> bool {
        self.font(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Drop every font for a rebuild; all outstanding ids go stale
    pub fn clear(&mut self) {
        self.fonts.clear();
        self.generation = self.generation.wrapping_add(1);
    }
}

/// Thread-safe wrapper for FontAtlas
#[derive(Clone)]
pub struct SharedFontAtlas {
    inner: Arc<Mutex<FontAtlas>>,
}

impl SharedFontAtlas {
    pub fn new(atlas: FontAtlas) -> Self {
        Self {
            inner: Arc::new(Mutex::new(atlas)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, FontAtlas> {
        self.inner.lock()
    }
}
