//! Test fonts: fixed advances, loaded by path without touching the disk

#![allow(dead_code)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tiny_display::{
    DrawListDisplay, FaceLoader, FontAtlas, FontConfig, FontFace, FontId, GlyphRanges,
    SharedFontAtlas,
};

/// Every char advances by `ratio * px`, except those in `missing`
pub struct FixedFace {
    pub ratio: f32,
    pub missing: &'static [char],
}

impl FontFace for FixedFace {
    fn advance(&self, ch: char, px: f32) -> Option<f32> {
        if self.missing.contains(&ch) {
            None
        } else {
            Some(px * self.ratio)
        }
    }
}

/// Serves a `FixedFace` for each known path, `None` for anything else
#[derive(Default)]
pub struct PathLoader {
    faces: HashMap<PathBuf, f32>,
}

impl PathLoader {
    pub fn with(mut self, path: &str, ratio: f32) -> Self {
        self.faces.insert(PathBuf::from(path), ratio);
        self
    }
}

impl FaceLoader for PathLoader {
    fn load(&self, path: &Path, _pixel_height: f32) -> Option<Box<dyn FontFace>> {
        let ratio = *self.faces.get(path)?;
        Some(Box::new(FixedFace {
            ratio,
            missing: &['\u{E000}'],
        }))
    }
}

pub const MONO: &str = "fonts/mono.ttf";
pub const WIDE: &str = "fonts/wide.ttf";

/// Display whose default font is 10px with half-pixel advances
pub fn display() -> (DrawListDisplay, FontId) {
    let loader = PathLoader::default().with(MONO, 0.6).with(WIDE, 1.0);
    let mut atlas = FontAtlas::new(loader);
    let default = atlas.add_font_face(
        Box::new(FixedFace {
            ratio: 0.5,
            missing: &['\u{E000}'],
        }),
        10.0,
        &FontConfig::default(),
        &GlyphRanges::editor_default(),
    );
    (
        DrawListDisplay::new(SharedFontAtlas::new(atlas), default),
        default,
    )
}
