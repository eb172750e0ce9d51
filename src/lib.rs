//! Editor display adapter over an immediate-mode draw list
//!
//! The editor draws through [`Display`]; [`DrawListDisplay`] turns those calls
//! into [`DrawCmd`]s against fonts held in a shared [`FontAtlas`].

pub mod adapter;
pub mod config;
pub mod coordinates;
pub mod display;
pub mod draw_list;
pub mod font;
pub mod glyph_ranges;

// Re-export core types
pub use adapter::{ClipScope, DrawListDisplay, FontScope};
pub use config::DisplayConfig;
pub use coordinates::{Color, Rect, Vec2};
pub use display::{Display, FontCache, FontSlot};
pub use draw_list::{DrawCmd, DrawList};
pub use font::{
    FaceLoader, Font, FontAtlas, FontConfig, FontFace, FontId, FontdueLoader, SharedFontAtlas,
};
pub use glyph_ranges::{GlyphRanges, GlyphRangesBuilder};
