//! Display adapter demo - loads fonts from a config and records one frame
//!
//! Usage: tiny-display [display.toml]

use anyhow::Context;
use std::path::PathBuf;
use tiny_display::{
    Color, Display, DisplayConfig, DrawCmd, DrawListDisplay, FontAtlas, FontConfig, FontSlot,
    FontdueLoader, GlyphRanges, Rect, SharedFontAtlas, Vec2,
};

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("display.toml"));

    println!("Loading display config from {}", config_path.display());
    let config = DisplayConfig::load(&config_path)?;

    // The host owns the atlas and picks the fallback font
    let mut atlas = FontAtlas::new(FontdueLoader);
    let first = config
        .fonts
        .first()
        .context("Config lists no fonts, nothing to use as the default font")?;
    let default_font = atlas
        .add_font_from_file(
            &first.path,
            first.pixel_height,
            &FontConfig::default(),
            &GlyphRanges::editor_default(),
        )
        .with_context(|| format!("Failed to load default font {}", first.path.display()))?;

    let mut display = DrawListDisplay::new(SharedFontAtlas::new(atlas), default_font);
    config.apply(&mut display);

    for slot in FontSlot::ALL {
        println!(
            "{:?}: {:.1}px (bound: {})",
            slot,
            display.font_point_size(slot),
            display.slot_font(slot).is_some()
        );
    }

    display.begin_frame();
    draw_sample(&mut display);
    let commands = display.take_draw_list();

    let mut counts = [0usize; 5];
    for cmd in &commands {
        let idx = match cmd {
            DrawCmd::Text { .. } => 0,
            DrawCmd::Line { .. } => 1,
            DrawCmd::RectFilled { .. } => 2,
            DrawCmd::PushClip(_) | DrawCmd::PopClip => 3,
            DrawCmd::PushFont(_) | DrawCmd::PopFont => 4,
        };
        counts[idx] += 1;
    }
    println!(
        "Frame: {} commands ({} text, {} lines, {} rects, {} clip, {} font)",
        commands.len(),
        counts[0],
        counts[1],
        counts[2],
        counts[3],
        counts[4]
    );

    Ok(())
}

/// A gutter, a clipped line of text and a cursor
fn draw_sample(display: &mut DrawListDisplay) {
    let line = b"fn main() { println!(\"Hello from tiny display!\"); }";
    let line_height = display.font_height_pixels(FontSlot::Body);
    let gutter = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(40.0, line_height * 2.0));
    display.draw_rect_filled(gutter, Color::new(0.15, 0.15, 0.18, 1.0));

    let text_area = Rect::new(Vec2::new(44.0, 0.0), Vec2::new(400.0, line_height * 2.0));
    let cursor_x = {
        let mut clipped = display.clip_scope(text_area);
        let mut body = clipped.font_scope(FontSlot::Body);
        body.draw_chars(FontSlot::Body, Vec2::new(44.0, 0.0), Color::WHITE, line);
        44.0 + body.text_size(FontSlot::Body, line).x
    };

    display.draw_line(
        Vec2::new(cursor_x, 0.0),
        Vec2::new(cursor_x, line_height),
        Color::new(1.0, 0.8, 0.2, 1.0),
        2.0,
    );
}
