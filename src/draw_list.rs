//! Frame-scoped draw list - the immediate-mode side of the display
//!
//! Callers append primitives in order, the host renderer consumes the list
//! once per frame and clears it.

use crate::coordinates::{Rect, Vec2};
use crate::font::FontId;

/// A single recorded drawing operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// Draw a text run with an explicit font and pixel size
    Text {
        font: FontId,
        size: f32,
        pos: Vec2,
        color: u32,
        text: String,
    },
    /// Draw line
    Line {
        start: Vec2,
        end: Vec2,
        color: u32,
        width: f32,
    },
    /// Draw filled rectangle
    RectFilled { rect: Rect, color: u32 },
    /// Push clipping rectangle
    PushClip(Rect),
    /// Pop clipping rectangle
    PopClip,
    /// Enter a font scope
    PushFont(FontId),
    /// Leave a font scope
    PopFont,
}

#[derive(Debug, Default)]
pub struct DrawList {
    commands: Vec<DrawCmd>,
    clip_stack: Vec<Rect>,
    font_stack: Vec<FontId>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
            clip_stack: Vec::new(),
            font_stack: Vec::new(),
        }
    }

    pub fn push_clip_rect(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
        self.commands.push(DrawCmd::PushClip(rect));
    }

    pub fn pop_clip_rect(&mut self) {
        if self.clip_stack.pop().is_none() {
            log::warn!("pop_clip_rect with empty clip stack");
            return;
        }
        self.commands.push(DrawCmd::PopClip);
    }

    /// Innermost active clip rect, if any
    pub fn current_clip_rect(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    pub fn add_text(&mut self, font: FontId, size: f32, pos: Vec2, color: u32, text: &[u8]) {
        self.commands.push(DrawCmd::Text {
            font,
            size,
            pos,
            color,
            text: String::from_utf8_lossy(text).into_owned(),
        });
    }

    pub fn add_line(&mut self, start: Vec2, end: Vec2, color: u32, width: f32) {
        self.commands.push(DrawCmd::Line {
            start,
            end,
            color,
            width,
        });
    }

    pub fn add_rect_filled(&mut self, top_left: Vec2, bottom_right: Vec2, color: u32) {
        self.commands.push(DrawCmd::RectFilled {
            rect: Rect::new(top_left, bottom_right),
            color,
        });
    }

    pub fn push_font(&mut self, font: FontId) {
        self.font_stack.push(font);
        self.commands.push(DrawCmd::PushFont(font));
    }

    pub fn pop_font(&mut self) {
        if self.font_stack.pop().is_none() {
            log::warn!("pop_font with empty font stack");
            return;
        }
        self.commands.push(DrawCmd::PopFont);
    }

    /// Font on top of the stack, or `default` outside any font scope
    pub fn current_font(&self, default: FontId) -> FontId {
        self.font_stack.last().copied().unwrap_or(default)
    }

    pub fn font_depth(&self) -> usize {
        self.font_stack.len()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Reset for a new frame
    pub fn clear(&mut self) {
        if !self.clip_stack.is_empty() || !self.font_stack.is_empty() {
            log::warn!(
                "Frame ended with {} clip rects and {} fonts still pushed",
                self.clip_stack.len(),
                self.font_stack.len()
            );
        }
        self.commands.clear();
        self.clip_stack.clear();
        self.font_stack.clear();
    }

    /// Hand the finished frame to the renderer, leaving an empty list behind
    pub fn take(&mut self) -> Vec<DrawCmd> {
        let commands = std::mem::take(&mut self.commands);
        self.clear();
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_stack_records_commands() {
        let mut list = DrawList::new();
        let rect = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));

        list.push_clip_rect(rect);
        assert_eq!(list.current_clip_rect(), Some(rect));
        list.add_line(Vec2::ZERO, Vec2::new(5.0, 5.0), 0xFFFF_FFFF, 1.0);
        list.pop_clip_rect();
        assert_eq!(list.current_clip_rect(), None);

        assert_eq!(list.commands().len(), 3);
        assert_eq!(list.commands()[0], DrawCmd::PushClip(rect));
        assert_eq!(list.commands()[2], DrawCmd::PopClip);
    }

    #[test]
    fn test_unbalanced_pops_are_ignored() {
        let mut list = DrawList::new();
        list.pop_clip_rect();
        list.pop_font();
        assert!(list.is_empty());
    }

    #[test]
    fn test_take_empties_list() {
        let mut list = DrawList::new();
        list.add_rect_filled(Vec2::ZERO, Vec2::new(1.0, 1.0), 0);
        list.push_clip_rect(Rect::default());

        let commands = list.take();
        assert_eq!(commands.len(), 2);
        assert!(list.is_empty());
        assert_eq!(list.current_clip_rect(), None);
    }
}
