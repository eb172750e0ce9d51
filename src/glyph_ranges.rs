//! Glyph range sets - which code points a font in the atlas is prepared to draw
//!
//! Ranges are inclusive `(first, last)` pairs. The builder accepts any mix of
//! overlapping tables and produces one ordered, merged set.

/// Basic Latin + Latin-1 Supplement
pub const DEFAULT: &[(u32, u32)] = &[(0x0020, 0x00FF)];

/// Default + Cyrillic, Cyrillic Supplement and the extended blocks
pub const CYRILLIC: &[(u32, u32)] = &[
    (0x0020, 0x00FF),
    (0x0400, 0x052F),
    (0x2DE0, 0x2DFF),
    (0xA640, 0xA69F),
];

/// Combining marks through Cyrillic Supplement, plus Greek Extended
pub const GREEK_EXTENDED: &[(u32, u32)] = &[(0x0300, 0x052F), (0x1F00, 0x1FFF)];

/// Ordered, non-overlapping set of inclusive code point ranges
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphRanges {
    ranges: Vec<(u32, u32)>,
}

impl GlyphRanges {
    /// The set every editor font is loaded with: default + Cyrillic + Greek extended
    pub fn editor_default() -> Self {
        let mut builder = GlyphRangesBuilder::new();
        builder.add_ranges(DEFAULT);
        builder.add_ranges(CYRILLIC);
        builder.add_ranges(GREEK_EXTENDED);
        builder.build()
    }

    pub fn ranges(&self) -> &[(u32, u32)] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of code points covered
    pub fn glyph_count(&self) -> usize {
        self.ranges
            .iter()
            .map(|&(first, last)| (last - first + 1) as usize)
            .sum()
    }

    pub fn contains(&self, ch: char) -> bool {
        let cp = ch as u32;
        // Find the last range starting at or before cp
        let idx = self.ranges.partition_point(|&(first, _)| first <= cp);
        idx > 0 && cp <= self.ranges[idx - 1].1
    }
}

/// Accumulates code points in a bitset, then emits merged ranges
#[derive(Debug, Default)]
pub struct GlyphRangesBuilder {
    used: Vec<u64>,
}

impl GlyphRangesBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_char(&mut self, ch: char) {
        self.set_bit(ch as u32);
    }

    pub fn add_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.add_char(ch);
        }
    }

    pub fn add_ranges(&mut self, ranges: &[(u32, u32)]) {
        for &(first, last) in ranges {
            if first > last || last > char::MAX as u32 {
                log::warn!("Ignoring invalid glyph range {:#x}..={:#x}", first, last);
                continue;
            }
            for cp in first..=last {
                self.set_bit(cp);
            }
        }
    }

    fn set_bit(&mut self, cp: u32) {
        let word = (cp / 64) as usize;
        if word >= self.used.len() {
            self.used.resize(word + 1, 0);
        }
        self.used[word] |= 1 << (cp % 64);
    }

    fn is_set(&self, cp: u32) -> bool {
        self.used
            .get((cp / 64) as usize)
            .is_some_and(|word| word & (1 << (cp % 64)) != 0)
    }

    pub fn build(&self) -> GlyphRanges {
        let mut ranges: Vec<(u32, u32)> = Vec::new();
        let max = self.used.len() as u32 * 64;

        let mut cp = 0;
        while cp < max {
            // Skip whole empty words
            if cp % 64 == 0 && self.used[(cp / 64) as usize] == 0 {
                cp += 64;
                continue;
            }
            if self.is_set(cp) {
                match ranges.last_mut() {
                    Some(last) if last.1 + 1 == cp => last.1 = cp,
                    _ => ranges.push((cp, cp)),
                }
            }
            cp += 1;
        }

        GlyphRanges { ranges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_merges_overlaps() {
        let mut builder = GlyphRangesBuilder::new();
        builder.add_ranges(&[(0x20, 0x7F), (0x60, 0xFF)]);
        builder.add_ranges(&[(0x100, 0x110)]);
        assert_eq!(builder.build().ranges(), &[(0x20, 0x110)]);
    }

    #[test]
    fn test_builder_keeps_gaps() {
        let mut builder = GlyphRangesBuilder::new();
        builder.add_text("ab");
        builder.add_char('z');
        assert_eq!(builder.build().ranges(), &[(0x61, 0x62), (0x7A, 0x7A)]);
    }

    #[test]
    fn test_builder_ignores_inverted_range() {
        let mut builder = GlyphRangesBuilder::new();
        builder.add_ranges(&[(0x50, 0x40)]);
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_editor_default_ranges() {
        let ranges = GlyphRanges::editor_default();
        assert_eq!(
            ranges.ranges(),
            &[
                (0x0020, 0x00FF),
                (0x0300, 0x052F),
                (0x1F00, 0x1FFF),
                (0x2DE0, 0x2DFF),
                (0xA640, 0xA69F),
            ]
        );

        assert!(ranges.contains('A'));
        assert!(ranges.contains('Ж'));
        assert!(ranges.contains('ἀ')); // U+1F00
        assert!(!ranges.contains('\u{1F}'));
        assert!(!ranges.contains('中'));
        assert_eq!(ranges.glyph_count(), 0xE0 + 0x230 + 0x100 + 0x20 + 0x60);
    }
}
