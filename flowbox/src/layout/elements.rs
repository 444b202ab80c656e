//! Leaf content - TextBlock.
//!
//! Estimates text extents from monospace metrics so layouts can be run
//! without a font stack. Good enough for scene dumps and tests; a renderer
//! with real shaping implements [`ReflowableContent`] itself.

use unicode_width::UnicodeWidthChar;

use crate::primitives::Size;

use super::length::{BASE_FONT_SIZE, CHAR_WIDTH, LINE_HEIGHT};
use super::node::ReflowableContent;

// =========================================================================
// Helper Functions
// =========================================================================

/// Estimate display width in cell units (1 for Latin, 2 for CJK, 0 for combining marks).
pub(crate) fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

// =========================================================================
// TextBlock
// =========================================================================

/// Word-wrapped text that reflows to its resize limit.
#[derive(Debug, Clone)]
pub struct TextBlock {
    text: String,
    /// Font size (if different from default).
    size: Option<f32>,
    limit: Size,
    lines: Vec<String>,
    measured: Size,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        let mut block = Self {
            text: text.into(),
            size: None,
            limit: Size::ZERO,
            lines: Vec::new(),
            measured: Size::ZERO,
        };
        block.reflow();
        block
    }

    /// Set the font size.
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self.reflow();
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.reflow();
    }

    /// Lines after the last reflow.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Get the effective font size for this block.
    pub fn font_size(&self) -> f32 {
        self.size.unwrap_or(BASE_FONT_SIZE)
    }

    /// Character advance and line height, scaled linearly from the base size.
    fn metrics(&self) -> (f32, f32) {
        let scale = self.font_size() / BASE_FONT_SIZE;
        (CHAR_WIDTH * scale, LINE_HEIGHT * scale)
    }

    fn reflow(&mut self) {
        let (cw, lh) = self.metrics();
        let max_width = self.limit.width;

        let mut lines = Vec::new();
        for paragraph in self.text.split('\n') {
            let mut line = String::new();
            let mut line_cells = 0.0f32;
            for word in paragraph.split_whitespace() {
                let word_cells = unicode_display_width(word);
                if line.is_empty() {
                    line.push_str(word);
                    line_cells = word_cells;
                } else if max_width <= 0.0 || (line_cells + 1.0 + word_cells) * cw <= max_width {
                    line.push(' ');
                    line.push_str(word);
                    line_cells += 1.0 + word_cells;
                } else {
                    lines.push(std::mem::take(&mut line));
                    line.push_str(word);
                    line_cells = word_cells;
                }
            }
            lines.push(line);
        }

        if self.limit.height > 0.0 {
            let fits = ((self.limit.height / lh).floor() as usize).max(1);
            lines.truncate(fits);
        }

        let widest = lines
            .iter()
            .map(|line| unicode_display_width(line))
            .fold(0.0f32, f32::max);
        self.measured = Size::new(widest * cw, lines.len() as f32 * lh);
        self.lines = lines;
    }
}

impl ReflowableContent for TextBlock {
    fn set_resize_limit(&mut self, width: f32, height: f32) {
        let limit = Size::new(width, height);
        if limit != self.limit {
            self.limit = limit;
            self.reflow();
        }
    }

    fn resize_limit(&self) -> Size {
        self.limit
    }

    fn natural_size(&self) -> Size {
        self.measured
    }
}
