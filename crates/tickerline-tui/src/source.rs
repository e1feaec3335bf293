//! Source content for a marquee: the styled lines to repeat and the display
//! mode recorded before the effect takes ownership.

use ratatui::text::{Line, Text};
use unicode_width::UnicodeWidthStr;

/// How the source flowed before it became marquee content. Decides whether
/// the viewport hugs the content or spans the full available width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceDisplay {
    /// Viewport sized to the content's own cell width.
    #[default]
    Inline,
    /// Viewport spans the full available width.
    Block,
}

/// The content a marquee repeats.
#[derive(Debug, Clone)]
pub struct Source {
    lines: Vec<Line<'static>>,
    display: SourceDisplay,
}

impl Source {
    pub fn new(text: impl Into<Text<'static>>, display: SourceDisplay) -> Self {
        Self {
            lines: text.into().lines,
            display,
        }
    }

    /// Inline source: the marquee viewport hugs the content width.
    pub fn inline(text: impl Into<Text<'static>>) -> Self {
        Self::new(text, SourceDisplay::Inline)
    }

    /// Block source: the marquee viewport takes the full available width.
    pub fn block(text: impl Into<Text<'static>>) -> Self {
        Self::new(text, SourceDisplay::Block)
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    #[inline]
    pub fn display(&self) -> SourceDisplay {
        self.display
    }

    /// A source with no lines has nothing to repeat.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Widest line of the source in cells (unicode display width).
    pub fn cell_width(&self) -> u16 {
        self.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.width())
                    .sum::<usize>() as u16
            })
            .max()
            .unwrap_or(0)
    }

    /// Height of the source in rows.
    pub fn cell_height(&self) -> u16 {
        self.lines.len() as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measures_widest_line() {
        let source = Source::inline("ab\nlonger line\nc");
        assert_eq!(source.cell_width(), 11);
        assert_eq!(source.cell_height(), 3);
    }

    #[test]
    fn test_wide_characters_count_double() {
        let source = Source::inline("日本語");
        assert_eq!(source.cell_width(), 6);
    }

    #[test]
    fn test_empty_source() {
        let source = Source::inline(Text::default());
        assert!(source.is_empty());
        assert_eq!(source.cell_width(), 0);
        assert_eq!(source.cell_height(), 0);
    }

    #[test]
    fn test_display_mode_recorded() {
        assert_eq!(Source::inline("x").display(), SourceDisplay::Inline);
        assert_eq!(Source::block("x").display(), SourceDisplay::Block);
    }
}
