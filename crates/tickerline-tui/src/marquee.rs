//! The marquee effect: one-shot setup over a source, then tick / resize /
//! visibility signals drive it for the rest of its life.

use tracing::debug;

use tickerline_core::{Error, Result, ScrollState, Speed, TrackLayout};

use crate::source::{Source, SourceDisplay};

/// A continuously scrolling repetition of a source.
///
/// Owns the source content, the clone-cover geometry and the scroll state
/// machine. Rendering reads the effect; the event loop mutates it.
#[derive(Debug, Clone)]
pub struct MarqueeEffect {
    source: Source,
    layout: TrackLayout,
    scroll: ScrollState,
    cell_height: u16,
    /// Recorded at setup: block sources get a full-width viewport.
    is_block: bool,
}

impl MarqueeEffect {
    /// Validate the source, measure it and build the effect.
    ///
    /// Fails with [`Error::InvalidSource`] before any effect state exists
    /// when the source has nothing to repeat.
    pub fn new(source: Source, speed: Speed) -> Result<Self> {
        if source.is_empty() {
            return Err(Error::InvalidSource(
                "source must contain at least one line".to_string(),
            ));
        }

        let is_block = source.display() == SourceDisplay::Block;
        let layout = TrackLayout::new(source.cell_width());
        let cell_height = source.cell_height();
        let scroll = ScrollState::new(speed);

        debug!(
            cell_width = layout.cell_width(),
            copies = layout.copies(),
            track_width = layout.track_width(),
            "marquee effect created"
        );

        Ok(Self {
            source,
            layout,
            scroll,
            cell_height,
            is_block,
        })
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub fn layout(&self) -> &TrackLayout {
        &self.layout
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    #[inline]
    pub fn cell_height(&self) -> u16 {
        self.cell_height
    }

    #[inline]
    pub fn is_block(&self) -> bool {
        self.is_block
    }

    /// Re-measure the source and refresh the track width.
    ///
    /// The clone count stays fixed; only the measured width (and with it the
    /// track width) changes. Runs once at setup and again on every resize.
    pub fn refresh_dimensions(&mut self) {
        self.layout.set_cell_width(self.source.cell_width());
        self.cell_height = self.source.cell_height();

        debug!(
            cell_width = self.layout.cell_width(),
            track_width = self.layout.track_width(),
            "marquee dimensions refreshed"
        );
    }

    /// Advance one animation tick; returns the applied cell offset.
    pub fn tick(&mut self) -> u16 {
        self.scroll.tick(self.layout.cell_width())
    }

    /// Visibility change from the observer: entering the viewport starts
    /// scrolling, leaving it pauses after the in-flight tick.
    pub fn on_visibility(&mut self, visible: bool) {
        self.scroll.on_visibility(visible);
    }

    /// Viewport extent within `available` columns: the full width for block
    /// sources, the exact content width otherwise.
    pub fn viewport_size(&self, available: u16) -> (u16, u16) {
        let width = if self.is_block {
            available
        } else {
            self.layout.cell_width().min(available)
        };
        (width, self.cell_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::text::Text;

    #[test]
    fn test_empty_source_is_rejected() {
        let err = MarqueeEffect::new(Source::inline(Text::default()), Speed::Medium).unwrap_err();
        assert!(matches!(err, Error::InvalidSource(_)));
    }

    #[test]
    fn test_setup_measures_and_covers() {
        // 10-cell source: 1000 copies cover the 9999-cell track
        let effect = MarqueeEffect::new(Source::inline("0123456789"), Speed::Medium).unwrap();
        assert_eq!(effect.layout().cell_width(), 10);
        assert_eq!(effect.layout().copies(), 1000);
        assert_eq!(effect.cell_height(), 1);
    }

    #[test]
    fn test_viewport_size_inline_vs_block() {
        let inline = MarqueeEffect::new(Source::inline("0123456789"), Speed::Medium).unwrap();
        assert_eq!(inline.viewport_size(80), (10, 1));
        assert_eq!(inline.viewport_size(4), (4, 1));

        let block = MarqueeEffect::new(Source::block("0123456789"), Speed::Medium).unwrap();
        assert_eq!(block.viewport_size(80), (80, 1));
    }

    #[test]
    fn test_tick_advances_only_while_visible() {
        let mut effect = MarqueeEffect::new(Source::inline("0123456789"), Speed::Fast).unwrap();

        assert_eq!(effect.tick(), 0);

        effect.on_visibility(true);
        assert_eq!(effect.tick(), 2);
        assert_eq!(effect.tick(), 4);

        effect.on_visibility(false);
        assert_eq!(effect.tick(), 6);
        assert_eq!(effect.tick(), 6);
    }

    #[test]
    fn test_refresh_keeps_clone_count() {
        let mut effect = MarqueeEffect::new(Source::inline("0123456789"), Speed::Medium).unwrap();
        let copies = effect.layout().copies();

        effect.refresh_dimensions();
        assert_eq!(effect.layout().copies(), copies);
        assert_eq!(effect.layout().cell_width(), 10);
    }
}
