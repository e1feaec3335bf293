use ratatui::layout::Rect;

use tickerline_core::AppConfig;

use crate::marquee::MarqueeEffect;
use crate::visibility::{VisibilityChange, VisibilityObserver};

/// Page row where the marquee sits in the demo page.
pub const MARQUEE_ROW: u16 = 18;
/// Total height of the demo page in rows.
pub const PAGE_HEIGHT: u16 = 48;

/// Demo application state.
///
/// The demo renders a vertically scrollable page with the marquee embedded
/// partway down; scrolling the page moves the marquee in and out of view and
/// exercises the visibility gate.
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// The marquee effect being demonstrated
    pub effect: MarqueeEffect,
    /// Intersection observer for the marquee viewport
    pub visibility: VisibilityObserver,
    /// First page row currently at the top of the content area
    pub page_scroll: u16,
    /// Height of the content area, updated each draw
    pub content_height: u16,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, effect: MarqueeEffect) -> Self {
        Self {
            config,
            effect,
            visibility: VisibilityObserver::new(),
            page_scroll: 0,
            content_height: 0,
            should_quit: false,
            status_message: None,
        }
    }

    fn max_page_scroll(&self) -> u16 {
        PAGE_HEIGHT.saturating_sub(self.content_height.max(1))
    }

    /// Scroll the demo page down one row
    pub fn page_down(&mut self) {
        self.page_scroll = (self.page_scroll + 1).min(self.max_page_scroll());
    }

    /// Scroll the demo page up one row
    pub fn page_up(&mut self) {
        self.page_scroll = self.page_scroll.saturating_sub(1);
    }

    pub fn jump_to_top(&mut self) {
        self.page_scroll = 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.page_scroll = self.max_page_scroll();
    }

    /// Screen placement of the marquee within `content`: the clipped
    /// rectangle (zero when scrolled fully out of view) and the number of
    /// source rows hidden above it.
    pub fn marquee_placement(&self, content: Rect) -> (Rect, u16) {
        let (width, height) = self.effect.viewport_size(content.width);

        let top = content.y as i32 + MARQUEE_ROW as i32 - self.page_scroll as i32;
        let bottom = top + height as i32;

        let clipped_top = top.max(content.y as i32);
        let clipped_bottom = bottom.min(content.bottom() as i32);
        if clipped_bottom <= clipped_top || width == 0 {
            return (Rect::ZERO, 0);
        }

        let area = Rect::new(
            content.x,
            clipped_top as u16,
            width,
            (clipped_bottom - clipped_top) as u16,
        );
        (area, (clipped_top - top) as u16)
    }

    /// One animation tick: re-observe visibility, then advance the scroll.
    pub fn on_tick(&mut self, content: Rect) {
        let (area, _) = self.marquee_placement(content);
        if let Some(change) = self.visibility.observe(area, content) {
            self.effect
                .on_visibility(change == VisibilityChange::Entered);
        }

        self.effect.tick();
    }

    /// Terminal resize: re-measure the marquee dimensions.
    pub fn on_resize(&mut self) {
        self.effect.refresh_dimensions();
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
