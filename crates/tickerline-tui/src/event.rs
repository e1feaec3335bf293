use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Event source for the marquee loop.
///
/// A quiet poll window yields a `Tick`, which stands in for the animation
/// frame and drives one scroll advance.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        if !event::poll(self.tick_rate)? {
            // quiet poll window: emit the animation tick
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            // Only key presses count; some terminals also send release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(AppEvent::Key(key))),
            Event::Key(_) => Ok(None),
            Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
            _ => Ok(None),
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Animation tick: advance the scroll position
    Tick,
}
