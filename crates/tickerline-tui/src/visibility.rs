//! Intersection observation for the marquee viewport.
//!
//! The observer is fed the marquee's screen rectangle and the visible
//! region each time either may have moved, and reports only transitions.
//! The first observation always reports, so an initially visible marquee
//! starts scrolling without waiting for a change.

use ratatui::layout::Rect;

/// A visibility transition of the observed rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    Entered,
    Left,
}

/// Watches whether a target rectangle intersects the visible region.
#[derive(Debug, Clone, Default)]
pub struct VisibilityObserver {
    was_visible: Option<bool>,
}

impl VisibilityObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current rectangles; returns a change when the intersection
    /// state differs from the previous observation. Zero-area rectangles
    /// never intersect.
    pub fn observe(&mut self, target: Rect, viewport: Rect) -> Option<VisibilityChange> {
        let visible = target.intersects(viewport);

        match self.was_visible {
            Some(prev) if prev == visible => None,
            _ => {
                self.was_visible = Some(visible);
                Some(if visible {
                    VisibilityChange::Entered
                } else {
                    VisibilityChange::Left
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_first_observation_reports() {
        let mut observer = VisibilityObserver::new();
        let target = Rect::new(0, 10, 40, 1);
        assert_eq!(
            observer.observe(target, VIEWPORT),
            Some(VisibilityChange::Entered)
        );
    }

    #[test]
    fn test_reports_only_transitions() {
        let mut observer = VisibilityObserver::new();
        let inside = Rect::new(0, 10, 40, 1);
        let outside = Rect::new(0, 30, 40, 1);

        assert_eq!(
            observer.observe(inside, VIEWPORT),
            Some(VisibilityChange::Entered)
        );
        assert_eq!(observer.observe(inside, VIEWPORT), None);
        assert_eq!(
            observer.observe(outside, VIEWPORT),
            Some(VisibilityChange::Left)
        );
        assert_eq!(observer.observe(outside, VIEWPORT), None);
        assert_eq!(
            observer.observe(inside, VIEWPORT),
            Some(VisibilityChange::Entered)
        );
    }

    #[test]
    fn test_zero_area_never_intersects() {
        let mut observer = VisibilityObserver::new();
        let empty = Rect::new(0, 10, 0, 0);
        assert_eq!(
            observer.observe(empty, VIEWPORT),
            Some(VisibilityChange::Left)
        );
    }
}
