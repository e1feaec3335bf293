use ratatui::{buffer::Buffer, layout::Rect, text::Line, Frame};
use unicode_width::UnicodeWidthChar;

use crate::marquee::MarqueeEffect;

pub struct MarqueeWidget;

impl MarqueeWidget {
    /// Render the effect into `area`, the marquee viewport.
    ///
    /// Each clone of the source is drawn at `clone_index * cell_width -
    /// scroll` columns; content outside the viewport is clipped away.
    /// `row_offset` skips source rows hidden above the area (partial
    /// vertical clipping at the edge of the content region).
    pub fn render(frame: &mut Frame, area: Rect, effect: &MarqueeEffect, row_offset: u16) {
        Self::render_to_buffer(frame.buffer_mut(), area, effect, row_offset);
    }

    fn render_to_buffer(buf: &mut Buffer, area: Rect, effect: &MarqueeEffect, row_offset: u16) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let cell_width = effect.layout().cell_width() as i64;
        let copies = effect.layout().copies() as i64;
        let scroll = effect.scroll().cell_offset() as i64;

        for copy in 0..copies {
            let origin = copy * cell_width - scroll;
            if origin + cell_width <= 0 {
                continue;
            }
            if origin >= area.width as i64 {
                break;
            }

            let lines = effect.source().lines();
            for (row, line) in lines.iter().enumerate().skip(row_offset as usize) {
                let y_index = (row - row_offset as usize) as u16;
                if y_index >= area.height {
                    break;
                }
                render_line_clipped(buf, area, area.y + y_index, origin, line);
            }
        }
    }
}

/// Draw `line` with its left edge `origin` columns from the left of `area`,
/// dropping anything outside. A wide character straddling an edge is blanked
/// rather than torn in half.
fn render_line_clipped(buf: &mut Buffer, area: Rect, y: u16, origin: i64, line: &Line<'_>) {
    let left = area.x as i64;
    let right = area.x as i64 + area.width as i64;
    let mut x = left + origin;

    for span in &line.spans {
        let style = line.style.patch(span.style);
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0) as i64;
            if w == 0 {
                continue;
            }
            if x + w <= left {
                x += w;
                continue;
            }
            if x >= right {
                return;
            }

            if x < left || x + w > right {
                for fill_x in x.max(left)..(x + w).min(right) {
                    buf[(fill_x as u16, y)].set_char(' ').set_style(style);
                }
            } else {
                buf[(x as u16, y)].set_char(ch).set_style(style);
                // the trailing half of a wide character renders as a skip
                for skip_x in (x + 1)..(x + w) {
                    buf[(skip_x as u16, y)].set_char(' ').set_style(style);
                }
            }

            x += w;
        }
    }
}
