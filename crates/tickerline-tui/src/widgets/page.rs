use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, MARQUEE_ROW, PAGE_HEIGHT};
use crate::theme::Palette;
use crate::widgets::MarqueeWidget;

/// Filler copy surrounding the marquee so page scrolling has something to
/// scroll through.
const FILLER: [&str; 4] = [
    "The quick brown fox jumps over the lazy dog while the ticker rolls on.",
    "Page content above and below the marquee is ordinary static text.",
    "Nothing on this page updates except the scrolling strip.",
    "Keep scrolling to push the marquee off screen and watch it pause.",
];

pub struct PageWidget;

impl PageWidget {
    /// Render the scrollable demo page, then overlay the marquee at its row.
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let marquee_rows = app.effect.cell_height().max(1);

        let mut lines: Vec<Line> = Vec::with_capacity(PAGE_HEIGHT as usize);
        for row in 0..PAGE_HEIGHT {
            let line = if row == 0 {
                Line::from(Span::styled(
                    "tickerline",
                    Style::default()
                        .fg(Palette::ACCENT)
                        .add_modifier(Modifier::BOLD),
                ))
            } else if row == 2 {
                Line::from(Span::styled(
                    "Scroll with j/k; the marquee pauses whenever it leaves the screen.",
                    Style::default().fg(Palette::GREY2),
                ))
            } else if (MARQUEE_ROW..MARQUEE_ROW + marquee_rows).contains(&row) {
                // drawn by the marquee widget below
                Line::default()
            } else if row % 9 == 4 {
                Line::from(Span::styled(
                    format!("Section {}", row / 9 + 1),
                    Style::default().fg(Palette::FG0).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    FILLER[row as usize % FILLER.len()],
                    Style::default().fg(Palette::GREY1),
                ))
            };
            lines.push(line);
        }

        let paragraph = Paragraph::new(lines).scroll((app.page_scroll, 0));
        frame.render_widget(paragraph, area);

        let (marquee_area, row_offset) = app.marquee_placement(area);
        if marquee_area.height > 0 {
            MarqueeWidget::render(frame, marquee_area, &app.effect, row_offset);
        }
    }
}
