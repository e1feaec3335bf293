use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use tickerline_core::Playback;

use crate::app::{App, PAGE_HEIGHT};
use crate::theme::Palette;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let playback_str = match app.effect.scroll().playback() {
            Playback::Running => "SCROLLING",
            Playback::Stopped => "PAUSED",
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | speed: {} | row {}/{}",
                playback_str,
                app.effect.scroll().speed(),
                app.page_scroll,
                PAGE_HEIGHT
            )
        };

        let help_hint = " q:quit j/k:scroll g/G:jump ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(Palette::FG0).bg(Palette::BG2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(Palette::BG2)),
            Span::styled(
                help_hint,
                Style::default().fg(Palette::GREY2).bg(Palette::BG2),
            ),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
