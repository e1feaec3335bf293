use std::io;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    Terminal,
};
use tracing::info;

use tickerline_core::{AppConfig, Speed};
use tickerline_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    marquee::MarqueeEffect,
    source::Source,
    theme::Palette,
    widgets::{PageWidget, StatusBarWidget},
};

pub fn run(
    config: &AppConfig,
    text: Option<String>,
    speed: Option<Speed>,
    block: bool,
) -> Result<()> {
    let speed = speed.unwrap_or(config.marquee.speed);
    let text = text.unwrap_or_else(|| config.marquee.text.clone());
    let block = block || config.marquee.block;

    // The strip to scroll, styled once; the effect clones it across the track
    let line = Line::from(Span::styled(text, Style::default().fg(Palette::YELLOW)));
    let source = if block {
        Source::block(line)
    } else {
        Source::inline(line)
    };

    let effect = MarqueeEffect::new(source, speed)?;
    let mut app = App::new(config.clone(), effect);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("tickerline"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms);

    info!(speed = %speed, "marquee demo started");

    // Main loop
    let mut content_area = Rect::default();
    loop {
        // Draw UI
        terminal.draw(|frame| {
            let size = frame.area();

            // Main layout: content + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            content_area = main_layout[0];
            app.content_height = content_area.height;

            PageWidget::render(frame, main_layout[0], &app);
            StatusBarWidget::render(frame, main_layout[1], &app);
        })?;

        // Handle events
        if let Some(event) = event_handler.next()? {
            match event {
                AppEvent::Key(key) => match handle_key_event(key) {
                    Action::Quit => app.should_quit = true,
                    Action::PageDown => app.page_down(),
                    Action::PageUp => app.page_up(),
                    Action::JumpToTop => app.jump_to_top(),
                    Action::JumpToBottom => app.jump_to_bottom(),
                    Action::None => {}
                },
                AppEvent::Resize(_, _) => app.on_resize(),
                AppEvent::Tick => app.on_tick(content_area),
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
