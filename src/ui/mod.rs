mod help;
mod loading;
mod quiz;
mod result;
mod welcome;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::Screen;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Start => welcome::render(frame, area, app),
        Screen::Question => quiz::render(frame, area, app),
        Screen::Loading => loading::render(frame, area),
        Screen::Results => result::render(frame, area, app),
    }

    if app.show_help() {
        help::render(frame, area);
    }
}

/// One-line warning shown above a screen's content.
fn error_banner(message: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled(" ! ", Style::default().fg(Color::Black).bg(Color::Yellow)),
        Span::styled(format!(" {message}"), Style::default().fg(Color::Yellow)),
    ])
}
