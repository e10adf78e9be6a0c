use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::App;

use super::error_banner;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Fill(1),
    ])
    .split(area);

    let columns = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Max(72),
        Constraint::Fill(1),
    ])
    .split(chunks[1]);

    let (dot, status) = if app.is_connected() {
        (Color::Green, "Connected to backend")
    } else {
        (Color::Red, "Using demo data")
    };

    let status_text = questions_status(app.total_questions(), app.error());
    let questions_line = Line::from(status_text.fg(Color::DarkGray));

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RIASEC ASSESSMENT",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Find the study programme that fits your interests".fg(Color::Gray)),
        Line::from(""),
        questions_line,
        Line::from(vec![
            Span::styled("● ", Style::default().fg(dot)),
            Span::styled(status, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    if let Some(error) = app.error() {
        content.push(error_banner(error));
        content.push(Line::from(""));
    }

    let start_style = if app.total_questions() > 0 {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    content.push(Line::from(Span::styled("ENTER", start_style)));
    content.push(Line::from("to start".fg(Color::DarkGray)));
    content.push(Line::from(""));
    content.push(Line::from(
        "r reload  ·  ? about RIASEC  ·  q quit".fg(Color::DarkGray),
    ));

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, columns[1]);
}

fn questions_status(count: usize, error: Option<&str>) -> String {
    match (count, error) {
        (0, Some(_)) => "No questions available  ·  press r to retry".to_string(),
        (0, None) => "Loading questions from the server...".to_string(),
        (n, _) => format!("{n} statements · six RIASEC dimensions"),
    }
}
