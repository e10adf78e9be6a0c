use ratatui::{prelude::*, widgets::Paragraph};

pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(Span::styled(
            "ANALYSING YOUR PROFILE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from("Matching your answers with study programmes...".fg(Color::Gray)),
        Line::from(""),
        Line::from("esc cancel".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center);
    frame.render_widget(widget, chunks[1]);
}
