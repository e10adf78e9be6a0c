//! RIASEC explanation overlay.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::data::Dimension;

pub fn render(frame: &mut Frame, area: Rect) {
    let popup = centered(area, 76, 24);

    let mut lines = vec![
        Line::from(Span::styled(
            "THE SIX RIASEC DIMENSIONS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    for dimension in Dimension::ALL {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", dimension.code()),
                Style::default().fg(Color::Yellow).bold(),
            ),
            Span::styled(dimension.name(), Style::default().fg(Color::White).bold()),
        ]));
        lines.push(Line::from(dimension.description().fg(Color::Gray)));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" About RIASEC ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::horizontal(2)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
