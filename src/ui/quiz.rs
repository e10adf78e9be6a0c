use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::data::Dimension;
use crate::models::{Choice, StepState};

use super::error_banner;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        let waiting = Paragraph::new("No questions to show yet  ·  esc back to start")
            .alignment(Alignment::Center)
            .fg(Color::Yellow);
        frame.render_widget(waiting, area);
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1), // Counter
        Constraint::Length(1), // Gauge
        Constraint::Length(1), // Steps
        Constraint::Length(1), // Error
        Constraint::Length(5), // Question text
        Constraint::Fill(1),   // Options
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(area);

    render_progress(frame, chunks[0], chunks[1], app);
    render_steps(frame, chunks[2], &app.step_states());
    if let Some(error) = app.error() {
        frame.render_widget(Paragraph::new(error_banner(error)), chunks[3]);
    }
    render_question_text(
        frame,
        chunks[4],
        app.question_number(),
        &question.prompt,
        &question.dimension,
    );
    render_options(frame, chunks[5], &question.options, app.selected_option());
    render_controls(frame, chunks[6], app.current_index() > 0);
}

fn render_progress(frame: &mut Frame, counter: Rect, bar: Rect, app: &App) {
    let percent = app.progress_percent();
    let text = Line::from(vec![
        Span::styled(
            format!("Question {} of {}", app.question_number(), app.total_questions()),
            Style::default().fg(Color::Cyan).bold(),
        ),
        Span::styled(format!("   {percent}%"), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(text), counter);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::DarkGray))
        .percent(percent.min(100))
        .label("");
    frame.render_widget(gauge, bar);
}

fn render_steps(frame: &mut Frame, area: Rect, steps: &[StepState]) {
    let spans: Vec<Span> = steps
        .iter()
        .map(|step| match step {
            StepState::Done => Span::styled("■", Style::default().fg(Color::Green)),
            StepState::Current => Span::styled("■", Style::default().fg(Color::Blue).bold()),
            StepState::Pending => Span::styled("□", Style::default().fg(Color::DarkGray)),
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_question_text(
    frame: &mut Frame,
    area: Rect,
    number: usize,
    text: &str,
    dimension: &str,
) {
    let title = match Dimension::from_code(dimension) {
        Some(known) => format!(" {} · {} ", number, known.name()),
        None if dimension.is_empty() => format!(" {} ", number),
        None => format!(" {} · {} ", number, dimension),
    };

    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(title)
                .title_style(Style::default().fg(Color::Cyan))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, options: &[Choice], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", index + 1), style),
            Span::styled(option.label.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_controls(frame: &mut Frame, area: Rect, can_go_back: bool) {
    let text = if can_go_back {
        "j/k navigate  ·  enter or 1-9 answer  ·  b back  ·  q quit"
    } else {
        "j/k navigate  ·  enter or 1-9 answer  ·  q quit"
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
