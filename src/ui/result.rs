use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, MAX_LISTED_RECOMMENDATIONS as MAX_RECOMMENDATIONS};
use crate::data::FALLBACK_MESSAGE;
use crate::models::{display_percent, MajorRecommendation, RecommendationResult};

use super::error_banner;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(assessment) = app.assessment() else {
        return;
    };
    let result = &assessment.result;

    let summary_height = 6 + result.assessment_summary.len() as u16;
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(summary_height),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    if let Some(message) = fallback_notice(assessment.is_fallback(), app.error()) {
        frame.render_widget(Paragraph::new(error_banner(message)), chunks[0]);
    }
    render_profile(frame, chunks[1], result);
    render_recommendations(frame, chunks[2], &result.recommendations, app.results_scroll());
    render_footer(frame, chunks[3], result.recommendations.len());
    render_controls(frame, chunks[4]);
}

/// The banner is shown only over fallback data.
fn fallback_notice(is_fallback: bool, error: Option<&str>) -> Option<&str> {
    if !is_fallback {
        return None;
    }
    Some(error.unwrap_or(FALLBACK_MESSAGE))
}

fn percent_color(percent: f64) -> Color {
    match percent as u32 {
        80..=100 => Color::Green,
        60..=79 => Color::Cyan,
        40..=59 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_profile(frame: &mut Frame, area: Rect, result: &RecommendationResult) {
    let dominant = match result.dominant_name() {
        Some(name) => format!("{} ({})", result.dominant_type, name),
        None if result.dominant_type.is_empty() => "unknown".to_string(),
        None => result.dominant_type.clone(),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "YOUR RIASEC PROFILE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(format!("Based on {} answers", result.answered_questions).fg(Color::DarkGray)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Dominant type: ", Style::default().fg(Color::Gray)),
            Span::styled(dominant, Style::default().fg(Color::Yellow).bold()),
        ]),
        Line::from(""),
    ];

    for (code, summary) in result.ordered_summary() {
        let percent = display_percent(summary.score);
        let is_dominant = code == result.dominant_type;
        let name_style = if is_dominant {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<2}", code), name_style),
            Span::styled(format!("{:<15}", summary.name), name_style),
            Span::styled(bar(percent, 20), Style::default().fg(percent_color(percent))),
            Span::styled(format!(" {:>3.0}%", percent), Style::default().fg(Color::Gray)),
        ]));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn rank_label(index: usize) -> String {
    match index {
        0 => "Top pick".to_string(),
        1 => "Second pick".to_string(),
        n => format!("Pick {}", n + 1),
    }
}

fn render_recommendations(
    frame: &mut Frame,
    area: Rect,
    recommendations: &[MajorRecommendation],
    scroll: usize,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Recommended Programmes ")
        .title_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));

    if recommendations.is_empty() {
        let empty = Paragraph::new("No recommendations were returned.")
            .fg(Color::DarkGray)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for (index, rec) in recommendations.iter().take(MAX_RECOMMENDATIONS).enumerate() {
        let rank_style = match index {
            0 => Style::default().fg(Color::Yellow).bold(),
            1 => Style::default().fg(Color::White).bold(),
            2 => Style::default().fg(Color::LightRed),
            _ => Style::default().fg(Color::DarkGray),
        };
        let percent = display_percent(rec.compatibility_percentage);

        lines.push(Line::from(vec![
            Span::styled(format!("#{:<3}", index + 1), rank_style),
            Span::styled(rec.major_name.as_str(), Style::default().fg(Color::White).bold()),
            Span::styled(format!("  {}", rank_label(index)), rank_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(rec.faculty.as_str(), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("  ·  {:.1}% match", percent),
                Style::default().fg(percent_color(percent)),
            ),
            Span::styled(
                format!(
                    "  ·  pattern {}  ·  score {:.1}/10  ·  {}",
                    rec.riasec_pattern, rec.compatibility_score, rec.major_code
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        if !rec.description.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("    "),
                Span::styled(rec.description.as_str(), Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(Line::from(""));
    }

    let scroll_lines = lines_before(recommendations, scroll);
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block)
        .scroll((scroll_lines, 0));
    frame.render_widget(widget, area);
}

/// Number of rendered lines above the recommendation at `index`.
fn lines_before(recommendations: &[MajorRecommendation], index: usize) -> u16 {
    recommendations
        .iter()
        .take(index.min(MAX_RECOMMENDATIONS))
        .map(|rec| if rec.description.is_empty() { 3 } else { 4 })
        .sum()
}

fn render_footer(frame: &mut Frame, area: Rect, total: usize) {
    if total <= MAX_RECOMMENDATIONS {
        return;
    }
    let widget = Paragraph::new(format!(
        "Showing {} of {} recommendations",
        MAX_RECOMMENDATIONS, total
    ))
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  r restart  ·  ? about RIASEC  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
