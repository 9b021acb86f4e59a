//! Terminal screen shown once a report has been logged

use crate::app::App;
use crate::ui::widgets::format_currency;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(7),
            Constraint::Min(1),
        ])
        .split(area);

    let total = app.session.submitted_total().unwrap_or(0.0);
    let lines = vec![
        Line::styled(
            "SUBMISSION SUCCESSFUL",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Line::raw("Your expense report has been logged to the company audit sheet."),
        Line::raw(""),
        Line::styled(
            format!("Grand total claimed: {}", format_currency(total)),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw("Press r to start a new report, Ctrl+C to quit."),
    ];

    let card = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(card, centered(chunks[1], 70));
}

fn centered(area: Rect, percent_x: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area);
    chunks[1]
}
