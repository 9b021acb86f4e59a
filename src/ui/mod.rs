//! UI module for rendering the TUI

mod form;
mod success;
mod widgets;

use crate::app::App;
use crate::state::Phase;
use crate::ui::widgets::format_currency;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    match app.session.phase() {
        Phase::Editing | Phase::Submitting => form::draw(frame, chunks[0], app),
        Phase::Submitted { .. } => success::draw(frame, chunks[0], app),
    }

    draw_status_bar(frame, chunks[1], app);
}

fn draw_status_bar(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let (text, style) = if app.session.is_submitting() {
        (
            "Submitting…".to_string(),
            Style::default().fg(Color::Yellow),
        )
    } else if let Some(notice) = &app.notice {
        (notice.clone(), Style::default().fg(Color::Red))
    } else {
        (
            format!(
                "Grand total: {}  |  Tab next · Space toggle · Ctrl+A add row · Ctrl+D remove · Ctrl+S submit · Ctrl+C quit",
                format_currency(app.session.draft.grand_total())
            ),
            Style::default().fg(Color::DarkGray),
        )
    };

    frame.render_widget(Paragraph::new(Line::styled(text, style)), area);
}
