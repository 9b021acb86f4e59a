//! Editing screen: identity fields, category checklist, entry sections

use crate::app::{App, EntryField, Focus};
use crate::state::{ExpenseCategory, LineItem};
use crate::ui::widgets::{draw_field, format_currency};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.session.draft.selected_categories().to_vec();
    let sections: Vec<Constraint> = selected
        .iter()
        .map(|c| Constraint::Length(app.session.draft.entries(*c).len() as u16 + 2))
        .collect();

    let mut constraints = vec![
        Constraint::Length(3), // identity row
        Constraint::Length(3), // category checklist
    ];
    constraints.extend(sections);
    constraints.push(Constraint::Length(3)); // remark
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    draw_identity_row(frame, chunks[0], app);
    draw_category_checklist(frame, chunks[1], app);
    for (i, category) in selected.iter().enumerate() {
        draw_category_section(frame, chunks[2 + i], app, *category);
    }
    draw_remark(frame, chunks[2 + selected.len()], app);
}

fn draw_identity_row(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Percentage(40),
            Constraint::Percentage(40),
        ])
        .split(area);

    let draft = &app.session.draft;
    draw_field(
        frame,
        chunks[0],
        "Date",
        &draft.report_date.to_string(),
        false,
    );
    draw_field(
        frame,
        chunks[1],
        "Branch ◂ ▸",
        draft.branch.as_deref().unwrap_or("-- choose --"),
        app.focus == Focus::Branch,
    );
    draw_field(
        frame,
        chunks[2],
        "Salesperson ◂ ▸",
        draft.salesperson.as_deref().unwrap_or("-- choose --"),
        app.focus == Focus::Salesperson,
    );
}

fn draw_category_checklist(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Categories;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let mut spans = Vec::new();
    for (i, category) in ExpenseCategory::ALL.iter().enumerate() {
        let selected = app.session.draft.is_selected(*category);
        let mark = if selected { "[x]" } else { "[ ]" };
        let mut style = if selected {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        if focused && i == app.category_cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {mark} {} ", category.label()), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Categories (space toggles) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_category_section(frame: &mut Frame, area: Rect, app: &App, category: ExpenseCategory) {
    let section_focused = matches!(app.focus, Focus::Entry { category: c, .. } if c == category);
    let border_color = if section_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let subtotal = format_currency(app.session.draft.category_subtotal(category));
    let title = format!(" {} — subtotal {subtotal} ", category.label());

    let items: Vec<ListItem> = app
        .session
        .draft
        .entries(category)
        .iter()
        .enumerate()
        .map(|(row, item)| ListItem::new(entry_line(app, category, row, item)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(list, area);
}

/// One entry as a line of field spans, highlighting the focused slot
fn entry_line<'a>(
    app: &'a App,
    category: ExpenseCategory,
    row: usize,
    item: &'a LineItem,
) -> Line<'a> {
    let focused_slot = match app.focus {
        Focus::Entry {
            category: c,
            row: r,
            field,
        } if c == category && r == row => EntryField::fields(category).get(field).copied(),
        _ => None,
    };

    let style_for = |slot: EntryField| {
        if focused_slot == Some(slot) {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let mut spans = vec![Span::styled(item.date.to_string(), style_for(EntryField::Date))];
    if category == ExpenseCategory::Travel {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("from: {}", item.origin()),
            style_for(EntryField::Origin),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("to: {}", item.destination()),
            style_for(EntryField::Destination),
        ));
    }
    spans.push(Span::raw("  "));
    let amount = if item.amount.is_empty() {
        "amount: _"
    } else {
        item.amount.as_str()
    };
    spans.push(Span::styled(
        format!("₹ {amount}"),
        style_for(EntryField::Amount),
    ));
    spans.push(Span::raw("  "));

    let attachment_text = if focused_slot == Some(EntryField::Attachment) {
        format!("attach path: {}_", app.attach_input)
    } else {
        match &item.attachment {
            Some(a) => format!("📎 {}", a.file_name),
            None => "no attachment".to_string(),
        }
    };
    spans.push(Span::styled(attachment_text, style_for(EntryField::Attachment)));

    Line::from(spans)
}

fn draw_remark(frame: &mut Frame, area: Rect, app: &App) {
    draw_field(
        frame,
        area,
        "Remarks",
        &app.session.draft.remark,
        app.focus == Focus::Remark,
    );
}
