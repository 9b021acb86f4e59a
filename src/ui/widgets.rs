//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render a labelled single-value field with a focus-aware border
pub fn draw_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let paragraph = Paragraph::new(value.to_string()).block(
        Block::default()
            .title(format!(" {label} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(paragraph, area);
}

/// Format an amount in rupees with Indian digit grouping
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}₹{}.{fraction:02}", group_indian(&whole.to_string()))
}

/// Indian grouping: last three digits, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_currency(0.0), "₹0.00");
    }

    #[test]
    fn test_small_amount() {
        assert_eq!(format_currency(250.0), "₹250.00");
    }

    #[test]
    fn test_thousands_group() {
        assert_eq!(format_currency(1234.5), "₹1,234.50");
    }

    #[test]
    fn test_lakh_grouping() {
        assert_eq!(format_currency(123456.78), "₹1,23,456.78");
    }

    #[test]
    fn test_crore_grouping() {
        assert_eq!(format_currency(12345678.0), "₹1,23,45,678.00");
    }

    #[test]
    fn test_rounding_carries_into_whole() {
        assert_eq!(format_currency(9.999), "₹10.00");
    }
}
