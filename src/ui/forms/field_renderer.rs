//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
///
/// Disabled fields are dimmed and never show a cursor.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    is_enabled: bool,
) {
    let is_active = is_active && is_enabled;

    let style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let content = if display_value.is_empty() {
        let placeholder = Span::styled(
            field.placeholder.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        );
        if field.is_choice() {
            Paragraph::new(choice_line(placeholder, is_active))
        } else {
            Paragraph::new(Line::from(vec![cursor_span, placeholder]))
        }
    } else if field.is_choice() {
        Paragraph::new(choice_line(Span::styled(display_value, style), is_active))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor_span);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            cursor_span,
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Select box line: `◀ value ▶` when active, plain value otherwise
fn choice_line(value: Span<'static>, is_active: bool) -> Line<'static> {
    if is_active {
        let arrow = Style::default().fg(Color::Cyan);
        Line::from(vec![
            Span::styled("◀ ", arrow),
            value,
            Span::styled(" ▶", arrow),
        ])
    } else {
        Line::from(value)
    }
}
