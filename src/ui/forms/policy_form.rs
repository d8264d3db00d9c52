//! Intake form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Focus, Form};
use crate::ui::components::{button_width, render_button, ButtonState, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the intake form
pub fn draw_policy_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let has_focus = app.state.focus == Focus::Form;
    let is_enabled = !form.is_submitting;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Business name
            Constraint::Length(3),             // Policy type
            Constraint::Min(6),                // Description
            Constraint::Length(1),             // Error message
            Constraint::Length(BUTTON_HEIGHT), // Generate button
            Constraint::Length(1),             // Help text
        ])
        .margin(1)
        .split(area);

    let border_color = if has_focus { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .title(" Generate Legal Policy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    for (index, chunk) in chunks.iter().take(3).enumerate() {
        if let Some(field) = form.get_field(index) {
            let is_active = has_focus && form.active_field() == index;
            draw_field(frame, *chunk, field, is_active, is_enabled);
        }
    }

    if let Some(message) = &form.error_message {
        let error = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(error, chunks[3]);
    }

    let label = if form.is_submitting {
        "Generating..."
    } else {
        "Generate Policy"
    };
    let width = button_width(label).min(chunks[4].width);
    let button_area = Rect {
        x: chunks[4].x + chunks[4].width.saturating_sub(width) / 2,
        width,
        ..chunks[4]
    };
    let state = if form.is_submitting {
        ButtonState::Busy
    } else if has_focus && form.is_buttons_row_active() {
        ButtonState::Focused
    } else {
        ButtonState::Idle
    };
    render_button(frame, button_area, label, state);

    let help = Paragraph::new(Line::from(help_spans(app)))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[5]);
}

fn help_spans(app: &App) -> Vec<Span<'static>> {
    let key = Style::default().fg(Color::Cyan);
    if app.state.form.is_submitting {
        return vec![Span::raw("Generating, please wait...")];
    }

    let mut spans = vec![
        Span::styled("Tab", key),
        Span::raw(": next field  "),
    ];
    if app.state.form.active_field() == 1 {
        spans.push(Span::styled("←/→", key));
        spans.push(Span::raw(": choose type  "));
    }
    spans.push(Span::styled(crate::platform::GENERATE_SHORTCUT, key));
    spans.push(Span::raw(": generate"));
    spans
}
