//! Layout components (header, body, status bar)

use crate::app::App;
use crate::platform::{COPY_KEY, SAVE_KEY};
use crate::state::Focus;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form gets when it has the screen to itself
const MAX_FORM_WIDTH: u16 = 80;

/// Split the screen into header, body and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Split the body into form and result areas when a document exists
pub fn split_body(body: Rect, has_document: bool) -> (Rect, Option<Rect>) {
    if !has_document {
        let width = body.width.min(MAX_FORM_WIDTH);
        let form_area = Rect {
            x: body.x + (body.width - width) / 2,
            width,
            ..body
        };
        return (form_area, None);
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(body);
    (chunks[0], Some(chunks[1]))
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "AI Legal Policy Generator",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Generate professional legal policies for your business in seconds",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        get_focus_hints(app),
        Style::default().fg(Color::Gray),
    )];

    if let Some(toast) = app.state.toasts.current() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("{}: {}", toast.title, toast.description),
            Style::default().fg(Color::Green),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Key hints for the focused panel
fn get_focus_hints(app: &App) -> String {
    match app.state.focus {
        Focus::Form if app.is_busy() => " Generating... | ^C: quit".to_string(),
        Focus::Form => " Tab: next | Enter: select | ^C: quit".to_string(),
        Focus::Result => format!(
            " ↑/↓ Home/End: scroll | {COPY_KEY}: copy | {SAVE_KEY}: save | Tab: form | ^C: quit"
        ),
    }
}
