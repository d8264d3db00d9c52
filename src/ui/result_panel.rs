//! Generated document panel

use super::components::{button_width, render_button, ButtonState, BUTTON_HEIGHT};
use crate::platform::{COPY_KEY, SAVE_KEY};
use crate::policy::GeneratedDocument;
use crate::presenter::paragraphs;
use crate::state::ResultScroll;
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the document with its copy and save buttons
///
/// Fits `scroll` to the wrapped height at this frame's width, so the last
/// row can always be scrolled into view.
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    doc: &GeneratedDocument,
    scroll: &mut ResultScroll,
    has_focus: bool,
) {
    let border_color = if has_focus { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", doc.title()),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
        .split(inner);

    let text_area = chunks[0].inner(Margin::new(1, 0));
    let text = Paragraph::new(document_lines(doc)).wrap(Wrap { trim: false });
    scroll.fit(text.line_count(text_area.width), text_area.height);
    frame.render_widget(text.scroll((scroll.offset, 0)), text_area);

    let copy_label = format!("[{COPY_KEY}] Copy");
    let save_label = format!("[{SAVE_KEY}] Save");
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(button_width(&copy_label)),
            Constraint::Length(button_width(&save_label)),
        ])
        .split(chunks[1]);
    let state = if has_focus {
        ButtonState::Focused
    } else {
        ButtonState::Idle
    };
    render_button(frame, buttons[1], &copy_label, state);
    render_button(frame, buttons[2], &save_label, state);
}

/// One block per paragraph, separated by an empty line
fn document_lines(doc: &GeneratedDocument) -> Vec<Line<'_>> {
    let mut lines = Vec::new();
    for (index, paragraph) in paragraphs(doc.content()).into_iter().enumerate() {
        if index > 0 {
            lines.push(Line::from(""));
        }
        lines.extend(paragraph.lines().map(Line::from));
    }
    lines
}
