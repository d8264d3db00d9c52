//! Bordered action buttons (Generate, Copy, Save)

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// How a button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    /// Enter or the button's key triggers it
    Focused,
    /// A generation is running; the button cannot be triggered
    Busy,
}

impl ButtonState {
    fn border(self) -> (Style, BorderType) {
        match self {
            Self::Idle => (Style::default().fg(Color::DarkGray), BorderType::Plain),
            Self::Focused => (Style::default().fg(Color::Cyan), BorderType::Thick),
            Self::Busy => (Style::default().fg(Color::Yellow), BorderType::Rounded),
        }
    }

    fn label(self) -> Style {
        match self {
            Self::Idle => Style::default(),
            Self::Focused => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            Self::Busy => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        }
    }
}

/// Width that fits `label` with a space either side plus borders
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Render a centered label inside a border styled by `state`
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, state: ButtonState) {
    let (border_style, border_type) = state.border();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let button = Paragraph::new(label.to_string())
        .style(state.label())
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}
