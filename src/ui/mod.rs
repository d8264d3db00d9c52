//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod result_panel;

use crate::app::App;
use crate::state::Focus;
use ratatui::Frame;

/// Main draw function
///
/// Takes the app mutably so the result panel can record its wrapped height.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let (header_area, body_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);

    let (form_area, result_area) = layout::split_body(body_area, app.state.has_document());
    forms::draw_policy_form(frame, form_area, app);
    let result_focused = app.state.focus == Focus::Result;
    let state = &mut app.state;
    if let (Some(area), Some(doc)) = (result_area, &state.document) {
        result_panel::draw(frame, area, doc, &mut state.result_scroll, result_focused);
    }

    layout::draw_status_bar(frame, status_area, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::policy::{PolicyType, SystemClock, TemplateResolver};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &mut App) -> String {
        render_sized(app, 120, 40)
    }

    fn render_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_empty_form() {
        let mut app = App::new(&TuiConfig::default());
        let screen = render(&mut app);
        assert!(screen.contains("Business Name"));
        assert!(screen.contains("Select policy type"));
        assert!(screen.contains("Generate Policy"));
    }

    #[test]
    fn test_renders_validation_error() {
        let mut app = App::new(&TuiConfig::default());
        app.state.form.error_message = Some("business name required".to_string());
        assert!(render(&mut app).contains("business name required"));
    }

    #[test]
    fn test_renders_generating_state() {
        let mut app = App::new(&TuiConfig::default());
        app.state.form.is_submitting = true;
        assert!(render(&mut app).contains("Generating..."));
    }

    #[test]
    fn test_renders_document_panel() {
        let mut app = App::new(&TuiConfig::default());
        let resolver = TemplateResolver::new(Arc::new(SystemClock), "%Y");
        app.state
            .publish_document(resolver.resolve("Acme Corp", PolicyType::TermsOfService));

        let screen = render(&mut app);
        assert!(screen.contains("Terms of Service for Acme Corp"));
        assert!(screen.contains("[c] Copy"));
        assert!(screen.contains("[s] Save"));
    }

    #[test]
    fn test_end_of_long_document_scrolls_into_view() {
        let mut app = App::new(&TuiConfig::default());
        let resolver = TemplateResolver::new(Arc::new(SystemClock), "%Y");
        app.state
            .publish_document(resolver.resolve("Acme Corp", PolicyType::PrivacyPolicy));
        app.state.focus = Focus::Result;

        // Wrapped text is taller than the panel in a small terminal
        let first = render_sized(&mut app, 80, 24);
        assert!(first.contains("Privacy Policy for Acme Corp"));
        assert!(!first.contains("Last updated:"));

        for _ in 0..50 {
            app.state.result_scroll.down(10);
        }
        let screen = render_sized(&mut app, 80, 24);
        assert!(screen.contains("Contact Us"));
        assert!(screen.contains("Last updated:"));
        assert!(app.state.result_scroll.offset > 0);
    }

    #[test]
    fn test_wider_terminal_clamps_scroll_back() {
        let mut app = App::new(&TuiConfig::default());
        let resolver = TemplateResolver::new(Arc::new(SystemClock), "%Y");
        app.state
            .publish_document(resolver.resolve("Acme Corp", PolicyType::PrivacyPolicy));

        render_sized(&mut app, 80, 24);
        app.state.result_scroll.down(u16::MAX);
        let narrow_offset = app.state.result_scroll.offset;

        let screen = render_sized(&mut app, 200, 24);
        assert!(app.state.result_scroll.offset < narrow_offset);
        assert!(screen.contains("Last updated:"));
    }
}
