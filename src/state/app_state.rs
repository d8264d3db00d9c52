//! Application state definitions

use super::forms::IntakeForm;
use super::toast::ToastQueue;
use crate::policy::GeneratedDocument;

/// Which panel receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Form,
    Result,
}

impl Focus {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Form => Self::Result,
            Self::Result => Self::Form,
        };
    }
}

/// Result panel scroll position
///
/// The bound is the rendered (wrapped) height minus the visible rows, so
/// it is only known after the panel has been drawn at its current width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResultScroll {
    /// First visible row
    pub offset: u16,
    max: u16,
}

impl ResultScroll {
    pub fn up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll down, stopping once the last row is visible
    pub fn down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines).min(self.max);
    }

    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    /// Record the wrapped content height and the visible rows
    pub fn fit(&mut self, content_rows: usize, visible_rows: u16) {
        let content_rows = content_rows.min(u16::MAX as usize) as u16;
        self.max = content_rows.saturating_sub(visible_rows);
        self.offset = self.offset.min(self.max);
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: IntakeForm,
    /// The latest generated document; at most one exists
    pub document: Option<GeneratedDocument>,
    pub focus: Focus,
    pub result_scroll: ResultScroll,
    pub toasts: ToastQueue,
}

impl AppState {
    /// Replace the current document with a freshly generated one
    pub fn publish_document(&mut self, doc: GeneratedDocument) {
        self.document = Some(doc);
        self.result_scroll = ResultScroll::default();
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }
}
