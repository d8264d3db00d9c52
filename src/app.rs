//! Application state and core logic

use crate::config::TuiConfig;
use crate::generator::{GenerationError, LocalGenerator, PolicyGenerator};
use crate::platform::{
    ArboardClipboard, ClipboardProvider, DownloadDirSaver, FileSaver, COPY_KEY, SAVE_KEY,
};
use crate::policy::{GeneratedDocument, SystemClock, TemplateResolver};
use crate::presenter::ResultPresenter;
use crate::state::{AppState, Focus, Form, SubmitError, BUTTONS_ROW};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;

/// Lines moved by PageUp/PageDown in the result panel
const PAGE_SCROLL: u16 = 10;

type PendingGeneration = JoinHandle<Result<GeneratedDocument, GenerationError>>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    generator: Arc<dyn PolicyGenerator>,
    clipboard: Box<dyn ClipboardProvider>,
    saver: Box<dyn FileSaver>,
    presenter: ResultPresenter,
    /// The running generation, if any
    pending: Option<PendingGeneration>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App wired to the system clock, clipboard and downloads
    pub fn new(config: &TuiConfig) -> Self {
        let resolver = TemplateResolver::new(Arc::new(SystemClock), config.date_format());
        let generator = LocalGenerator::new(resolver, config.generation_delay());

        let saver = match &config.download_dir {
            Some(dir) => DownloadDirSaver::new(dir),
            None => DownloadDirSaver::from_user_dirs(),
        };
        tracing::info!("Saving documents to {}", saver.dir().display());

        Self::with_platform(
            Arc::new(generator),
            Box::new(ArboardClipboard::default()),
            Box::new(saver),
            ResultPresenter::new(config.toast_duration()),
        )
    }

    /// Create an App with explicit capabilities
    pub fn with_platform(
        generator: Arc<dyn PolicyGenerator>,
        clipboard: Box<dyn ClipboardProvider>,
        saver: Box<dyn FileSaver>,
        presenter: ResultPresenter,
    ) -> Self {
        Self {
            state: AppState::default(),
            generator,
            clipboard,
            saver,
            presenter,
            pending: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// True while a generation is running
    pub fn is_busy(&self) -> bool {
        self.state.form.is_submitting
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.toasts.prune(Instant::now());
    }

    /// Submit the form; generation runs in the background
    pub fn submit(&mut self) {
        match self.state.form.begin_submit() {
            Ok(request) => {
                let generator = Arc::clone(&self.generator);
                self.pending = Some(tokio::spawn(
                    async move { generator.generate(request).await },
                ));
            }
            Err(SubmitError::InProgress) => {
                tracing::debug!("Submit ignored, generation in progress");
            }
            Err(e) => {
                tracing::debug!("Submit rejected: {e}");
            }
        }
    }

    /// Collect the generation outcome once the background task is done
    pub async fn poll_generation(&mut self) {
        let finished = self
            .pending
            .as_ref()
            .is_some_and(|handle| handle.is_finished());
        if !finished {
            return;
        }
        let Some(handle) = self.pending.take() else {
            return;
        };

        let outcome = match handle.await {
            Ok(outcome) => outcome,
            Err(e) => Err(GenerationError::TaskFailed(e.to_string())),
        };

        if let Ok(doc) = self.state.form.finish_submit(outcome) {
            self.state.publish_document(doc);
        }
    }

    /// Copy the current document to the clipboard
    pub fn copy_document(&mut self) {
        if let Some(doc) = &self.state.document {
            self.presenter
                .copy(doc, self.clipboard.as_mut(), &mut self.state.toasts);
        }
    }

    /// Save the current document as a text file
    pub fn save_document(&mut self) {
        if let Some(doc) = &self.state.document {
            self.presenter
                .save(doc, self.saver.as_ref(), &mut self.state.toasts);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.focus {
            Focus::Form => self.handle_form_key(key),
            Focus::Result => self.handle_result_key(key),
        }
    }

    /// Handle keys in the intake form
    fn handle_form_key(&mut self, key: KeyEvent) {
        // Form is disabled while generating
        if self.is_busy() {
            return;
        }

        let form = &mut self.state.form;
        let on_policy_field = form.active_field() == 1;

        match key.code {
            KeyCode::Char('g') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Tab => {
                if form.is_buttons_row_active() && self.state.document.is_some() {
                    self.state.focus = Focus::Result;
                } else {
                    form.next_field();
                }
            }
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Down => form.next_field(),
            KeyCode::Left if on_policy_field => form.cycle_policy(false),
            KeyCode::Right | KeyCode::Char(' ') if on_policy_field => form.cycle_policy(true),
            KeyCode::Enter => match form.active_field() {
                2 => form.newline(),
                BUTTONS_ROW => self.submit(),
                _ => form.next_field(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    /// Handle keys in the result panel
    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => {
                self.state.form.set_active_field(0);
                self.state.focus = Focus::Form;
            }
            KeyCode::BackTab => {
                self.state.form.set_active_field(BUTTONS_ROW);
                self.state.focus = Focus::Form;
            }
            KeyCode::Esc => self.state.focus.toggle(),
            KeyCode::Up | KeyCode::Char('k') => self.state.result_scroll.up(1),
            KeyCode::Down | KeyCode::Char('j') => self.state.result_scroll.down(1),
            KeyCode::PageUp => self.state.result_scroll.up(PAGE_SCROLL),
            KeyCode::PageDown => self.state.result_scroll.down(PAGE_SCROLL),
            KeyCode::Home => self.state.result_scroll.to_top(),
            KeyCode::End => self.state.result_scroll.down(u16::MAX),
            KeyCode::Char(c) if c == COPY_KEY => self.copy_document(),
            KeyCode::Char(c) if c == SAVE_KEY => self.save_document(),
            _ => {}
        }
    }
}
