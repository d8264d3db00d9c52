//! Result presenter: paragraph splitting, copy and save actions
//!
//! Both actions are fire-and-forget. Platform failures are logged and
//! shown as a toast; they never reach the form or the document.

use crate::platform::{ClipboardProvider, FileSaver, Notifier, TEXT_MIME_TYPE};
use crate::policy::{GeneratedDocument, PARAGRAPH_DELIMITER};
use std::time::Duration;

/// Default lifetime of confirmation toasts
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Split document content into display paragraphs, in order
pub fn paragraphs(content: &str) -> Vec<&str> {
    content.split(PARAGRAPH_DELIMITER).collect()
}

/// Filename for a saved document: lowercase title, each whitespace run
/// replaced by one `-`, `.txt` appended
pub fn derive_filename(title: &str) -> String {
    let mut filename = String::with_capacity(title.len() + 4);
    let mut in_whitespace = false;
    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                filename.push('-');
            }
            in_whitespace = true;
        } else {
            filename.push(c);
            in_whitespace = false;
        }
    }
    filename.push_str(".txt");
    filename
}

/// Copy and save actions for the current document
#[derive(Debug, Clone, Copy)]
pub struct ResultPresenter {
    toast_duration: Duration,
}

impl Default for ResultPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl ResultPresenter {
    pub fn new(toast_duration: Duration) -> Self {
        Self { toast_duration }
    }

    /// Write the document content verbatim to the clipboard
    pub fn copy(
        &self,
        doc: &GeneratedDocument,
        clipboard: &mut dyn ClipboardProvider,
        notifier: &mut dyn Notifier,
    ) {
        match clipboard.write(doc.content()) {
            Ok(()) => notifier.notify(
                "Copied to clipboard",
                &format!("{} has been copied to your clipboard.", doc.title()),
                self.toast_duration,
            ),
            Err(e) => {
                tracing::warn!("Clipboard write failed: {e:#}");
                notifier.notify("Copy failed", &e.to_string(), self.toast_duration);
            }
        }
    }

    /// Save the document content as a plain-text file named after its title
    pub fn save(
        &self,
        doc: &GeneratedDocument,
        saver: &dyn FileSaver,
        notifier: &mut dyn Notifier,
    ) {
        let filename = derive_filename(doc.title());
        match saver.save_as(doc.content().as_bytes(), &filename, TEXT_MIME_TYPE) {
            Ok(path) => {
                tracing::debug!("Saved {} to {}", doc.title(), path.display());
                notifier.notify(
                    "Download started",
                    &format!("{} will be saved to your device.", doc.title()),
                    self.toast_duration,
                );
            }
            Err(e) => {
                tracing::warn!("Saving {filename} failed: {e:#}");
                notifier.notify("Save failed", &e.to_string(), self.toast_duration);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{MockClipboardProvider, MockFileSaver, MockNotifier};
    use anyhow::anyhow;
    use std::path::PathBuf;

    fn document() -> GeneratedDocument {
        GeneratedDocument::new(
            "Privacy Policy",
            "Privacy Policy for Acme Corp\n\nWe respect your privacy.\n\nLast updated: 1/2/2026",
        )
    }

    mod filename_tests {
        use super::*;

        #[test]
        fn test_privacy_policy() {
            assert_eq!(derive_filename("Privacy Policy"), "privacy-policy.txt");
        }

        #[test]
        fn test_terms_of_service() {
            assert_eq!(derive_filename("Terms of Service"), "terms-of-service.txt");
        }

        #[test]
        fn test_single_word() {
            assert_eq!(derive_filename("Disclaimer"), "disclaimer.txt");
        }

        #[test]
        fn test_whitespace_runs_collapse() {
            assert_eq!(derive_filename("Cookie \t  Policy"), "cookie-policy.txt");
        }

        #[test]
        fn test_edge_whitespace_is_kept_as_hyphen() {
            assert_eq!(derive_filename(" Cookie Policy\n"), "-cookie-policy-.txt");
        }
    }

    mod paragraph_tests {
        use super::*;

        #[test]
        fn test_split_preserves_order() {
            let doc = document();
            assert_eq!(
                paragraphs(doc.content()),
                vec![
                    "Privacy Policy for Acme Corp",
                    "We respect your privacy.",
                    "Last updated: 1/2/2026",
                ]
            );
        }

        #[test]
        fn test_single_newlines_stay_in_paragraph() {
            assert_eq!(paragraphs("1. Heading\nBody"), vec!["1. Heading\nBody"]);
        }

        #[test]
        fn test_split_then_join_is_identity() {
            let doc = document();
            let rejoined = paragraphs(doc.content()).join(PARAGRAPH_DELIMITER);
            assert_eq!(rejoined, doc.content());
        }
    }

    mod copy_tests {
        use super::*;

        #[test]
        fn test_copy_writes_content_and_confirms() {
            let doc = document();
            let expected = doc.content().to_string();
            let mut clipboard = MockClipboardProvider::new();
            clipboard
                .expect_write()
                .withf(move |text| text == expected)
                .times(1)
                .returning(|_| Ok(()));
            let mut notifier = MockNotifier::new();
            notifier
                .expect_notify()
                .withf(|title, description, duration| {
                    title == "Copied to clipboard"
                        && description.contains("Privacy Policy")
                        && *duration == DEFAULT_TOAST_DURATION
                })
                .times(1)
                .return_const(());

            ResultPresenter::default().copy(&doc, &mut clipboard, &mut notifier);
        }

        #[test]
        fn test_copy_failure_only_notifies() {
            let doc = document();
            let mut clipboard = MockClipboardProvider::new();
            clipboard
                .expect_write()
                .returning(|_| Err(anyhow!("no display")));
            let mut notifier = MockNotifier::new();
            notifier
                .expect_notify()
                .withf(|title, _, _| title == "Copy failed")
                .times(1)
                .return_const(());

            ResultPresenter::default().copy(&doc, &mut clipboard, &mut notifier);
        }
    }

    mod save_tests {
        use super::*;

        #[test]
        fn test_save_derives_filename_and_mime() {
            let doc = document();
            let expected_bytes = doc.content().as_bytes().to_vec();
            let mut saver = MockFileSaver::new();
            saver
                .expect_save_as()
                .withf(move |bytes, filename, mime_type| {
                    bytes == expected_bytes.as_slice()
                        && filename == "privacy-policy.txt"
                        && mime_type == "text/plain"
                })
                .times(1)
                .returning(|_, filename, _| Ok(PathBuf::from(filename)));
            let mut notifier = MockNotifier::new();
            notifier
                .expect_notify()
                .withf(|title, description, _| {
                    title == "Download started" && description.starts_with("Privacy Policy")
                })
                .times(1)
                .return_const(());

            ResultPresenter::new(Duration::from_millis(500)).save(&doc, &saver, &mut notifier);
        }

        #[test]
        fn test_save_failure_only_notifies() {
            let doc = document();
            let mut saver = MockFileSaver::new();
            saver
                .expect_save_as()
                .returning(|_, _, _| Err(anyhow!("read-only file system")));
            let mut notifier = MockNotifier::new();
            notifier
                .expect_notify()
                .withf(|title, description, _| {
                    title == "Save failed" && description.contains("read-only")
                })
                .times(1)
                .return_const(());

            ResultPresenter::default().save(&doc, &saver, &mut notifier);
        }
    }
}
