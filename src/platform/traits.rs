//! Capabilities the result presenter delegates to

use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

/// Writes text to the system clipboard
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardProvider {
    fn write(&mut self, text: &str) -> Result<()>;
}

/// Saves bytes as a user-visible file
#[cfg_attr(test, mockall::automock)]
pub trait FileSaver {
    /// Returns the path the bytes ended up at
    fn save_as(&self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<PathBuf>;
}

/// Shows a transient message to the user
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, title: &str, description: &str, duration: Duration);
}
