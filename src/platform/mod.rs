//! Platform-specific configuration and capabilities

mod system;
mod traits;

pub use system::{ArboardClipboard, DownloadDirSaver};
pub use traits::{ClipboardProvider, FileSaver, Notifier};

#[cfg(test)]
pub use traits::{MockClipboardProvider, MockFileSaver, MockNotifier};

/// Generate shortcut display for form help text
/// Ctrl+G works on all platforms
pub const GENERATE_SHORTCUT: &str = "Ctrl+G";

/// Copy key in the result panel
pub const COPY_KEY: char = 'c';

/// Save key in the result panel
pub const SAVE_KEY: char = 's';

/// MIME type of saved documents
pub const TEXT_MIME_TYPE: &str = "text/plain";
