//! System-backed capability implementations

use super::traits::{ClipboardProvider, FileSaver};
use anyhow::{anyhow, Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Clipboard backed by `arboard`
///
/// The handle is created on first use and kept for the session; on X11
/// and Wayland the copied text is only served while it is alive.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<arboard::Clipboard>,
}

impl ClipboardProvider for ArboardClipboard {
    fn write(&mut self, text: &str) -> Result<()> {
        if self.clipboard.is_none() {
            self.clipboard = Some(arboard::Clipboard::new()?);
        }
        let clipboard = self
            .clipboard
            .as_mut()
            .ok_or_else(|| anyhow!("Clipboard unavailable"))?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Saves files into a download directory without overwriting
#[derive(Debug, Clone)]
pub struct DownloadDirSaver {
    dir: PathBuf,
}

impl DownloadDirSaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Use the user's download directory, or the working directory when
    /// the platform has none
    pub fn from_user_dirs() -> Self {
        let dir = UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSaver for DownloadDirSaver {
    fn save_as(&self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = unique_path(&self.dir, filename);
        fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), mime_type, "Saved document");
        Ok(path)
    }
}

/// First free path for `filename` in `dir`: `name.txt`, `name (1).txt`, ...
fn unique_path(dir: &Path, filename: &str) -> PathBuf {
    let candidate = dir.join(filename);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, extension) = match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (filename, None),
    };

    (1..)
        .map(|n| match extension {
            Some(ext) => dir.join(format!("{stem} ({n}).{ext}")),
            None => dir.join(format!("{stem} ({n})")),
        })
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}
