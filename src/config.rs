//! Configuration handling for the TUI

use crate::generator::DEFAULT_GENERATION_DELAY;
use crate::policy::DEFAULT_DATE_FORMAT;
use crate::presenter::DEFAULT_TOAST_DURATION;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Simulated generation latency in milliseconds
    pub generation_delay_ms: Option<u64>,
    /// How long confirmation toasts stay visible, in milliseconds
    pub toast_duration_ms: Option<u64>,
    /// Where saved documents go (defaults to the user's download dir)
    pub download_dir: Option<PathBuf>,
    /// strftime format of the "Last updated" stamp
    pub date_format: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "legalpolicy", "legal-policy-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                tracing::debug!("Loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn generation_delay(&self) -> Duration {
        self.generation_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_GENERATION_DELAY)
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOAST_DURATION)
    }

    pub fn date_format(&self) -> &str {
        self.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
    }
}
