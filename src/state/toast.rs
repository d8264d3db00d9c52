//! Transient notifications shown in the status bar

use crate::platform::Notifier;
use std::time::{Duration, Instant};

/// A notification that disappears after its duration
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Queue of live toasts, newest last
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Drop expired toasts
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    /// The toast to display, if any
    pub fn current(&self) -> Option<&Toast> {
        self.toasts.last()
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, title: &str, description: &str, duration: Duration) {
        self.toasts.push(Toast {
            title: title.to_string(),
            description: description.to_string(),
            expires_at: Instant::now() + duration,
        });
    }
}
