//! Ephemeral user-facing notifications.
//!
//! An independent queue with a fixed display lifetime. The host's render
//! tick calls [`Notifier::sweep`] to expire old entries; nothing here
//! runs on a timer or touches core state.

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// How long a notification stays visible.
pub const DISPLAY_SECONDS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub severity: Severity,
    pub posted_at: DateTime<Utc>,
}

/// Ordered queue of visible notifications, oldest first.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    queue: Vec<Notification>,
}

impl Notifier {
    pub fn new() -> Self {
        Notifier::default()
    }

    /// Append a notification and return its id (useful for manual dismiss).
    pub fn push(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: DateTime<Utc>,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        self.queue.push(Notification {
            id: id.clone(),
            message: message.into(),
            severity,
            posted_at: now,
        });
        id
    }

    /// Remove a notification by id before its lifetime ends (the close
    /// button). Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: &str) {
        self.queue.retain(|n| n.id != id);
    }

    /// Drop every notification past its display lifetime.
    pub fn sweep(&mut self, now: DateTime<Utc>) {
        self.queue
            .retain(|n| now - n.posted_at < Duration::seconds(DISPLAY_SECONDS));
    }

    pub fn active(&self) -> &[Notification] {
        &self.queue
    }
}
