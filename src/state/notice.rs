//! Short-lived status bar notices

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
}

/// A message that disappears on its own after a while
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
    expires_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>, kind: NoticeKind, ttl: Duration, now: Instant) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
