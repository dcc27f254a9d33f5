// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct together with its icon and
//! lifecycle phase.

use crate::domain::notification::Kind;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Glyph shown at the start of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Check,
    Warning,
}

impl Icon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Check => "✓",
            Icon::Warning => "⚠",
        }
    }
}

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Visible,
    /// Fading out since the given instant.
    Leaving(Instant),
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: String,
    phase: Phase,
}

impl Notification {
    /// Creates a new notification with the given kind and message.
    pub fn new(kind: Kind, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            phase: Phase::Visible,
        }
    }

    /// Creates a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Creates an error notification.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Kind::Error, message)
    }

    /// Creates an info notification.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Kind::Info, message)
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check mark for successes, warning sign for everything else.
    #[must_use]
    pub fn icon(&self) -> Icon {
        match self.kind {
            Kind::Success => Icon::Check,
            Kind::Error | Kind::Info => Icon::Warning,
        }
    }

    /// Starts the fade-out. Calling it again keeps the first instant.
    pub fn begin_exit(&mut self, now: Instant) {
        if self.phase == Phase::Visible {
            self.phase = Phase::Leaving(now);
        }
    }

    /// Opacity at `now`, falling linearly to zero over `exit` once leaving.
    #[must_use]
    pub fn opacity(&self, now: Instant, exit: Duration) -> f32 {
        match self.phase {
            Phase::Visible => 1.0,
            Phase::Leaving(since) => {
                if exit.is_zero() {
                    return 0.0;
                }
                let elapsed = now.saturating_duration_since(since).as_secs_f32();
                (1.0 - elapsed / exit.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}
