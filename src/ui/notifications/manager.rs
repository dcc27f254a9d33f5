// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the single toast slot. Pushing returns the deferred
//! message that starts the exit animation; handling that message returns the
//! one that removes the toast. All timers of a toast share one cancellation
//! token, cancelled as soon as the toast is replaced.

use super::notification::{Notification, NotificationId};
use crate::config::defaults::{DEFAULT_NOTIFICATION_DISPLAY_MS, DEFAULT_NOTIFICATION_EXIT_MS};
use crate::ui::schedule::Deferred;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Start fading out the notification with this ID.
    BeginExit(NotificationId),
    /// Remove the notification with this ID.
    Remove(NotificationId),
}

/// Owns the currently displayed notification, if any.
#[derive(Debug)]
pub struct Manager {
    current: Option<Notification>,
    token: CancellationToken,
    display: Duration,
    exit: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_NOTIFICATION_DISPLAY_MS),
            Duration::from_millis(DEFAULT_NOTIFICATION_EXIT_MS),
        )
    }
}

impl Manager {
    /// Creates an empty manager with the given display and exit durations.
    #[must_use]
    pub fn new(display: Duration, exit: Duration) -> Self {
        Self {
            current: None,
            token: CancellationToken::new(),
            display,
            exit,
        }
    }

    /// Shows `notification`, replacing the current one immediately.
    ///
    /// The returned message must be scheduled for the toast to ever leave.
    pub fn push(&mut self, notification: Notification) -> Deferred<Message> {
        self.token.cancel();
        self.token = CancellationToken::new();

        let id = notification.id();
        log::debug!(
            "showing {:?} notification: {}",
            notification.kind(),
            notification.message()
        );
        self.current = Some(notification);

        Deferred::new(self.display, Message::BeginExit(id)).with_token(self.token.clone())
    }

    /// Handles a timer message. Messages for a replaced notification are
    /// ignored.
    pub fn handle_message(&mut self, message: &Message) -> Option<Deferred<Message>> {
        match *message {
            Message::BeginExit(id) => {
                let notification = self.current.as_mut().filter(|n| n.id() == id)?;
                notification.begin_exit(Instant::now());
                Some(Deferred::new(self.exit, Message::Remove(id)).with_token(self.token.clone()))
            }
            Message::Remove(id) => {
                if self.current.as_ref().is_some_and(|n| n.id() == id) {
                    self.current = None;
                }
                None
            }
        }
    }

    /// Returns the notification on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Returns the fade-out duration.
    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        self.exit
    }

    /// Returns whether a toast is fading out and needs redraws.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|n| matches!(n.phase(), super::Phase::Leaving(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::Kind;
    use crate::ui::notifications::Phase;

    fn manager() -> Manager {
        Manager::new(Duration::from_millis(3000), Duration::from_millis(500))
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = manager();
        assert!(manager.current().is_none());
        assert!(!manager.is_animating());
    }

    #[test]
    fn push_shows_notification_and_schedules_exit() {
        let mut manager = manager();
        let notification = Notification::error("Please enter a valid email address");
        let id = notification.id();

        let deferred = manager.push(notification);

        assert_eq!(deferred.delay(), Duration::from_millis(3000));
        assert_eq!(*deferred.message(), Message::BeginExit(id));
        assert_eq!(manager.current().map(Notification::kind), Some(Kind::Error));
    }

    #[test]
    fn push_replaces_and_cancels_previous() {
        let mut manager = manager();
        let first = manager.push(Notification::info("first"));
        let second = manager.push(Notification::success("second"));

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert_eq!(manager.current().map(Notification::message), Some("second"));
    }

    #[test]
    fn full_lifecycle_removes_notification() {
        let mut manager = manager();
        let begin_exit = manager.push(Notification::info("hello"));

        let remove = manager
            .handle_message(begin_exit.message())
            .expect("exit should schedule removal");
        assert_eq!(remove.delay(), Duration::from_millis(500));
        assert!(matches!(
            manager.current().map(Notification::phase),
            Some(Phase::Leaving(_))
        ));
        assert!(manager.is_animating());

        assert!(manager.handle_message(remove.message()).is_none());
        assert!(manager.current().is_none());
    }

    #[test]
    fn stale_messages_are_ignored() {
        let mut manager = manager();
        let old_exit = manager.push(Notification::info("old"));
        let old_id = match *old_exit.message() {
            Message::BeginExit(id) => id,
            Message::Remove(id) => id,
        };
        manager.push(Notification::info("new"));

        assert!(manager.handle_message(old_exit.message()).is_none());
        assert!(manager.handle_message(&Message::Remove(old_id)).is_none());
        assert_eq!(manager.current().map(Notification::message), Some("new"));
        assert_eq!(
            manager.current().map(Notification::phase),
            Some(Phase::Visible)
        );
    }

    #[test]
    fn rapid_pushes_keep_only_the_latest() {
        let mut manager = manager();
        for i in 0..5 {
            manager.push(Notification::info(format!("message {i}")));
        }
        assert_eq!(
            manager.current().map(Notification::message),
            Some("message 4")
        );
    }
}
