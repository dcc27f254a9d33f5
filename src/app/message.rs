// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::form::FormKind;
use crate::submission::Timer;
use crate::ui::forms;
use crate::ui::notifications;
use crate::ui::ripple;
use crate::ui::view_toggle;
use iced::Point;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(FormKind, forms::Message),
    ViewToggle(view_toggle::Message),
    Notification(notifications::NotificationMessage),
    /// A timer started by the submission simulator fired.
    Submission(Timer),
    Ripple(ripple::Message),
    CursorMoved(Point),
    EscapePressed,
    Tick(Instant), // Animation frame
}

impl Message {
    /// Returns whether the message was produced by clicking a button, which
    /// spawns a ripple at the pointer.
    #[must_use]
    pub fn is_click(&self) -> bool {
        match self {
            Message::Form(_, message) => message.is_click(),
            Message::ViewToggle(message) => matches!(message, view_toggle::Message::Show(_)),
            _ => false,
        }
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `BRANDLY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
