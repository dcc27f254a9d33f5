// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! A single toast slot anchored to the top-right corner of the window. Each
//! push replaces whatever is showing; nothing is ever queued.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, icon and lifecycle phase
//! - [`manager`] - `Manager` owning the slot and its timers
//! - [`toast`] - Toast widget rendering the current notification
//!
//! # Usage
//!
//! ```
//! use brandly_login::domain::notification::Kind;
//! use brandly_login::ui::notifications::{Manager, Notification};
//! use std::time::Duration;
//!
//! let mut manager = Manager::new(Duration::from_secs(3), Duration::from_millis(500));
//!
//! // The returned value must be scheduled; it starts the exit animation.
//! let begin_exit = manager.push(Notification::new(Kind::Info, "Hello"));
//! assert_eq!(begin_exit.delay(), Duration::from_secs(3));
//! assert!(manager.current().is_some());
//! ```
//!
//! # Lifecycle
//!
//! - Visible for the display duration (3s by default)
//! - Then fades out for the exit duration (0.5s by default)
//! - Then removed; timer messages for a replaced toast are ignored

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Icon, Notification, NotificationId, Phase};
pub use toast::Toast;
