// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard and mouse events are turned into application messages
//! here; an animation tick runs while anything on screen is moving.

use super::Message;
use crate::ui::view_toggle;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, Subscription};
use std::time::Duration;

/// Interval between animation frames (about 30 fps).
pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

/// Routes the few native events the screen reacts to.
///
/// - Escape always reaches the app (it only hides the loading overlay)
/// - Enter is ignored when a text field already consumed it as a submit
/// - Cursor moves are tracked to place click ripples
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(Named::Enter),
            ..
        }) => match status {
            event::Status::Ignored => Some(Message::ViewToggle(
                view_toggle::Message::ActivateHovered,
            )),
            event::Status::Captured => None,
        },
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        _ => None,
    })
}

/// Creates the periodic tick driving particles, spinner, ripples and toast
/// fade-out.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(FRAME_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
