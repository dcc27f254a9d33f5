// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the current notification.
//!
//! Toasts are small gradient cards anchored to the top-right corner of the
//! window. They carry no controls, so the view is generic over the message
//! type of whatever hosts it.

use super::manager::Manager;
use super::notification::Notification;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Container, Row, Space};
use iced::{alignment, Element, Length};
use std::time::Instant;

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast at the given opacity.
    pub fn view<'a, M: 'a>(notification: &'a Notification, alpha: f32) -> Element<'a, M> {
        let icon = text(notification.icon().glyph()).size(typography::TITLE_SM);
        let message = text(notification.message()).size(typography::BODY);

        // Layout: [icon] [message]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(icon)
            .push(Container::new(message).width(Length::Fill));

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding([spacing::MD, spacing::LG])
            .style(styles::container::toast(notification.kind(), alpha))
            .into()
    }

    /// Renders the toast layer: the current notification in the top-right
    /// corner, or nothing.
    pub fn view_overlay<'a, M: 'a>(manager: &'a Manager, now: Instant) -> Element<'a, M> {
        match manager.current() {
            Some(notification) => {
                let alpha = notification.opacity(now, manager.exit_duration());
                Container::new(Self::view(notification, alpha))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
                    .align_y(alignment::Vertical::Top)
                    .padding(spacing::LG)
                    .into()
            }
            None => Space::new().into(),
        }
    }
}

