// SPDX-License-Identifier: MPL-2.0
//! Sign-in / sign-up switch.
//!
//! The gradient overlay next to the visible form carries a single "ghost"
//! button offering the other side. Clicking it (or pressing Enter while the
//! pointer rests on it) swaps the forms and keeps the button in a pressed look
//! for a short while.

use crate::domain::ui::Side;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::schedule::Deferred;
use crate::ui::state::Pulse;
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};
use std::time::Duration;

/// Messages emitted by the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Bring `Side` to the foreground.
    Show(Side),
    /// End of the pressed look started by the given generation.
    Released(u64),
    /// The pointer entered (`true`) or left (`false`) the ghost button.
    Hovered(bool),
    /// Enter was pressed; acts on the ghost button if it has pointer focus.
    ActivateHovered,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The pressed look must be released later.
    Schedule(Deferred<Message>),
}

/// Toggle state.
#[derive(Debug, Clone, Default)]
pub struct State {
    side: Side,
    pressed: Pulse,
    pressed_target: Side,
    hovered: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the side currently in the foreground.
    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Returns whether the control that shows `target` looks pressed.
    #[must_use]
    pub fn is_pressed(&self, target: Side) -> bool {
        self.pressed.is_active() && self.pressed_target == target
    }

    /// Process a toggle message and return the corresponding event.
    pub fn update(&mut self, message: Message, press_duration: Duration) -> Event {
        match message {
            Message::Show(side) => {
                if side != self.side {
                    log::debug!("switching to {side:?}");
                }
                self.side = side;
                self.pressed_target = side;
                let generation = self.pressed.trigger();
                Event::Schedule(Deferred::new(press_duration, Message::Released(generation)))
            }
            Message::Released(generation) => {
                self.pressed.settle(generation);
                Event::None
            }
            Message::Hovered(hovered) => {
                self.hovered = hovered;
                Event::None
            }
            Message::ActivateHovered => {
                if self.hovered {
                    self.update(Message::Show(self.side.opposite()), press_duration)
                } else {
                    Event::None
                }
            }
        }
    }
}

/// Render the overlay panel for the current side.
pub fn view(state: &State) -> Element<'_, Message> {
    let target = state.side.opposite();
    let (title, body, label) = match target {
        Side::SignUp => (
            "Hello, Friend!",
            "Enter your personal details and start your journey with us",
            "Sign Up",
        ),
        Side::SignIn => (
            "Welcome Back!",
            "To keep connected with us please login with your personal info",
            "Sign In",
        ),
    };

    let ghost = button(
        Text::new(label)
            .size(typography::BODY_LG)
            .center()
            .width(Length::Fill),
    )
    .width(Length::Fixed(sizing::BUTTON_HEIGHT * 4.0))
    .padding([spacing::SM, spacing::XL])
    .on_press(Message::Show(target))
    .style(styles::button::ghost(state.is_pressed(target)));

    let ghost = mouse_area(ghost)
        .on_enter(Message::Hovered(true))
        .on_exit(Message::Hovered(false));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(
            Text::new(body)
                .size(typography::BODY)
                .center(),
        )
        .push(ghost);

    Container::new(content)
        .padding(spacing::XXL)
        .center(Length::Fill)
        .style(styles::container::overlay_panel)
        .into()
}
