// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: gradient page with particles, the card holding the
//! visible form next to the overlay panel, the toast, the loading overlay and
//! finally the click ripples.

use super::Message;
use crate::domain::form::FormKind;
use crate::domain::ui::Side;
use crate::ui::design_tokens::sizing;
use crate::ui::forms::{self, Form};
use crate::ui::loading;
use crate::ui::notifications::{self, Toast};
use crate::ui::particles::Particles;
use crate::ui::ripple;
use crate::ui::styles;
use crate::ui::view_toggle;
use iced::widget::{opaque, Container, Row, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub sign_up: &'a Form,
    pub sign_in: &'a Form,
    pub view_toggle: &'a view_toggle::State,
    pub notifications: &'a notifications::Manager,
    pub loading: &'a loading::State,
    pub particles: &'a Particles,
    pub ripples: &'a ripple::State,
    pub now: Instant,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = Container::new(ctx.particles.view(ctx.now))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(page)
        .push(card(&ctx))
        .push(Toast::view_overlay(ctx.notifications, ctx.now));

    if let Some(overlay) = ctx.loading.view(ctx.now) {
        layers = layers.push(opaque(overlay));
    }

    layers.push(ctx.ripples.view(ctx.now)).into()
}

/// The card: the visible form on one half, the overlay panel on the other.
fn card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let form_half = |form: &'a Form| {
        let kind = form.kind();
        Container::new(forms::view(form).map(move |message| Message::Form(kind, message)))
            .width(Length::FillPortion(1))
            .height(Length::Fill)
    };
    let overlay = Container::new(view_toggle::view(ctx.view_toggle).map(Message::ViewToggle))
        .width(Length::FillPortion(1))
        .height(Length::Fill);

    let halves = match ctx.view_toggle.side() {
        Side::SignIn => Row::new().push(form_half(ctx.sign_in)).push(overlay),
        Side::SignUp => Row::new().push(overlay).push(form_half(ctx.sign_up)),
    };

    let card = Container::new(halves)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .style(styles::container::card);

    Container::new(card).center(Length::Fill).into()
}

/// Form shown for a side.
#[must_use]
pub fn visible_form(side: Side) -> FormKind {
    match side {
        Side::SignIn => FormKind::SignIn,
        Side::SignUp => FormKind::SignUp,
    }
}
