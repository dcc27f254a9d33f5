// SPDX-License-Identifier: MPL-2.0
//! Form rendering.

use super::field::{self, ICON_PULSE_SCALE};
use super::{Form, Message};
use crate::domain::form::{FieldId, FormKind};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::{password_toggle, social};
use iced::widget::{button, container, text_input, Column, Container, Stack, Text};
use iced::{alignment::Horizontal, Element, Font, Length, Padding};

/// Render `form`: title, social buttons, inputs and the submit button.
pub fn view(form: &Form) -> Element<'_, Message> {
    let (title, hint, submit_label) = match form.kind() {
        FormKind::SignUp => (
            "Create Account",
            "or use your email for registration",
            "Sign Up",
        ),
        FormKind::SignIn => ("Sign In", "or use your account", "Sign In"),
    };

    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_LG))
        .push(social::view(form.social()).map(Message::Social))
        .push(
            Text::new(hint)
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );

    for &id in form.kind().fields() {
        content = content.push(input(form, id));
    }

    if form.kind() == FormKind::SignIn {
        content = content.push(
            Text::new("Forgot your password?")
                .size(typography::BODY_SM)
                .color(palette::GRAY_400),
        );
    }

    let submit = button(
        Text::new(submit_label)
            .size(typography::BODY_LG)
            .center()
            .width(Length::Fill),
    )
    .width(Length::Fixed(sizing::BUTTON_HEIGHT * 4.0))
    .padding([spacing::SM, spacing::XL])
    .on_press(Message::SubmitClicked)
    .style(styles::button::primary);

    content = content.push(Container::new(submit).padding([spacing::XS, 0.0]));

    Container::new(content)
        .padding([spacing::XL, spacing::XXL])
        .center(Length::Fill)
        .into()
}

fn input(form: &Form, id: FieldId) -> Element<'_, Message> {
    let field = form.field(id);
    let icon_size = if field.is_icon_pulsing() {
        typography::BODY_LG * ICON_PULSE_SCALE
    } else {
        typography::BODY_LG
    };

    let mut input = text_input(field::placeholder(id), field.value())
        .on_input(move |value| Message::Input(id, value))
        .on_submit(Message::Submit)
        .icon(text_input::Icon {
            font: Font::default(),
            code_point: field::icon(id),
            size: Some(icon_size.into()),
            spacing: spacing::XS,
            side: text_input::Side::Left,
        })
        .size(typography::BODY_LG)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::text_input::field);

    if id != FieldId::Password {
        return input.into();
    }

    let toggle = form.password_toggle();
    input = input.secure(!toggle.is_revealed()).padding(Padding {
        right: sizing::ICON_LG + spacing::MD,
        ..Padding::new(spacing::SM)
    });

    Stack::new()
        .push(input)
        .push(
            container(password_toggle::view(toggle).map(Message::Password))
                .align_right(Length::Fill)
                .center_y(Length::Fill)
                .padding([0.0, spacing::XS]),
        )
        .width(Length::Fill)
        .into()
}
