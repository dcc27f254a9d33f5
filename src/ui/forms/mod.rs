// SPDX-License-Identifier: MPL-2.0
//! Sign-up and sign-in form components.
//!
//! A [`Form`] owns the raw input values of one form together with its
//! micro-animations (icon pulses, password visibility, social buttons). It
//! never validates anything itself: submitting hands a [`FormData`] snapshot to
//! the parent, which runs it through the submission simulator.

pub mod field;
mod view;

pub use field::Field;
pub use view::view;

use crate::config::Timings;
use crate::domain::form::{FieldId, FormData, FormKind, SignInData, SignUpData};
use crate::domain::notification::Kind;
use crate::ui::password_toggle;
use crate::ui::schedule::Deferred;
use crate::ui::social;

#[derive(Debug, Clone)]
pub enum Message {
    Input(FieldId, String),
    IconPulseEnded(FieldId, u64),
    Password(password_toggle::Message),
    Social(social::Message),
    /// Enter pressed inside a field.
    Submit,
    /// Submit button clicked.
    SubmitClicked,
}

impl Message {
    /// Returns whether the message comes from a button click.
    #[must_use]
    pub fn is_click(&self) -> bool {
        matches!(
            self,
            Message::SubmitClicked
                | Message::Password(password_toggle::Message::Toggle)
                | Message::Social(social::Message::Clicked(_))
        )
    }
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Schedule(Deferred<Message>),
    /// Show a notification and schedule the follow-up message.
    Notify {
        kind: Kind,
        message: String,
        settle: Deferred<Message>,
    },
    /// The user asked to submit; carries the current values.
    Submitted(FormData),
}

/// State of one form.
#[derive(Debug, Clone)]
pub struct Form {
    kind: FormKind,
    name: Field,
    email: Field,
    password: Field,
    password_toggle: password_toggle::State,
    social: social::State,
}

impl Form {
    #[must_use]
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            name: Field::default(),
            email: Field::default(),
            password: Field::default(),
            password_toggle: password_toggle::State::new(),
            social: social::State::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub fn field(&self, id: FieldId) -> &Field {
        match id {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Password => &self.password,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut Field {
        match id {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Password => &mut self.password,
        }
    }

    #[must_use]
    pub fn password_toggle(&self) -> &password_toggle::State {
        &self.password_toggle
    }

    #[must_use]
    pub fn social(&self) -> &social::State {
        &self.social
    }

    /// Snapshot of the current input values.
    #[must_use]
    pub fn data(&self) -> FormData {
        match self.kind {
            FormKind::SignUp => SignUpData {
                name: self.name.value().to_string(),
                email: self.email.value().to_string(),
                password: self.password.value().to_string(),
            }
            .into(),
            FormKind::SignIn => SignInData {
                email: self.email.value().to_string(),
                password: self.password.value().to_string(),
            }
            .into(),
        }
    }

    /// Empties every input. Password visibility is left as is.
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
    }

    pub fn update(&mut self, message: Message, timings: &Timings) -> Event {
        match message {
            Message::Input(id, value) => {
                let generation = self.field_mut(id).set(value);
                Event::Schedule(Deferred::new(
                    timings.input_pulse,
                    Message::IconPulseEnded(id, generation),
                ))
            }
            Message::IconPulseEnded(id, generation) => {
                self.field_mut(id).settle_icon(generation);
                Event::None
            }
            Message::Password(message) => {
                match self.password_toggle.update(message, timings.password_pulse) {
                    Some(deferred) => Event::Schedule(deferred.map(Message::Password)),
                    None => Event::None,
                }
            }
            Message::Social(message) => match self.social.update(message, timings.social_pulse) {
                social::Event::ComingSoon { message, settle } => Event::Notify {
                    kind: Kind::Info,
                    message,
                    settle: settle.map(Message::Social),
                },
                social::Event::None => Event::None,
            },
            Message::Submit | Message::SubmitClicked => Event::Submitted(self.data()),
        }
    }
}
