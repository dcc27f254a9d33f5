// SPDX-License-Identifier: MPL-2.0
//! Form payloads captured at submit time.
//!
//! These values are built from the current input contents when a form is
//! submitted and dropped once validation (and the simulated submission) is done.

/// Which of the two forms a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    SignUp,
    SignIn,
}

impl FormKind {
    /// Message shown once the simulated submission of this form completes.
    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::SignUp => "Account created successfully! 🎉",
            FormKind::SignIn => "Welcome back! 👋",
        }
    }

    /// Fields rendered by this form, in display order.
    #[must_use]
    pub fn fields(self) -> &'static [FieldId] {
        match self {
            FormKind::SignUp => &[FieldId::Name, FieldId::Email, FieldId::Password],
            FormKind::SignIn => &[FieldId::Email, FieldId::Password],
        }
    }
}

/// Identifies an input field inside a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Password,
}

/// Sign-up payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpData {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign-in payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInData {
    pub email: String,
    pub password: String,
}

/// Payload of either form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormData {
    SignUp(SignUpData),
    SignIn(SignInData),
}

impl FormData {
    /// Returns the form this payload was captured from.
    #[must_use]
    pub fn kind(&self) -> FormKind {
        match self {
            FormData::SignUp(_) => FormKind::SignUp,
            FormData::SignIn(_) => FormKind::SignIn,
        }
    }
}

impl From<SignUpData> for FormData {
    fn from(data: SignUpData) -> Self {
        FormData::SignUp(data)
    }
}

impl From<SignInData> for FormData {
    fn from(data: SignInData) -> Self {
        FormData::SignIn(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_data_reports_its_kind() {
        assert_eq!(FormData::from(SignUpData::default()).kind(), FormKind::SignUp);
        assert_eq!(FormData::from(SignInData::default()).kind(), FormKind::SignIn);
    }

    #[test]
    fn sign_in_has_no_name_field() {
        assert!(!FormKind::SignIn.fields().contains(&FieldId::Name));
        assert_eq!(FormKind::SignUp.fields().len(), 3);
    }

    #[test]
    fn success_messages_differ_per_form() {
        assert_ne!(
            FormKind::SignUp.success_message(),
            FormKind::SignIn.success_message()
        );
    }
}
