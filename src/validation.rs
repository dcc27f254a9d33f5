// SPDX-License-Identifier: MPL-2.0
//! Field validation for the sign-up and sign-in forms.
//!
//! The rules are deliberately trivial: a minimum name length, a loose
//! `local@domain.tld` email shape and a minimum password length. Checks run in
//! a fixed order and stop at the first violation, so callers only ever see one
//! error at a time.

use crate::domain::form::{FormData, SignInData, SignUpData};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Minimum number of characters in a trimmed name.
pub const MIN_NAME_CHARS: usize = 3;

/// Minimum number of characters in a sign-up password.
pub const MIN_PASSWORD_CHARS: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|err| {
        unreachable!("email pattern is a valid regex: {err}")
    })
});

/// The first rule a form payload violates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NameTooShort,
    InvalidEmail,
    PasswordTooShort,
    PasswordMissing,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NameTooShort => {
                write!(f, "Please enter a valid name (minimum {MIN_NAME_CHARS} characters)")
            }
            ValidationError::InvalidEmail => write!(f, "Please enter a valid email address"),
            ValidationError::PasswordTooShort => {
                write!(f, "Password must be at least {MIN_PASSWORD_CHARS} characters")
            }
            ValidationError::PasswordMissing => write!(f, "Please enter your password"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Returns whether `email` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates a sign-up payload: name, then email, then password.
pub fn validate_sign_up(data: &SignUpData) -> Result<(), ValidationError> {
    if data.name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(ValidationError::NameTooShort);
    }

    if !is_valid_email(&data.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if data.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}

/// Validates a sign-in payload: email, then password presence.
pub fn validate_sign_in(data: &SignInData) -> Result<(), ValidationError> {
    if !is_valid_email(&data.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if data.password.is_empty() {
        return Err(ValidationError::PasswordMissing);
    }

    Ok(())
}

/// Validates either form payload.
pub fn validate(data: &FormData) -> Result<(), ValidationError> {
    match data {
        FormData::SignUp(data) => validate_sign_up(data),
        FormData::SignIn(data) => validate_sign_in(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up(name: &str, email: &str, password: &str) -> SignUpData {
        SignUpData {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn sign_in(email: &str, password: &str) -> SignInData {
        SignInData {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn short_name_is_rejected_first() {
        assert_eq!(
            validate_sign_up(&sign_up("Al", "a@b.com", "secret1")),
            Err(ValidationError::NameTooShort)
        );
        // Every other field is invalid too, the name still wins.
        assert_eq!(
            validate_sign_up(&sign_up("", "nope", "")),
            Err(ValidationError::NameTooShort)
        );
    }

    #[test]
    fn name_is_trimmed_before_counting() {
        assert_eq!(
            validate_sign_up(&sign_up("  Al  ", "a@b.com", "secret1")),
            Err(ValidationError::NameTooShort)
        );
        assert_eq!(validate_sign_up(&sign_up(" Ali ", "a@b.com", "secret1")), Ok(()));
    }

    #[test]
    fn invalid_email_is_reported_after_name() {
        assert_eq!(
            validate_sign_up(&sign_up("Alice", "not-an-email", "secret1")),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn short_password_is_reported_last() {
        assert_eq!(
            validate_sign_up(&sign_up("Alice", "a@b.com", "abc")),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn complete_sign_up_passes() {
        assert_eq!(validate_sign_up(&sign_up("Alice", "a@b.com", "secret1")), Ok(()));
    }

    #[test]
    fn password_length_counts_characters_not_bytes() {
        assert_eq!(
            validate_sign_up(&sign_up("Alice", "a@b.com", "éééé")),
            Err(ValidationError::PasswordTooShort)
        );
        assert_eq!(validate_sign_up(&sign_up("Alice", "a@b.com", "éééééé")), Ok(()));
    }

    #[test]
    fn sign_in_checks_email_then_password() {
        assert_eq!(
            validate_sign_in(&sign_in("bad", "")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_sign_in(&sign_in("a@b.com", "")),
            Err(ValidationError::PasswordMissing)
        );
        assert_eq!(validate_sign_in(&sign_in("a@b.com", "x")), Ok(()));
    }

    #[test]
    fn email_shape_examples() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("a@b.c.d"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn validate_dispatches_on_kind() {
        let data = FormData::from(sign_in("a@b.com", ""));
        assert_eq!(validate(&data), Err(ValidationError::PasswordMissing));
    }

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            ValidationError::NameTooShort.to_string(),
            "Please enter a valid name (minimum 3 characters)"
        );
        assert_eq!(
            ValidationError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
        assert_eq!(
            ValidationError::PasswordMissing.to_string(),
            "Please enter your password"
        );
    }
}
