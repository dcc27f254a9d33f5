// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! This module contains UI-related value objects that are independent
//! of any presentation framework.

pub mod newtypes;

pub use newtypes::{DelayMs, ParticleCount};

/// Which form is in the foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    SignIn,
    SignUp,
}

impl Side {
    /// Returns the other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::SignIn => Side::SignUp,
            Side::SignUp => Side::SignIn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_side_is_sign_in() {
        assert_eq!(Side::default(), Side::SignIn);
    }

    #[test]
    fn opposite_is_an_involution() {
        assert_eq!(Side::SignIn.opposite(), Side::SignUp);
        assert_eq!(Side::SignUp.opposite().opposite(), Side::SignUp);
    }
}
