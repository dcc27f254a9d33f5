// SPDX-License-Identifier: MPL-2.0
//! Notification kinds.

/// Kind of a notification; drives its gradient and icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    Success,
    Error,
    #[default]
    Info,
}

impl Kind {
    /// Returns true for the error kind, which gets its own gradient.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Kind::Error)
    }
}
