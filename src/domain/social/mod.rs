// SPDX-License-Identifier: MPL-2.0
//! Social login providers shown below the forms.

/// A third-party login provider. None of them are wired to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Google,
    Facebook,
    GitHub,
    LinkedIn,
}

impl Provider {
    /// All providers in display order.
    pub const ALL: [Provider; 4] = [
        Provider::Google,
        Provider::Facebook,
        Provider::GitHub,
        Provider::LinkedIn,
    ];

    /// Human-readable provider name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Provider::Google => "Google",
            Provider::Facebook => "Facebook",
            Provider::GitHub => "GitHub",
            Provider::LinkedIn => "LinkedIn",
        }
    }

    /// Short glyph used on the round provider button.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Provider::Google => "G",
            Provider::Facebook => "f",
            Provider::GitHub => "gh",
            Provider::LinkedIn => "in",
        }
    }

    /// Text of the "not available yet" notification.
    #[must_use]
    pub fn coming_soon_message(self) -> String {
        format!("{} login coming soon! 🚀", self.label())
    }
}
