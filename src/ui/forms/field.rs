// SPDX-License-Identifier: MPL-2.0
//! A single text field and its leading icon.

use crate::domain::form::FieldId;
use crate::ui::state::Pulse;

/// Icon bump applied while the user is typing.
pub const ICON_PULSE_SCALE: f32 = 1.2;

/// Current contents of one input plus its icon pulse.
#[derive(Debug, Clone, Default)]
pub struct Field {
    value: String,
    icon_pulse: Pulse,
}

impl Field {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_icon_pulsing(&self) -> bool {
        self.icon_pulse.is_active()
    }

    /// Stores the new contents and bumps the icon; returns the generation
    /// that ends the bump.
    pub fn set(&mut self, value: String) -> u64 {
        self.value = value;
        self.icon_pulse.trigger()
    }

    pub fn settle_icon(&mut self, generation: u64) {
        self.icon_pulse.settle(generation);
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

/// Placeholder shown in an empty field.
#[must_use]
pub fn placeholder(id: FieldId) -> &'static str {
    match id {
        FieldId::Name => "Name",
        FieldId::Email => "Email",
        FieldId::Password => "Password",
    }
}

/// Leading icon of a field.
#[must_use]
pub fn icon(id: FieldId) -> char {
    match id {
        FieldId::Name => '👤',
        FieldId::Email => '✉',
        FieldId::Password => '🔒',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_pulses_the_icon() {
        let mut field = Field::default();
        let generation = field.set("a".into());
        assert!(field.is_icon_pulsing());
        assert_eq!(field.value(), "a");

        field.settle_icon(generation);
        assert!(!field.is_icon_pulsing());
    }

    #[test]
    fn only_the_last_keystroke_ends_the_pulse() {
        let mut field = Field::default();
        let first = field.set("a".into());
        let second = field.set("ab".into());

        field.settle_icon(first);
        assert!(field.is_icon_pulsing());
        field.settle_icon(second);
        assert!(!field.is_icon_pulsing());
    }

    #[test]
    fn clear_empties_the_value() {
        let mut field = Field::default();
        field.set("secret".into());
        field.clear();
        assert_eq!(field.value(), "");
    }
}
