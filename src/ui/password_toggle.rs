// SPDX-License-Identifier: MPL-2.0
//! Show / hide button living inside a password field.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::schedule::Deferred;
use crate::ui::state::Pulse;
use crate::ui::styles;
use iced::widget::{button, Text};
use iced::Element;
use std::time::Duration;

/// Scale applied to the icon while the pulse is active.
const PULSE_SCALE: f32 = 1.2;

/// Icon reflecting the current masking mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Password is masked; clicking reveals it.
    Eye,
    /// Password is readable; clicking masks it again.
    EyeSlash,
}

impl Icon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Eye => "👁",
            Icon::EyeSlash => "🙈",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle,
    PulseEnded(u64),
}

/// Per-field visibility state. Starts masked.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    revealed: bool,
    pulse: Pulse,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the password is shown in clear text.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        if self.revealed {
            Icon::EyeSlash
        } else {
            Icon::Eye
        }
    }

    #[must_use]
    pub fn is_pulsing(&self) -> bool {
        self.pulse.is_active()
    }

    pub fn update(&mut self, message: Message, pulse: Duration) -> Option<Deferred<Message>> {
        match message {
            Message::Toggle => {
                self.revealed = !self.revealed;
                let generation = self.pulse.trigger();
                Some(Deferred::new(pulse, Message::PulseEnded(generation)))
            }
            Message::PulseEnded(generation) => {
                self.pulse.settle(generation);
                None
            }
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    let size = if state.is_pulsing() {
        typography::BODY_LG * PULSE_SCALE
    } else {
        typography::BODY_LG
    };

    button(Text::new(state.icon().glyph()).size(size))
        .padding(spacing::XXS)
        .on_press(Message::Toggle)
        .style(styles::button::icon)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PULSE: Duration = Duration::from_millis(200);

    #[test]
    fn starts_masked_with_eye_icon() {
        let state = State::new();
        assert!(!state.is_revealed());
        assert_eq!(state.icon(), Icon::Eye);
    }

    #[test]
    fn toggle_flips_masking_and_icon() {
        let mut state = State::new();
        state.update(Message::Toggle, PULSE);
        assert!(state.is_revealed());
        assert_eq!(state.icon(), Icon::EyeSlash);

        state.update(Message::Toggle, PULSE);
        assert!(!state.is_revealed());
        assert_eq!(state.icon(), Icon::Eye);
    }

    #[test]
    fn toggle_pulses_for_the_configured_duration() {
        let mut state = State::new();
        let deferred = state
            .update(Message::Toggle, PULSE)
            .expect("toggle schedules the end of its pulse");

        assert_eq!(deferred.delay(), PULSE);
        assert!(state.is_pulsing());
        state.update(deferred.into_message(), PULSE);
        assert!(!state.is_pulsing());
    }

    #[test]
    fn independent_fields_do_not_share_state() {
        let mut first = State::new();
        let second = State::new();
        first.update(Message::Toggle, PULSE);
        assert!(first.is_revealed());
        assert!(!second.is_revealed());
    }
}
