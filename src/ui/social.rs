// SPDX-License-Identifier: MPL-2.0
//! Row of round social login buttons.
//!
//! None of the providers is wired to anything; a click only announces that
//! the integration is coming and pulses the button.

use crate::domain::social::Provider;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::schedule::Deferred;
use crate::ui::state::Pulse;
use crate::ui::styles;
use iced::widget::{button, Row, Text};
use iced::{Element, Length};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Clicked(Provider),
    PulseEnded(Provider, u64),
}

/// Events propagated to the parent.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Show `message` as an info notification and schedule the end of the
    /// button pulse.
    ComingSoon {
        message: String,
        settle: Deferred<Message>,
    },
}

/// One pulse per provider button.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    pulses: [Pulse; Provider::ALL.len()],
}

fn slot(provider: Provider) -> usize {
    match provider {
        Provider::Google => 0,
        Provider::Facebook => 1,
        Provider::GitHub => 2,
        Provider::LinkedIn => 3,
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_pulsing(&self, provider: Provider) -> bool {
        self.pulses[slot(provider)].is_active()
    }

    pub fn update(&mut self, message: Message, pulse: Duration) -> Event {
        match message {
            Message::Clicked(provider) => {
                let generation = self.pulses[slot(provider)].trigger();
                Event::ComingSoon {
                    message: provider.coming_soon_message(),
                    settle: Deferred::new(pulse, Message::PulseEnded(provider, generation)),
                }
            }
            Message::PulseEnded(provider, generation) => {
                self.pulses[slot(provider)].settle(generation);
                Event::None
            }
        }
    }
}

pub fn view(state: &State) -> Element<'_, Message> {
    Provider::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::SM), |row, provider| {
            let glyph = Text::new(provider.glyph())
                .size(typography::BODY)
                .center()
                .width(Length::Fill);

            row.push(
                button(glyph)
                    .width(Length::Fixed(sizing::SOCIAL_BUTTON))
                    .height(Length::Fixed(sizing::SOCIAL_BUTTON))
                    .padding(0)
                    .on_press(Message::Clicked(provider))
                    .style(styles::button::social(state.is_pulsing(provider))),
            )
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PULSE: Duration = Duration::from_millis(500);

    #[test]
    fn click_announces_provider_and_pulses() {
        let mut state = State::new();
        let event = state.update(Message::Clicked(Provider::GitHub), PULSE);

        let Event::ComingSoon { message, settle } = event else {
            panic!("expected a coming-soon event");
        };
        assert_eq!(message, "GitHub login coming soon! 🚀");
        assert_eq!(settle.delay(), PULSE);
        assert!(state.is_pulsing(Provider::GitHub));
        assert!(!state.is_pulsing(Provider::Google));

        state.update(settle.into_message(), PULSE);
        assert!(!state.is_pulsing(Provider::GitHub));
    }

    #[test]
    fn every_provider_has_its_own_slot() {
        let mut slots: Vec<usize> = Provider::ALL.into_iter().map(slot).collect();
        slots.sort_unstable();
        slots.dedup();
        assert_eq!(slots.len(), Provider::ALL.len());
    }

    #[test]
    fn double_click_keeps_the_newest_pulse() {
        let mut state = State::new();
        let Event::ComingSoon { settle: first, .. } =
            state.update(Message::Clicked(Provider::Google), PULSE)
        else {
            panic!("expected a coming-soon event");
        };
        state.update(Message::Clicked(Provider::Google), PULSE);

        state.update(first.into_message(), PULSE);
        assert!(state.is_pulsing(Provider::Google));
    }
}
