// SPDX-License-Identifier: MPL-2.0
//! Full-window loading indicator shown while a submission is in flight.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};
use std::time::{Duration, Instant};

/// Whether the overlay is up, and since when.
#[derive(Debug, Clone, Copy, Default)]
pub struct State {
    shown_at: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the overlay. Showing it again restarts the spinner.
    pub fn show(&mut self, now: Instant) {
        self.shown_at = Some(now);
    }

    /// Hides the overlay; returns whether it was visible.
    pub fn hide(&mut self) -> bool {
        self.shown_at.take().is_some()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.shown_at.is_some()
    }

    /// Time the overlay has been up at `now`, or `None` when hidden.
    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.shown_at
            .map(|shown_at| now.saturating_duration_since(shown_at))
    }

    /// Renders the overlay at `now`, or nothing when hidden.
    pub fn view<'a, M: 'a>(&self, now: Instant) -> Option<Element<'a, M>> {
        let spinner = AnimatedSpinner::new(palette::WHITE).after(self.elapsed(now)?);

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(spinner.into_element())
            .push(
                Text::new("Processing...")
                    .size(typography::BODY)
                    .color(palette::WHITE),
            );

        Some(
            Container::new(content)
                .center(Length::Fill)
                .style(styles::container::loading_backdrop)
                .into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!State::new().is_active());
    }

    #[test]
    fn show_then_hide() {
        let mut state = State::new();
        state.show(Instant::now());
        assert!(state.is_active());
        assert!(state.hide());
        assert!(!state.is_active());
    }

    #[test]
    fn hiding_twice_reports_nothing_to_hide() {
        let mut state = State::new();
        state.show(Instant::now());
        state.hide();
        assert!(!state.hide());
    }

    #[test]
    fn elapsed_counts_from_show() {
        let mut state = State::new();
        let shown = Instant::now();
        assert_eq!(state.elapsed(shown), None);

        state.show(shown);
        assert_eq!(
            state.elapsed(shown + Duration::from_millis(250)),
            Some(Duration::from_millis(250))
        );
    }
}
