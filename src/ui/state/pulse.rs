// SPDX-License-Identifier: MPL-2.0
//! Short-lived visual affordances ("pressed", "pulse", "bump").
//!
//! A [`Pulse`] is switched on by [`Pulse::trigger`], which hands out a
//! generation number. The matching [`Pulse::settle`] call switches it off;
//! a settle carrying an older generation is ignored, so re-triggering while a
//! pulse is active simply extends it.

/// Generation-tagged on/off flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pulse {
    generation: u64,
    active: bool,
}

impl Pulse {
    /// Creates an inactive pulse.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates the pulse and returns the generation that will end it.
    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.active = true;
        self.generation
    }

    /// Ends the pulse if `generation` is the latest one.
    ///
    /// Returns `true` if the pulse was switched off.
    pub fn settle(&mut self, generation: u64) -> bool {
        if self.active && self.generation == generation {
            self.active = false;
            true
        } else {
            false
        }
    }

    /// Returns whether the pulse is currently active.
    #[must_use]
    pub fn is_active(self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pulse_is_inactive() {
        assert!(!Pulse::new().is_active());
    }

    #[test]
    fn settle_with_current_generation_ends_pulse() {
        let mut pulse = Pulse::new();
        let generation = pulse.trigger();
        assert!(pulse.is_active());

        assert!(pulse.settle(generation));
        assert!(!pulse.is_active());
    }

    #[test]
    fn stale_settle_is_ignored() {
        let mut pulse = Pulse::new();
        let first = pulse.trigger();
        let second = pulse.trigger();

        assert!(!pulse.settle(first));
        assert!(pulse.is_active());
        assert!(pulse.settle(second));
    }

    #[test]
    fn settle_twice_is_a_no_op() {
        let mut pulse = Pulse::new();
        let generation = pulse.trigger();
        pulse.settle(generation);

        assert!(!pulse.settle(generation));
    }
}
