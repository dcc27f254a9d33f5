// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Delay Bounds
// =============================================================================

/// Bounds for configurable UI delays, in milliseconds.
pub mod delay_bounds {
    /// Minimum delay (fires on the next loop iteration).
    pub const MIN_MS: u64 = 0;
    /// Maximum delay (one minute).
    pub const MAX_MS: u64 = 60_000;
}

// =============================================================================
// DelayMs
// =============================================================================

/// A UI delay in milliseconds, guaranteed to be within 0–60 000 ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DelayMs(u64);

impl DelayMs {
    /// Creates a new delay, clamping the value to the valid range.
    #[must_use]
    pub fn new(ms: u64) -> Self {
        Self(ms.clamp(delay_bounds::MIN_MS, delay_bounds::MAX_MS))
    }

    /// Returns the raw millisecond value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the delay as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

// =============================================================================
// Particle Count Bounds
// =============================================================================

/// Bounds for the number of decorative particles.
pub mod particle_bounds {
    /// No particles at all.
    pub const MIN: u32 = 0;
    /// Upper limit, keeps the canvas cheap to redraw every frame.
    pub const MAX: u32 = 500;
    /// Default particle count.
    pub const DEFAULT: u32 = 50;
}

// =============================================================================
// ParticleCount
// =============================================================================

/// Number of decorative particles, guaranteed to be within 0–500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleCount(u32);

impl ParticleCount {
    /// Creates a new particle count, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(particle_bounds::MIN, particle_bounds::MAX))
    }

    /// Returns the raw count.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for ParticleCount {
    fn default() -> Self {
        Self(particle_bounds::DEFAULT)
    }
}
