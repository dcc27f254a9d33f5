// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Submission**: Simulated latency and the double-submit cooldown
//! - **Notification**: Display and exit animation durations
//! - **Affordances**: Pressed / pulse / ripple durations
//! - **Decoration**: Particle count

// ==========================================================================
// Submission Defaults
// ==========================================================================

/// Simulated "network" latency of a form submission (ms).
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;

/// Window during which a second submission is silently dropped (ms).
pub const DEFAULT_SUBMIT_COOLDOWN_MS: u64 = 3000;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// How long a notification stays fully visible (ms).
pub const DEFAULT_NOTIFICATION_DISPLAY_MS: u64 = 3000;

/// Duration of the exit animation before removal (ms).
pub const DEFAULT_NOTIFICATION_EXIT_MS: u64 = 500;

// ==========================================================================
// Affordance Defaults
// ==========================================================================

/// "Pressed" state of the overlay toggle buttons (ms).
pub const DEFAULT_TOGGLE_PRESS_MS: u64 = 600;

/// Scale pulse of the password visibility button (ms).
pub const DEFAULT_PASSWORD_PULSE_MS: u64 = 200;

/// Icon bump while typing in a field (ms).
pub const DEFAULT_INPUT_PULSE_MS: u64 = 200;

/// Pulse of a social login button (ms).
pub const DEFAULT_SOCIAL_PULSE_MS: u64 = 500;

/// Lifetime of a click ripple (ms).
pub const DEFAULT_RIPPLE_MS: u64 = 600;

// ==========================================================================
// Decoration Defaults
// ==========================================================================

pub use crate::domain::ui::newtypes::particle_bounds::DEFAULT as DEFAULT_PARTICLE_COUNT;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // The guard must outlive the simulated request, otherwise a second
    // submission could start while the first one is still loading.
    assert!(DEFAULT_SUBMIT_COOLDOWN_MS > DEFAULT_SUBMIT_DELAY_MS);
    assert!(DEFAULT_NOTIFICATION_EXIT_MS < DEFAULT_NOTIFICATION_DISPLAY_MS);
};
