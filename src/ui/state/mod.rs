// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains UI state logic shared by several components,
//! kept apart from the components that render it.

pub mod pulse;

pub use pulse::Pulse;
