// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! This module contains pure domain types and value objects. It has no
//! dependencies on external crates (except `std`) so the validation and
//! submission logic built on top of it stays testable without a UI.
//!
//! # Modules
//!
//! - [`form`]: Form payloads ([`SignUpData`](form::SignUpData),
//!   [`SignInData`](form::SignInData), [`FormData`](form::FormData))
//! - [`notification`]: Notification kinds ([`Kind`](notification::Kind))
//! - [`social`]: Social login providers ([`Provider`](social::Provider))
//! - [`ui`]: UI value objects ([`Side`](ui::Side),
//!   [`DelayMs`](ui::newtypes::DelayMs), [`ParticleCount`](ui::newtypes::ParticleCount))

pub mod form;
pub mod notification;
pub mod social;
pub mod ui;
