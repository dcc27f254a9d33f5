// SPDX-License-Identifier: MPL-2.0
//! `brandly_login` is an animated sign-in / sign-up screen built with the Iced GUI framework.
//!
//! Nothing is ever sent anywhere: submissions are validated locally and then
//! simulated with a timer. The interesting parts are the UI-free core
//! ([`validation`], [`submission`]) and the small Elm-style components under
//! [`ui`] that render its state.

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod submission;
pub mod ui;
pub mod validation;
