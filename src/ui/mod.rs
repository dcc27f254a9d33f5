// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`forms`] - Sign-up and sign-in forms with their input micro-animations
//! - [`view_toggle`] - Gradient overlay switching between the two forms
//! - [`password_toggle`] - Show / hide button inside password fields
//! - [`social`] - Social login buttons
//! - [`loading`] - Full-window loading indicator
//! - [`notifications`] - Single-slot toast notifications
//! - [`particles`] - Rising background particles
//! - [`ripple`] - Click ripples
//!
//! # Shared Infrastructure
//!
//! - [`schedule`] - Delayed, cancellable messages
//! - [`state`] - Reusable state (generation-tagged pulses)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode and brand gradients

pub mod design_tokens;
pub mod forms;
pub mod loading;
pub mod notifications;
pub mod particles;
pub mod password_toggle;
pub mod ripple;
pub mod schedule;
pub mod social;
pub mod state;
pub mod styles;
pub mod theming;
pub mod view_toggle;
pub mod widgets;
