// SPDX-License-Identifier: MPL-2.0
//! Simulated form submission.
//!
//! [`Simulator::submit`] validates a payload and, when it is acceptable,
//! "sends" it by scheduling a completion timer. Nothing here touches the UI:
//! every effect is returned as a [`Command`] that the application applies.
//!
//! A [`SubmissionGuard`] owned by the application root prevents a second
//! submission from starting while a previous one is cooling down. It is armed
//! with the [`Ticket`] of the submission that started and only the cooldown
//! timer carrying that same ticket releases it.

use crate::domain::form::{FormData, FormKind};
use crate::domain::notification::Kind;
use crate::ui::schedule::Deferred;
use crate::validation::{self, ValidationError};
use std::fmt;
use std::time::Duration;

/// Identifies one started submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Observable state of one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting {
        ticket: Ticket,
    },
}

/// Blocks new submissions until the cooldown of the arming one has elapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmissionGuard {
    armed_by: Option<Ticket>,
}

impl SubmissionGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed_by.is_some()
    }

    fn arm(&mut self, ticket: Ticket) {
        self.armed_by = Some(ticket);
    }

    /// Releases the guard if `ticket` is the one that armed it.
    fn release(&mut self, ticket: Ticket) -> bool {
        if self.armed_by == Some(ticket) {
            self.armed_by = None;
            true
        } else {
            false
        }
    }
}

/// Timer messages produced by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// The simulated request of `form` finished.
    Completed { form: FormKind, ticket: Ticket },
    /// The double-submit window of `ticket` is over.
    CooldownElapsed { ticket: Ticket },
}

/// Effects the application must apply.
#[derive(Debug, Clone)]
pub enum Command {
    Notify { kind: Kind, message: String },
    ShowLoading,
    HideLoading,
    ClearForm(FormKind),
    Schedule(Deferred<Timer>),
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The payload failed validation; an error notification was requested.
    Rejected(ValidationError),
    /// Another submission is still cooling down; nothing happens.
    Suppressed,
    /// The submission was accepted and is now in flight.
    Started(Ticket),
}

/// Drives both forms through `Idle -> Submitting -> Idle`.
#[derive(Debug, Clone)]
pub struct Simulator {
    sign_up: Phase,
    sign_in: Phase,
    next_ticket: u64,
    submit_delay: Duration,
    cooldown: Duration,
}

impl Simulator {
    #[must_use]
    pub fn new(submit_delay: Duration, cooldown: Duration) -> Self {
        Self {
            sign_up: Phase::Idle,
            sign_in: Phase::Idle,
            next_ticket: 0,
            submit_delay,
            cooldown,
        }
    }

    /// Returns the phase of `form`.
    #[must_use]
    pub fn phase(&self, form: FormKind) -> Phase {
        match form {
            FormKind::SignUp => self.sign_up,
            FormKind::SignIn => self.sign_in,
        }
    }

    fn phase_mut(&mut self, form: FormKind) -> &mut Phase {
        match form {
            FormKind::SignUp => &mut self.sign_up,
            FormKind::SignIn => &mut self.sign_in,
        }
    }

    /// Validates `data` and starts a simulated submission if allowed.
    pub fn submit(
        &mut self,
        guard: &mut SubmissionGuard,
        data: &FormData,
    ) -> (Outcome, Vec<Command>) {
        let form = data.kind();

        if let Err(err) = validation::validate(data) {
            log::debug!("{form:?} form rejected: {err}");
            let notify = Command::Notify {
                kind: Kind::Error,
                message: err.to_string(),
            };
            return (Outcome::Rejected(err), vec![notify]);
        }

        if guard.is_armed() {
            log::debug!("{form:?} submission dropped, previous one still cooling down");
            return (Outcome::Suppressed, Vec::new());
        }

        let ticket = Ticket(self.next_ticket);
        self.next_ticket += 1;
        guard.arm(ticket);
        *self.phase_mut(form) = Phase::Submitting { ticket };
        log::debug!("{form:?} submission {ticket} started");

        let commands = vec![
            Command::ShowLoading,
            Command::Schedule(Deferred::new(
                self.submit_delay,
                Timer::Completed { form, ticket },
            )),
            Command::Schedule(Deferred::new(
                self.cooldown,
                Timer::CooldownElapsed { ticket },
            )),
        ];

        (Outcome::Started(ticket), commands)
    }

    /// Applies a fired timer. Timers for unknown tickets are no-ops.
    pub fn handle_timer(&mut self, guard: &mut SubmissionGuard, timer: Timer) -> Vec<Command> {
        match timer {
            Timer::Completed { form, ticket } => {
                if self.phase(form) != (Phase::Submitting { ticket }) {
                    log::debug!("ignoring stale completion of submission {ticket}");
                    return Vec::new();
                }

                *self.phase_mut(form) = Phase::Idle;
                log::info!("{form:?} submission {ticket} completed");

                vec![
                    Command::HideLoading,
                    Command::Notify {
                        kind: Kind::Success,
                        message: form.success_message().to_string(),
                    },
                    Command::ClearForm(form),
                ]
            }
            Timer::CooldownElapsed { ticket } => {
                if !guard.release(ticket) {
                    log::debug!("ignoring stale cooldown of submission {ticket}");
                }
                Vec::new()
            }
        }
    }
}

impl Default for Simulator {
    fn default() -> Self {
        use crate::config::defaults::{DEFAULT_SUBMIT_COOLDOWN_MS, DEFAULT_SUBMIT_DELAY_MS};

        Self::new(
            Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            Duration::from_millis(DEFAULT_SUBMIT_COOLDOWN_MS),
        )
    }
}
