// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] of mutable references into the
//! application state, apply component events and turn every deferred message
//! into an Iced task.

use super::Message;
use crate::config::Timings;
use crate::domain::form::{FormData, FormKind};
use crate::domain::notification::Kind;
use crate::submission::{Command, Outcome, Simulator, SubmissionGuard, Timer};
use crate::ui::forms::{self, Form};
use crate::ui::loading;
use crate::ui::notifications::{self, Notification};
use crate::ui::ripple;
use crate::ui::view_toggle;
use iced::{Point, Task};
use std::time::Instant;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub sign_up: &'a mut Form,
    pub sign_in: &'a mut Form,
    pub view_toggle: &'a mut view_toggle::State,
    pub simulator: &'a mut Simulator,
    pub guard: &'a mut SubmissionGuard,
    pub notifications: &'a mut notifications::Manager,
    pub loading: &'a mut loading::State,
    pub ripples: &'a mut ripple::State,
    pub timings: &'a Timings,
    pub now: Instant,
}

impl UpdateContext<'_> {
    fn form_mut(&mut self, kind: FormKind) -> &mut Form {
        match kind {
            FormKind::SignUp => &mut *self.sign_up,
            FormKind::SignIn => &mut *self.sign_in,
        }
    }
}

/// Shows `notification` and schedules its exit.
pub fn notify(ctx: &mut UpdateContext<'_>, notification: Notification) -> Task<Message> {
    ctx.notifications
        .push(notification)
        .map(Message::Notification)
        .into_task()
}

pub fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    kind: FormKind,
    message: forms::Message,
) -> Task<Message> {
    let timings = *ctx.timings;
    match ctx.form_mut(kind).update(message, &timings) {
        forms::Event::None => Task::none(),
        forms::Event::Schedule(deferred) => deferred
            .map(move |message| Message::Form(kind, message))
            .into_task(),
        forms::Event::Notify {
            kind: notification_kind,
            message,
            settle,
        } => Task::batch([
            notify(ctx, Notification::new(notification_kind, message)),
            settle
                .map(move |message| Message::Form(kind, message))
                .into_task(),
        ]),
        forms::Event::Submitted(data) => handle_submission(ctx, &data),
    }
}

/// Runs a form payload through the simulator.
pub fn handle_submission(ctx: &mut UpdateContext<'_>, data: &FormData) -> Task<Message> {
    let (outcome, commands) = ctx.simulator.submit(ctx.guard, data);
    if let Outcome::Started(ticket) = outcome {
        log::info!("submitting {:?} form ({ticket})", data.kind());
    }
    apply_commands(ctx, commands)
}

pub fn handle_submission_timer(ctx: &mut UpdateContext<'_>, timer: Timer) -> Task<Message> {
    let commands = ctx.simulator.handle_timer(ctx.guard, timer);
    apply_commands(ctx, commands)
}

/// Applies simulator commands in order.
pub fn apply_commands(ctx: &mut UpdateContext<'_>, commands: Vec<Command>) -> Task<Message> {
    let mut tasks = Vec::new();

    for command in commands {
        match command {
            Command::Notify { kind, message } => {
                tasks.push(notify(ctx, Notification::new(kind, message)));
            }
            Command::ShowLoading => ctx.loading.show(ctx.now),
            Command::HideLoading => {
                ctx.loading.hide();
            }
            Command::ClearForm(kind) => ctx.form_mut(kind).clear(),
            Command::Schedule(deferred) => {
                tasks.push(deferred.map(Message::Submission).into_task());
            }
        }
    }

    Task::batch(tasks)
}

pub fn handle_view_toggle_message(
    ctx: &mut UpdateContext<'_>,
    message: view_toggle::Message,
) -> Task<Message> {
    match ctx.view_toggle.update(message, ctx.timings.toggle_press) {
        view_toggle::Event::None => Task::none(),
        view_toggle::Event::Schedule(deferred) => deferred.map(Message::ViewToggle).into_task(),
    }
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &notifications::NotificationMessage,
) -> Task<Message> {
    match ctx.notifications.handle_message(message) {
        Some(deferred) => deferred.map(Message::Notification).into_task(),
        None => Task::none(),
    }
}

/// Escape hides the loading overlay. The submission itself keeps running.
pub fn handle_escape(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.loading.hide() {
        log::debug!("loading overlay dismissed");
    }
    Task::none()
}

/// Drops a ripple at `cursor`.
pub fn spawn_ripple(ctx: &mut UpdateContext<'_>, cursor: Point) -> Task<Message> {
    ctx.ripples
        .spawn(cursor, ctx.now)
        .map(Message::Ripple)
        .into_task()
}

/// Shows the configuration fallback warning, if any.
pub fn startup_notification(
    ctx: &mut UpdateContext<'_>,
    warning: Option<String>,
) -> Task<Message> {
    match warning {
        Some(message) => notify(ctx, Notification::new(Kind::Error, message)),
        None => Task::none(),
    }
}
