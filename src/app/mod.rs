// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the components.
//!
//! The `App` struct owns every component plus the submission guard, and
//! translates messages into component updates. Deferred messages returned by
//! components become Iced tasks here; nothing below this module starts a
//! timer on its own.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, Timings};
use crate::domain::form::FormKind;
use crate::submission::{Simulator, SubmissionGuard};
use crate::ui::forms::Form;
use crate::ui::loading;
use crate::ui::notifications;
use crate::ui::particles::Particles;
use crate::ui::ripple;
use crate::ui::view_toggle;
use iced::{window, Element, Point, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    sign_up: Form,
    sign_in: Form,
    view_toggle: view_toggle::State,
    simulator: Simulator,
    /// Blocks double submissions; released by the simulator's cooldown timer.
    guard: SubmissionGuard,
    notifications: notifications::Manager,
    loading: loading::State,
    particles: Particles,
    ripples: ripple::State,
    timings: Timings,
    theme: Theme,
    /// Last known pointer position, where click ripples appear.
    cursor: Point,
    /// Time of the latest animation frame.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("side", &self.view_toggle.side())
            .field("guard", &self.guard)
            .field("loading", &self.loading.is_active())
            .finish()
    }
}

/// Lines logged once at startup.
pub const STARTUP_BANNER: [&str; 3] = [
    "🚀 BRANDLY Login System",
    "Welcome to our amazing login experience!",
    "Built with ❤️ and lots of animations",
];

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_override(flags.config_dir);
    let (config, config_warning) = config::load();

    // iced 0.14 requires a Fn boot function, so the loaded config is cloned
    let boot = move || App::new(config.clone(), config_warning.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the initial state from a loaded configuration. A configuration
    /// warning is shown as an error notification.
    fn new(config: Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        let timings = config.timings();
        let now = Instant::now();

        let mut app = App {
            sign_up: Form::new(FormKind::SignUp),
            sign_in: Form::new(FormKind::SignIn),
            view_toggle: view_toggle::State::new(),
            simulator: Simulator::new(timings.submit_delay, timings.submit_cooldown),
            guard: SubmissionGuard::new(),
            notifications: notifications::Manager::new(
                timings.notification_display,
                timings.notification_exit,
            ),
            loading: loading::State::new(),
            particles: Particles::new(
                config.particle_count(),
                config.decoration.particle_seed,
                now,
            ),
            ripples: ripple::State::new(timings.ripple),
            timings,
            theme: config.general.theme_mode.iced_theme(),
            cursor: Point::ORIGIN,
            now,
        };

        let task = {
            let mut ctx = app.update_context();
            update::startup_notification(&mut ctx, config_warning)
        };

        (app, task)
    }

    fn title(&self) -> String {
        match view::visible_form(self.view_toggle.side()) {
            FormKind::SignIn => String::from("Brandly - Sign In"),
            FormKind::SignUp => String::from("Brandly - Create Account"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Whether anything on screen changes without user input.
    fn is_animating(&self) -> bool {
        !self.particles.is_empty()
            || self.loading.is_active()
            || !self.ripples.is_empty()
            || self.notifications.is_animating()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.is_animating());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            sign_up: &mut self.sign_up,
            sign_in: &mut self.sign_in,
            view_toggle: &mut self.view_toggle,
            simulator: &mut self.simulator,
            guard: &mut self.guard,
            notifications: &mut self.notifications,
            loading: &mut self.loading,
            ripples: &mut self.ripples,
            timings: &self.timings,
            now: self.now,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        // No tick runs while the screen is still, so `now` may be stale
        if !matches!(message, Message::Tick(_)) {
            self.now = Instant::now();
        }

        let cursor = self.cursor;
        let is_click = message.is_click();
        let mut ctx = self.update_context();

        let ripple = if is_click {
            update::spawn_ripple(&mut ctx, cursor)
        } else {
            Task::none()
        };

        let task = match message {
            Message::Form(kind, form_message) => {
                update::handle_form_message(&mut ctx, kind, form_message)
            }
            Message::ViewToggle(toggle_message) => {
                update::handle_view_toggle_message(&mut ctx, toggle_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::Submission(timer) => update::handle_submission_timer(&mut ctx, timer),
            Message::Ripple(ripple_message) => {
                ctx.ripples.update(ripple_message);
                Task::none()
            }
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::CursorMoved(position) => {
                self.cursor = position;
                Task::none()
            }
            Message::Tick(instant) => {
                self.now = instant;
                Task::none()
            }
        };

        Task::batch([ripple, task])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            sign_up: &self.sign_up,
            sign_in: &self.sign_in,
            view_toggle: &self.view_toggle,
            notifications: &self.notifications,
            loading: &self.loading,
            particles: &self.particles,
            ripples: &self.ripples,
            now: self.now,
        })
    }
}
