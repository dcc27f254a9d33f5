// SPDX-License-Identifier: MPL-2.0
//! End-to-end submission lifecycle driven through the simulator commands.

use brandly_login::domain::form::{FormData, FormKind, SignInData, SignUpData};
use brandly_login::domain::notification::Kind;
use brandly_login::submission::{Command, Outcome, Phase, Simulator, SubmissionGuard, Timer};
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(2000);
const COOLDOWN: Duration = Duration::from_millis(3000);

fn sign_up() -> FormData {
    FormData::SignUp(SignUpData {
        name: "Alice".into(),
        email: "alice@example.com".into(),
        password: "secret1".into(),
    })
}

fn sign_in() -> FormData {
    FormData::SignIn(SignInData {
        email: "alice@example.com".into(),
        password: "x".into(),
    })
}

/// Scheduled timers ordered by when they fire.
fn timers(commands: &[Command]) -> Vec<(Duration, Timer)> {
    let mut timers: Vec<_> = commands
        .iter()
        .filter_map(|command| match command {
            Command::Schedule(deferred) => Some((deferred.delay(), *deferred.message())),
            _ => None,
        })
        .collect();
    timers.sort_by_key(|(delay, _)| *delay);
    timers
}

#[test]
fn full_lifecycle_releases_guard_after_cooldown() {
    let mut simulator = Simulator::new(DELAY, COOLDOWN);
    let mut guard = SubmissionGuard::new();

    let (outcome, commands) = simulator.submit(&mut guard, &sign_up());
    assert!(matches!(outcome, Outcome::Started(_)));
    assert!(matches!(commands[0], Command::ShowLoading));
    assert!(guard.is_armed());

    let scheduled = timers(&commands);
    assert_eq!(scheduled.len(), 2);
    assert_eq!(scheduled[0].0, DELAY);
    assert_eq!(scheduled[1].0, COOLDOWN);

    // Completion fires first: loading hides, success shows, form clears
    let done = simulator.handle_timer(&mut guard, scheduled[0].1);
    assert!(matches!(done[0], Command::HideLoading));
    assert!(done.iter().any(|command| matches!(
        command,
        Command::Notify { kind: Kind::Success, .. }
    )));
    assert!(done
        .iter()
        .any(|command| matches!(command, Command::ClearForm(FormKind::SignUp))));
    assert_eq!(simulator.phase(FormKind::SignUp), Phase::Idle);

    // Still cooling down: the other form is dropped without feedback
    let (outcome, commands) = simulator.submit(&mut guard, &sign_in());
    assert_eq!(outcome, Outcome::Suppressed);
    assert!(commands.is_empty());

    simulator.handle_timer(&mut guard, scheduled[1].1);
    assert!(!guard.is_armed());

    let (outcome, _) = simulator.submit(&mut guard, &sign_in());
    assert!(matches!(outcome, Outcome::Started(_)));
}

#[test]
fn invalid_payload_never_arms_guard() {
    let mut simulator = Simulator::new(DELAY, COOLDOWN);
    let mut guard = SubmissionGuard::new();
    let bad = FormData::SignIn(SignInData {
        email: "nope".into(),
        password: String::new(),
    });

    let (outcome, commands) = simulator.submit(&mut guard, &bad);

    assert!(matches!(outcome, Outcome::Rejected(_)));
    assert!(!guard.is_armed());
    assert!(matches!(
        commands.as_slice(),
        [Command::Notify { kind: Kind::Error, message }]
            if message == "Please enter a valid email address"
    ));
}
