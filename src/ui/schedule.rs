// SPDX-License-Identifier: MPL-2.0
//! Delayed messages with cancellation.
//!
//! Components never start timers themselves. Their `update` functions return
//! [`Deferred`] values: "deliver this message after that delay, unless the
//! token gets cancelled first". The application turns them into Iced tasks
//! with [`Deferred::into_task`]; tests inspect them directly, or await
//! [`Deferred::wait`] on a paused tokio clock.
//!
//! Cancelling is an optimisation only: every receiver also checks that the
//! message still refers to something alive, so a late message is a no-op.

use iced::Task;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// A message to deliver after a delay.
#[derive(Debug, Clone)]
pub struct Deferred<M> {
    delay: Duration,
    message: M,
    token: CancellationToken,
}

impl<M> Deferred<M> {
    /// Creates a deferred message with its own cancellation token.
    pub fn new(delay: Duration, message: M) -> Self {
        Self {
            delay,
            message,
            token: CancellationToken::new(),
        }
    }

    /// Replaces the cancellation token, so several deferred messages can be
    /// cancelled together.
    #[must_use]
    pub fn with_token(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    /// Returns the delay before delivery.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns the message that will be delivered.
    #[must_use]
    pub fn message(&self) -> &M {
        &self.message
    }

    /// Returns the token that cancels delivery.
    #[must_use]
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Returns whether delivery was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Consumes the deferred value and returns its message right away.
    pub fn into_message(self) -> M {
        self.message
    }

    /// Wraps the message, keeping delay and token.
    pub fn map<N>(self, f: impl FnOnce(M) -> N) -> Deferred<N> {
        Deferred {
            delay: self.delay,
            message: f(self.message),
            token: self.token,
        }
    }

    /// Sleeps for the delay and yields the message, or `None` when the token
    /// is cancelled first.
    pub async fn wait(self) -> Option<M> {
        tokio::select! {
            biased;
            () = self.token.cancelled() => None,
            () = tokio::time::sleep(self.delay) => Some(self.message),
        }
    }
}

impl<M> Deferred<M>
where
    M: Send + 'static,
{
    /// Turns the deferred message into an Iced task. A cancelled task
    /// completes without producing a message.
    pub fn into_task(self) -> Task<M> {
        Task::perform(self.wait(), |fired| fired).and_then(Task::done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_keeps_delay_and_token() {
        let deferred = Deferred::new(Duration::from_millis(200), 1_u8);
        let token = deferred.token().clone();
        let mapped = deferred.map(|n| u32::from(n) + 1);

        assert_eq!(mapped.delay(), Duration::from_millis(200));
        assert_eq!(*mapped.message(), 2);
        token.cancel();
        assert!(mapped.is_cancelled());
    }

    #[test]
    fn shared_token_cancels_all() {
        let token = CancellationToken::new();
        let first = Deferred::new(Duration::from_secs(1), "a").with_token(token.clone());
        let second = Deferred::new(Duration::from_secs(2), "b").with_token(token.clone());

        token.cancel();
        assert!(first.is_cancelled());
        assert!(second.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn wait_delivers_after_delay() {
        let start = tokio::time::Instant::now();
        let fired = Deferred::new(Duration::from_millis(2000), "done").wait().await;

        assert_eq!(fired, Some("done"));
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_yields_nothing_once_cancelled() {
        let deferred = Deferred::new(Duration::from_millis(3000), "late");
        deferred.token().cancel();

        assert_eq!(deferred.wait().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_while_waiting_stops_delivery() {
        let deferred = Deferred::new(Duration::from_millis(3000), "late");
        let token = deferred.token().clone();
        let waiting = tokio::spawn(deferred.wait());

        tokio::time::sleep(Duration::from_millis(1000)).await;
        token.cancel();

        assert_eq!(waiting.await.ok().flatten(), None);
    }
}
