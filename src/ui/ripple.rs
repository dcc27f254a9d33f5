// SPDX-License-Identifier: MPL-2.0
//! Click ripples.
//!
//! Every button press drops a ripple at the pointer. A ripple grows from
//! nothing to twice [`sizing::RIPPLE_DIAMETER`] while fading out, and is
//! removed when its lifetime is over.

use crate::ui::design_tokens::{opacity, palette, sizing};
use crate::ui::schedule::Deferred;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RippleId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Expire(RippleId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    id: RippleId,
    center: Point,
    spawned_at: Instant,
}

impl Ripple {
    #[must_use]
    pub fn id(&self) -> RippleId {
        self.id
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Fraction of the lifetime elapsed at `now`, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant, lifetime: Duration) -> f32 {
        if lifetime.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.spawned_at).as_secs_f32();
        (elapsed / lifetime.as_secs_f32()).clamp(0.0, 1.0)
    }
}

/// Live ripples.
#[derive(Debug, Clone)]
pub struct State {
    ripples: Vec<Ripple>,
    next_id: u64,
    lifetime: Duration,
}

impl State {
    #[must_use]
    pub fn new(lifetime: Duration) -> Self {
        Self {
            ripples: Vec::new(),
            next_id: 0,
            lifetime,
        }
    }

    /// Adds a ripple at `center`; the returned message removes it.
    pub fn spawn(&mut self, center: Point, now: Instant) -> Deferred<Message> {
        let id = RippleId(self.next_id);
        self.next_id += 1;
        self.ripples.push(Ripple {
            id,
            center,
            spawned_at: now,
        });
        Deferred::new(self.lifetime, Message::Expire(id))
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Expire(id) => self.ripples.retain(|ripple| ripple.id != id),
        }
    }

    #[must_use]
    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    /// Full-window canvas with every live ripple at `now`.
    pub fn view<'a, M: 'a>(&'a self, now: Instant) -> Element<'a, M> {
        Canvas::new(Layer {
            ripples: &self.ripples,
            lifetime: self.lifetime,
            now,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

struct Layer<'a> {
    ripples: &'a [Ripple],
    lifetime: Duration,
    now: Instant,
}

impl<Message> canvas::Program<Message> for Layer<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for ripple in self.ripples {
            let progress = ripple.progress(self.now, self.lifetime);
            // Window coordinates to canvas coordinates
            let center = Point::new(ripple.center.x - bounds.x, ripple.center.y - bounds.y);
            frame.fill(
                &Path::circle(center, progress * sizing::RIPPLE_DIAMETER),
                Color {
                    a: opacity::RIPPLE * (1.0 - progress),
                    ..palette::WHITE
                },
            );
        }

        vec![frame.into_geometry()]
    }
}
