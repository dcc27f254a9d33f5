// SPDX-License-Identifier: MPL-2.0
//! Decorative particles rising behind the card.
//!
//! Particles are generated once at startup. Each one loops forever: after its
//! start delay it travels from just below the bottom edge to just above the
//! top edge in `duration`, fading in over the first tenth of the trip and out
//! over the last tenth. Everything is derived from the elapsed time, so the
//! layer keeps no per-frame state.

use crate::domain::ui::ParticleCount;
use crate::ui::design_tokens::palette;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::ops::Range;
use std::time::{Duration, Instant};

/// Diameter range in logical pixels.
pub const SIZE_RANGE: Range<f32> = 2.0..8.0;
/// Start delay range in seconds.
pub const DELAY_RANGE: Range<f32> = 0.0..15.0;
/// Cycle duration range in seconds.
pub const DURATION_RANGE: Range<f32> = 10.0..20.0;

/// Share of a cycle spent fading in, and again fading out.
const FADE_SHARE: f32 = 0.1;
/// Particles start and end this far outside the window.
const OFFSCREEN_MARGIN: f32 = 10.0;
const MAX_ALPHA: f32 = 0.5;

fn sample(rng: &mut fastrand::Rng, range: Range<f32>) -> f32 {
    range.start + rng.f32() * (range.end - range.start)
}

/// One particle's fixed, randomly drawn properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    size: f32,
    /// Horizontal position as a fraction of the window width.
    x: f32,
    delay: Duration,
    duration: Duration,
}

impl Particle {
    /// Draws a particle from `rng`.
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self {
            size: sample(rng, SIZE_RANGE),
            x: rng.f32(),
            delay: Duration::from_secs_f32(sample(rng, DELAY_RANGE)),
            duration: Duration::from_secs_f32(sample(rng, DURATION_RANGE)),
        }
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[must_use]
    pub fn x(&self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Position inside the current cycle, in `[0, 1)`, or `None` while the
    /// particle is still waiting for its first start.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> Option<f32> {
        let running = elapsed.checked_sub(self.delay)?;
        let cycle = self.duration.as_secs_f32();
        if cycle <= 0.0 {
            return None;
        }
        Some((running.as_secs_f32() % cycle) / cycle)
    }

    /// Opacity multiplier for a given progress.
    #[must_use]
    pub fn alpha(progress: f32) -> f32 {
        if progress < FADE_SHARE {
            progress / FADE_SHARE
        } else if progress > 1.0 - FADE_SHARE {
            (1.0 - progress) / FADE_SHARE
        } else {
            1.0
        }
    }

    /// Centre of the particle inside `bounds` for a given progress.
    #[must_use]
    pub fn position(&self, bounds: Rectangle, progress: f32) -> Point {
        let travel = bounds.height + 2.0 * OFFSCREEN_MARGIN;
        Point::new(
            self.x * bounds.width,
            bounds.height + OFFSCREEN_MARGIN - progress * travel,
        )
    }
}

/// The whole particle field.
#[derive(Debug, Clone)]
pub struct Particles {
    particles: Vec<Particle>,
    started_at: Instant,
}

impl Particles {
    /// Generates `count` particles. A fixed `seed` gives the same field on
    /// every run.
    #[must_use]
    pub fn new(count: ParticleCount, seed: Option<u64>, now: Instant) -> Self {
        let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        let particles = (0..count.value())
            .map(|_| Particle::random(&mut rng))
            .collect();

        Self {
            particles,
            started_at: now,
        }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Full-window canvas showing the field at `now`.
    pub fn view<'a, M: 'a>(&'a self, now: Instant) -> Element<'a, M> {
        Canvas::new(Layer {
            particles: &self.particles,
            elapsed: now.saturating_duration_since(self.started_at),
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

struct Layer<'a> {
    particles: &'a [Particle],
    elapsed: Duration,
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

        for particle in self.particles {
            let Some(progress) = particle.progress(self.elapsed) else {
                continue;
            };
            let color = Color {
                a: MAX_ALPHA * Particle::alpha(progress),
                ..palette::WHITE
            };
            frame.fill(
                &Path::circle(particle.position(bounds, progress), particle.size / 2.0),
                color,
            );
        }

        vec![frame.into_geometry()]
    }
}
