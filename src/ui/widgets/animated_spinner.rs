// SPDX-License-Identifier: MPL-2.0
//! Animated spinner widget using Canvas for smooth rotation.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Full turns per second.
const TURNS_PER_SECOND: f32 = 1.0;

/// Share of the circle covered by the moving arc.
const ARC_SWEEP: f32 = 0.75 * TAU;

const STROKE_WIDTH: f32 = 4.0;

/// Spinner drawn at a given rotation; rebuilt every frame while visible.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedSpinner {
    rotation: f32, // Rotation angle in radians
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner with the given color, unrotated.
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            rotation: 0.0,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Sets the rotation reached after spinning for `elapsed`.
    #[must_use]
    pub fn after(mut self, elapsed: Duration) -> Self {
        self.rotation = rotation_after(elapsed);
        self
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Angle in `[0, TAU)` after spinning for `elapsed`.
#[must_use]
pub fn rotation_after(elapsed: Duration) -> f32 {
    (elapsed.as_secs_f32() * TURNS_PER_SECOND).fract() * TAU
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
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
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        // Faint full track
        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(Color { a: 0.25, ..self.color }),
        );

        // Moving arc, starting at the top
        let start_angle = self.rotation - PI / 2.0;
        let mut arc_path = canvas::path::Builder::new();
        arc_path.move_to(Point::new(
            center.x + radius * start_angle.cos(),
            center.y + radius * start_angle.sin(),
        ));

        let segments = 40;
        #[allow(clippy::cast_precision_loss)]
        // segments=40, i∈[1,40] - well within f32 precision
        for i in 1..=segments {
            let angle = start_angle + ARC_SWEEP * (i as f32 / segments as f32);
            arc_path.line_to(Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            ));
        }

        frame.stroke(
            &arc_path.build(),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
