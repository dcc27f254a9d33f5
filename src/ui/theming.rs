// SPDX-License-Identifier: MPL-2.0
//! Light / dark theming and the two brand gradients.

use crate::ui::design_tokens::{opacity, palette};
use iced::gradient::{ColorStop, Linear};
use iced::{Background, Color, Degrees, Gradient, Theme};
use serde::{Deserialize, Serialize};

/// Angle shared by every decorative gradient.
pub const GRADIENT_ANGLE: Degrees = Degrees(135.0);

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_on_brand: Color,

    // Brand gradient endpoints
    pub brand_start: Color,
    pub brand_end: Color,

    // Alert gradient endpoints
    pub alert_start: Color,
    pub alert_end: Color,

    /// Backdrop dimming the window behind the loading spinner.
    pub overlay_background: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_400,
            text_on_brand: palette::WHITE,

            brand_start: palette::BRAND_INDIGO,
            brand_end: palette::BRAND_PURPLE,
            alert_start: palette::ACCENT_PINK,
            alert_end: palette::ACCENT_CORAL,

            overlay_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: Color::from_rgb(0.12, 0.12, 0.15),
            surface_secondary: Color::from_rgb(0.18, 0.18, 0.22),

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            text_on_brand: palette::WHITE,

            brand_start: palette::BRAND_INDIGO,
            brand_end: palette::BRAND_PURPLE,
            alert_start: palette::ACCENT_PINK,
            alert_end: palette::ACCENT_CORAL,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    /// Scheme matching the active Iced theme, so the configured
    /// [`ThemeMode`] reaches every style function.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Indigo to purple, used by the overlay, primary buttons and toasts.
    #[must_use]
    pub fn brand_gradient(&self) -> Background {
        diagonal(self.brand_start, self.brand_end)
    }

    /// Pink to coral, used by error toasts.
    #[must_use]
    pub fn alert_gradient(&self) -> Background {
        diagonal(self.alert_start, self.alert_end)
    }
}

fn diagonal(start: Color, end: Color) -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(GRADIENT_ANGLE).add_stops([
            ColorStop {
                offset: 0.0,
                color: start,
            },
            ColorStop {
                offset: 1.0,
                color: end,
            },
        ]),
    ))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// The built-in Iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}
