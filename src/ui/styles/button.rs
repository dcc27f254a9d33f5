// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Gradient pill used by the two submit buttons.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ColorScheme::for_theme(theme);
    let shadow = match status {
        button::Status::Hovered => shadow::LG,
        button::Status::Pressed => shadow::SM,
        _ => shadow::MD,
    };

    button::Style {
        background: Some(colors.brand_gradient()),
        text_color: colors.text_on_brand,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow,
        snap: true,
    }
}

/// Transparent outlined pill shown on the gradient overlay.
///
/// `pressed` is driven by the toggle's own pressed affordance, which outlives
/// the mouse button being held down.
pub fn ghost(pressed: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = if pressed || status == button::Status::Pressed {
            opacity::OVERLAY_SUBTLE
        } else if status == button::Status::Hovered {
            opacity::OVERLAY_SUBTLE / 2.0
        } else {
            opacity::TRANSPARENT
        };

        button::Style {
            background: Some(Background::Color(Color { a: fill, ..WHITE })),
            text_color: WHITE,
            border: Border {
                color: WHITE,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round outlined button for a social provider; `pulsing` highlights it.
pub fn social(pulsing: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let colors = ColorScheme::for_theme(theme);
        let highlighted = pulsing || status == button::Status::Hovered;

        let (background, text_color) = if highlighted {
            (colors.brand_gradient(), colors.text_on_brand)
        } else {
            (
                Background::Color(colors.surface_primary),
                colors.text_primary,
            )
        };

        button::Style {
            background: Some(background),
            text_color,
            border: Border {
                color: palette::GRAY_200,
                width: if highlighted { 0.0 } else { border::WIDTH_SM },
                radius: radius::FULL.into(),
            },
            shadow: if pulsing { shadow::MD } else { shadow::NONE },
            snap: true,
        }
    }
}

/// Borderless icon button used inside input fields.
pub fn icon(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::BRAND_INDIGO,
        _ => ColorScheme::for_theme(theme).text_secondary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_gradient() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert!(matches!(style.background, Some(Background::Gradient(_))));
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn ghost_button_fills_while_pressed() {
        let idle = ghost(false)(&Theme::Light, button::Status::Active);
        let held = ghost(true)(&Theme::Light, button::Status::Active);
        assert_ne!(idle.background, held.background);
    }

    #[test]
    fn ghost_button_keeps_white_outline() {
        let style = ghost(false)(&Theme::Dark, button::Status::Hovered);
        assert_eq!(style.border.color, WHITE);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }

    #[test]
    fn pulsing_social_button_is_highlighted() {
        let idle = social(false)(&Theme::Light, button::Status::Active);
        let pulsing = social(true)(&Theme::Light, button::Status::Active);
        assert!(matches!(idle.background, Some(Background::Color(_))));
        assert!(matches!(pulsing.background, Some(Background::Gradient(_))));
    }

    #[test]
    fn idle_social_button_follows_theme_surface() {
        let light = social(false)(&Theme::Light, button::Status::Active);
        let dark = social(false)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            light.background,
            Some(Background::Color(ColorScheme::light().surface_primary))
        );
        assert_eq!(
            dark.background,
            Some(Background::Color(ColorScheme::dark().surface_primary))
        );
    }
}
