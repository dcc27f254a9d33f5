// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::domain::notification::Kind;
use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window brand gradient behind the card.
pub fn page(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(ColorScheme::for_theme(theme).brand_gradient()),
        ..Default::default()
    }
}

/// Rounded card that holds both forms and the overlay.
pub fn card(theme: &Theme) -> container::Style {
    let base = ColorScheme::for_theme(theme).surface_primary;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Gradient half of the card carrying the toggle buttons.
pub fn overlay_panel(theme: &Theme) -> container::Style {
    let colors = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(colors.brand_gradient()),
        text_color: Some(colors.text_on_brand),
        border: Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Toast surface for a notification of `kind`, faded by `alpha`.
pub fn toast(kind: Kind, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ColorScheme::for_theme(theme);
        let background = if kind.is_error() {
            colors.alert_gradient()
        } else {
            colors.brand_gradient()
        };

        container::Style {
            background: Some(background.scale_alpha(alpha)),
            text_color: Some(Color {
                a: alpha,
                ..colors.text_on_brand
            }),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: iced::Shadow {
                color: Color {
                    a: shadow::LG.color.a * alpha,
                    ..shadow::LG.color
                },
                ..shadow::LG
            },
            ..Default::default()
        }
    }
}

/// Dimmed full-window layer behind the loading spinner.
pub fn loading_backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            ColorScheme::for_theme(theme).overlay_background,
        )),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_toast_uses_alert_gradient() {
        let error = toast(Kind::Error, 1.0)(&Theme::Light);
        let info = toast(Kind::Info, 1.0)(&Theme::Light);
        assert!(matches!(error.background, Some(Background::Gradient(_))));
        assert_ne!(error.background, info.background);
    }

    #[test]
    fn success_and_info_share_the_brand_gradient() {
        let success = toast(Kind::Success, 1.0)(&Theme::Light);
        let info = toast(Kind::Info, 1.0)(&Theme::Light);
        assert_eq!(success.background, info.background);
    }

    #[test]
    fn fading_toast_text_follows_alpha() {
        let style = toast(Kind::Info, 0.25)(&Theme::Dark);
        assert_eq!(style.text_color.map(|color| color.a), Some(0.25));
    }

    #[test]
    fn dark_theme_dims_backdrop_more() {
        let light = loading_backdrop(&Theme::Light).background;
        let dark = loading_backdrop(&Theme::Dark).background;
        let alpha = |background: Option<Background>| match background {
            Some(Background::Color(color)) => color.a,
            _ => 0.0,
        };
        assert!(alpha(dark) > alpha(light));
    }

    #[test]
    fn card_uses_theme_surface() {
        let style = card(&Theme::Dark);
        let surface = ColorScheme::dark().surface_primary;
        assert_eq!(
            style.background,
            Some(Background::Color(Color {
                a: opacity::SURFACE,
                ..surface
            }))
        );
    }

    #[test]
    fn card_is_rounded() {
        let style = card(&Theme::Light);
        assert_eq!(style.border.radius, radius::XL.into());
    }
}
