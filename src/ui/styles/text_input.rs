// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Rounded field on a tinted background; the border lights up on focus.
pub fn field(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let colors = ColorScheme::for_theme(theme);

    let (border_color, border_width) = match status {
        text_input::Status::Focused { .. } => (palette::BRAND_INDIGO, border::WIDTH_MD),
        text_input::Status::Hovered => (palette::GRAY_200, border::WIDTH_SM),
        _ => (Color::TRANSPARENT, border::WIDTH_SM),
    };

    text_input::Style {
        background: Background::Color(colors.surface_secondary),
        border: Border {
            color: border_color,
            width: border_width,
            radius: radius::MD.into(),
        },
        icon: colors.text_secondary,
        placeholder: colors.text_secondary,
        value: colors.text_primary,
        selection: Color {
            a: 0.3,
            ..palette::BRAND_INDIGO
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focused_field_has_brand_border() {
        let style = field(&Theme::Light, text_input::Status::Focused { is_hovered: false });
        assert_eq!(style.border.color, palette::BRAND_INDIGO);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }

    #[test]
    fn idle_field_has_no_visible_border() {
        let style = field(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, Color::TRANSPARENT);
    }

    #[test]
    fn dark_field_uses_dark_surface_and_light_text() {
        let style = field(&Theme::Dark, text_input::Status::Active);
        let dark = ColorScheme::dark();
        assert_eq!(style.background, Background::Color(dark.surface_secondary));
        assert_eq!(style.value, dark.text_primary);
    }
}
