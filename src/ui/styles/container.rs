// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-width section band with a flat background.
pub fn section(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Header bar. Transparent over the hero until `solid`.
pub fn header(solid: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        if solid {
            container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::SURFACE,
                    ..palette::NAVY_900
                })),
                shadow: shadow::MD,
                ..Default::default()
            }
        } else {
            container::Style::default()
        }
    }
}

/// Raised card.
pub fn card(background: Color, border_color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::XL.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Card with a thick colored top rule, used by the pain-point cards.
pub fn accent_card(background: Color, accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: accent,
            width: border::WIDTH_LG,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Darkened scrim laid over photos so text stays readable.
pub fn scrim(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::NAVY_900
        })),
        ..Default::default()
    }
}

/// Round badge behind an icon.
pub fn icon_badge(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Quoted review snippet with a left rule.
pub fn quote(rule: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        border: Border {
            color: rule,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Drop-down panel of the compact header menu.
pub fn menu_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::NAVY_900)),
        border: Border {
            color: palette::SLATE_800,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_transparent_until_solid() {
        let theme = Theme::Dark;
        assert!(header(false)(&theme).background.is_none());
        assert!(header(true)(&theme).background.is_some());
    }
}
