// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call to action (cyan pill).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (palette::CYAN_500, shadow::LG),
        button::Status::Pressed => (palette::CYAN_600, shadow::SM),
        button::Status::Disabled => (palette::SLATE_400, shadow::NONE),
        button::Status::Active => (palette::CYAN_600, shadow::MD),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: radius::FULL.into(),
        },
        shadow,
        snap: true,
    }
}

/// Square-cornered primary button for forms and the header.
pub fn solid(theme: &Theme, status: button::Status) -> button::Style {
    let base = primary(theme, status);
    button::Style {
        border: Border {
            radius: radius::MD.into(),
            ..base.border
        },
        ..base
    }
}

/// Text-only navigation link drawn over the header.
pub fn nav_link(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let color = match status {
            button::Status::Hovered | button::Status::Pressed => palette::CYAN_400,
            _ => text_color,
        };
        button::Style {
            background: None,
            text_color: color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Inline hyperlink look.
pub fn link(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            _ => opacity::OPAQUE,
        };
        button::Style {
            background: None,
            text_color: Color { a: alpha, ..color },
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Round floating WhatsApp button.
pub fn whatsapp(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Color::from_rgb8(0x20, 0xbd, 0x5a),
        _ => palette::WHATSAPP,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::LG,
        snap: true,
    }
}

/// FAQ question row.
pub fn accordion(
    text_color: Color,
    hover_background: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(hover_background))
            }
            _ => None,
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Transparent icon button (menu toggle, notification close).
pub fn icon(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..color
            })),
            _ => None,
        };
        button::Style {
            background,
            text_color: color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
