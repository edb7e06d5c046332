// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Input field on the navy contact band.
pub fn on_dark(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border_color = match status {
        text_input::Status::Focused { .. } => palette::CYAN_500,
        text_input::Status::Hovered => palette::SLATE_600,
        _ => palette::SLATE_700,
    };
    text_input::Style {
        background: Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::NAVY_800
        }),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        icon: palette::SLATE_400,
        placeholder: palette::SLATE_500,
        value: palette::WHITE,
        selection: Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::CYAN_500
        },
    }
}
