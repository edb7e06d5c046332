// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theming over the brand palette.
//!
//! The hero, header, portfolio and footer stay navy in both modes; the
//! content sections in between follow the scheme.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_card: Color,
    pub border_subtle: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Semantic colors
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    pub info: Color,

    // Overlay colors
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::SLATE_50,
            surface_card: palette::WHITE,
            border_subtle: palette::SLATE_200,

            text_primary: palette::NAVY_900,
            text_secondary: palette::SLATE_600,
            text_tertiary: palette::SLATE_400,

            brand_primary: palette::CYAN_600,
            brand_secondary: palette::CYAN_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::NAVY_900
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::NAVY_900,
            surface_secondary: palette::NAVY_800,
            surface_card: palette::NAVY_700,
            border_subtle: palette::SLATE_700,

            text_primary: palette::WHITE,
            text_secondary: palette::SLATE_300,
            text_tertiary: palette::SLATE_400,

            brand_primary: palette::CYAN_400,
            brand_secondary: palette::CYAN_500,

            error: palette::ERROR_500,
            warning: palette::WARNING_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Dark) = dark_light::detect() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Resolved theme of the running application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
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
    /// For System mode, detects the actual system theme (light on error).
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }

    /// Matching built-in Iced theme for stock widgets.
    #[must_use]
    pub fn iced_theme(&self) -> iced::Theme {
        if self.colors.surface_primary == palette::WHITE {
            iced::Theme::Light
        } else {
            iced::Theme::Dark
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self {
            colors: ColorScheme::light(),
            mode: ThemeMode::Light,
        }
    }
}
