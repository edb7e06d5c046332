// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the embedded SVG icons.
//!
//! Icons live in `assets/icons/` and are embedded at compile time with
//! `rust-embed`. Handles are cached in a `OnceLock` per icon and tinted at
//! render time, so one black source file serves every color.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::icons;
//!
//! let pin = icons::tinted(icons::map_pin(), palette::CYAN_600, sizing::ICON_MD);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `send` not `submit_quote`).

use crate::domain::content::Glyph;
use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use rust_embed::RustEmbed;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct IconAssets;

#[derive(RustEmbed)]
#[folder = "assets/branding/"]
struct BrandingAssets;

/// Raw bytes of an embedded icon. Missing files yield an empty document,
/// which renders as nothing.
fn icon_bytes(filename: &str) -> Vec<u8> {
    match IconAssets::get(filename) {
        Some(file) => file.data.into_owned(),
        None => {
            tracing::warn!(%filename, "missing embedded icon");
            Vec::new()
        }
    }
}

/// Raw bytes of the brand logo, if it was embedded.
#[must_use]
pub fn logo_bytes() -> Option<Vec<u8>> {
    BrandingAssets::get("logo.svg").map(|file| file.data.into_owned())
}

/// Logo as an SVG widget, or `None` when the asset is missing.
#[must_use]
pub fn logo<'a>() -> Option<Svg<'a>> {
    static HANDLE: OnceLock<Option<Handle>> = OnceLock::new();
    HANDLE
        .get_or_init(|| logo_bytes().map(Handle::from_memory))
        .clone()
        .map(Svg::new)
}

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| Handle::from_memory(icon_bytes($filename)));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Navigation & Chrome
// =============================================================================

define_icon!(menu, "menu.svg", "Menu icon: three horizontal bars.");
define_icon!(close, "x.svg", "Close icon: diagonal cross.");
define_icon!(chevron_down, "chevron-down.svg", "Chevron pointing down.");
define_icon!(chevron_up, "chevron-up.svg", "Chevron pointing up.");
define_icon!(
    arrow_left_right,
    "arrow-left-right.svg",
    "Two opposing horizontal arrows."
);

// =============================================================================
// Contact & Location
// =============================================================================

define_icon!(phone, "phone.svg", "Phone handset.");
define_icon!(chat, "message-circle.svg", "Speech bubble.");
define_icon!(map_pin, "map-pin.svg", "Map pin.");
define_icon!(navigation, "navigation.svg", "Navigation arrow.");
define_icon!(
    external_link,
    "external-link.svg",
    "Box with an arrow leaving it."
);
define_icon!(send, "send.svg", "Paper plane.");
define_icon!(play, "play.svg", "Filled triangle pointing right.");

// =============================================================================
// Content Pictograms
// =============================================================================

define_icon!(building, "building.svg", "Multi-storey building.");
define_icon!(brush, "brush.svg", "Paint brush.");
define_icon!(wrench, "wrench.svg", "Wrench.");
define_icon!(door_open, "door-open.svg", "Open door.");
define_icon!(trending_down, "trending-down.svg", "Descending chart line.");
define_icon!(shield_alert, "shield-alert.svg", "Shield with exclamation mark.");
define_icon!(eye, "eye.svg", "Eye.");
define_icon!(check_circle, "check-circle.svg", "Circle with a check mark.");

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(info, "info.svg", "Circle with a lowercase i.");
define_icon!(warning, "alert-triangle.svg", "Triangle with exclamation mark.");

/// Icon drawn for a content [`Glyph`].
#[must_use]
pub fn glyph<'a>(glyph: Glyph) -> Svg<'a> {
    match glyph {
        Glyph::Building => building(),
        Glyph::Brush => brush(),
        Glyph::Wrench => wrench(),
        Glyph::Door => door_open(),
        Glyph::TrendingDown => trending_down(),
        Glyph::ShieldAlert => shield_alert(),
        Glyph::Eye => eye(),
        Glyph::CheckCircle => check_circle(),
    }
}

/// Sizes an icon to a square of `size` pixels.
#[must_use]
pub fn sized<'a>(icon: Svg<'a>, size: f32) -> Svg<'a> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Sizes and colors an icon.
#[must_use]
pub fn tinted<'a>(icon: Svg<'a>, color: Color, size: f32) -> Svg<'a> {
    sized(icon, size).style(move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(color),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_asset_is_embedded() {
        for file in [
            "menu.svg",
            "x.svg",
            "chevron-down.svg",
            "chevron-up.svg",
            "arrow-left-right.svg",
            "phone.svg",
            "message-circle.svg",
            "map-pin.svg",
            "navigation.svg",
            "external-link.svg",
            "send.svg",
            "play.svg",
            "building.svg",
            "brush.svg",
            "wrench.svg",
            "door-open.svg",
            "trending-down.svg",
            "shield-alert.svg",
            "eye.svg",
            "check-circle.svg",
            "info.svg",
            "alert-triangle.svg",
        ] {
            assert!(IconAssets::get(file).is_some(), "missing {file}");
        }
    }

    #[test]
    fn icon_assets_are_valid_svg() {
        for file in IconAssets::iter() {
            let bytes = icon_bytes(&file);
            assert!(
                resvg::usvg::Tree::from_data(&bytes, &resvg::usvg::Options::default()).is_ok(),
                "{file} does not parse"
            );
        }
    }

    #[test]
    fn logo_is_embedded() {
        assert!(logo_bytes().is_some());
    }
}
