// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design system constants of the page.

## Organization

- **Palette**: Base colors (navy / cyan brand, slate neutrals)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Layout**: Section heights and breakpoints
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use vertical_cor::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::NAVY_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Brand navy
    pub const NAVY_900: Color = Color::from_rgb8(0x0a, 0x19, 0x2f);
    pub const NAVY_800: Color = Color::from_rgb8(0x11, 0x24, 0x40);
    pub const NAVY_700: Color = Color::from_rgb8(0x1b, 0x33, 0x58);

    // Brand cyan
    pub const CYAN_200: Color = Color::from_rgb8(0xa5, 0xf3, 0xfc);
    pub const CYAN_400: Color = Color::from_rgb8(0x22, 0xd3, 0xee);
    pub const CYAN_500: Color = Color::from_rgb8(0x06, 0xb6, 0xd4);
    pub const CYAN_600: Color = Color::from_rgb8(0x08, 0x91, 0xb2);

    // Slate neutrals
    pub const SLATE_50: Color = Color::from_rgb8(0xf8, 0xfa, 0xfc);
    pub const SLATE_100: Color = Color::from_rgb8(0xf1, 0xf5, 0xf9);
    pub const SLATE_200: Color = Color::from_rgb8(0xe2, 0xe8, 0xf0);
    pub const SLATE_300: Color = Color::from_rgb8(0xcb, 0xd5, 0xe1);
    pub const SLATE_400: Color = Color::from_rgb8(0x94, 0xa3, 0xb8);
    pub const SLATE_500: Color = Color::from_rgb8(0x64, 0x74, 0x8b);
    pub const SLATE_600: Color = Color::from_rgb8(0x47, 0x55, 0x69);
    pub const SLATE_700: Color = Color::from_rgb8(0x33, 0x41, 0x55);
    pub const SLATE_800: Color = Color::from_rgb8(0x1e, 0x29, 0x3b);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb8(0xef, 0x44, 0x44);
    pub const WARNING_500: Color = Color::from_rgb8(0xf9, 0x73, 0x16);
    pub const SUCCESS_500: Color = Color::from_rgb8(0x4a, 0xde, 0x80);
    pub const INFO_500: Color = CYAN_500;

    /// WhatsApp brand green.
    pub const WHATSAPP: Color = Color::from_rgb8(0x25, 0xd3, 0x66);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 80.0; // 10 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 40.0;
    pub const INPUT_HEIGHT: f32 = 52.0;

    // Component widths
    pub const CONTENT_MAX_WIDTH: f32 = 1152.0;
    pub const TEXT_MAX_WIDTH: f32 = 720.0;
    pub const TOAST_WIDTH: f32 = 320.0;
    pub const FORM_MAX_WIDTH: f32 = 520.0;

    /// Logo badge in the header.
    pub const LOGO: f32 = 44.0;

    /// Floating WhatsApp button diameter.
    pub const FLOATING_BUTTON: f32 = 64.0;

    // Comparison slider
    /// Height of the comparison widget.
    pub const COMPARISON_HEIGHT: f32 = 500.0;
    /// Diameter of the handle knob.
    pub const COMPARISON_KNOB: f32 = 40.0;
    /// Width of the divider line.
    pub const COMPARISON_DIVIDER: f32 = 4.0;
}

// ============================================================================
// Layout
// ============================================================================

pub mod layout {
    //! Fixed section heights. Anchor offsets are derived from them, so a
    //! section's content must fit inside its height.

    /// Header bar height.
    pub const HEADER_HEIGHT: f32 = 80.0;

    /// Window width below which the header collapses into a menu.
    pub const COMPACT_BREAKPOINT: f32 = 768.0;

    /// Scroll distance after which the header turns solid.
    pub const HEADER_SOLID_SCROLL: f32 = 50.0;

    pub const HERO_HEIGHT: f32 = 640.0;
    pub const SHOWCASE_HEIGHT: f32 = 600.0;
    pub const PAIN_HEIGHT: f32 = 520.0;
    pub const SERVICES_HEIGHT: f32 = 640.0;
    pub const PORTFOLIO_HEIGHT: f32 = 820.0;
    pub const BENEFITS_HEIGHT: f32 = 520.0;
    pub const FAQ_HEIGHT: f32 = 640.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero headline.
    pub const DISPLAY: f32 = 48.0;

    /// Section headings.
    pub const TITLE_LG: f32 = 36.0;

    /// Card titles, wordmark.
    pub const TITLE_MD: f32 = 22.0;

    /// Small headings, FAQ questions.
    pub const TITLE_SM: f32 = 18.0;

    /// Hero subtitle, emphasis text.
    pub const BODY_LG: f32 = 18.0;

    /// Standard body text.
    pub const BODY: f32 = 15.0;

    /// Secondary labels.
    pub const BODY_SM: f32 = 13.0;

    /// Badges, legal links, disclaimers.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::Color;
    use iced::{Shadow, Vector};

    const SOFT: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.15);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: SOFT,
        offset: Vector { x: 0.0, y: 12.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    // The comparison widget must fit in its section.
    assert!(layout::PORTFOLIO_HEIGHT > sizing::COMPARISON_HEIGHT + 2.0 * spacing::XXXL);
    assert!(sizing::COMPARISON_KNOB > sizing::COMPARISON_DIVIDER);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn header_is_shorter_than_hero() {
        assert!(layout::HEADER_HEIGHT < layout::HERO_HEIGHT);
    }
}
