// SPDX-License-Identifier: MPL-2.0
//! The scrolling page: every section from the hero down to the footer.
//!
//! Sections above the footer have fixed heights so an anchor's pixel offset
//! is known without measuring the laid-out page; see [`anchor_offset`].

mod benefits;
mod floating;
mod footer;
mod hero;
mod pain;
mod portfolio;
mod questions;
mod services;
mod showcase;

pub use floating::view as floating_button;

use crate::domain::content::{BusinessInfo, Section};
use crate::media::LoadedImage;
use crate::ui::comparison;
use crate::ui::contact;
use crate::ui::design_tokens::{layout, sizing, spacing, typography};
use crate::ui::faq;
use crate::ui::location;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{Column, Container, Row, Text};
use iced::{Color, Element, Length};

/// Messages emitted by the page body.
#[derive(Debug, Clone)]
pub enum Message {
    /// A call to action pointing at the main WhatsApp number.
    Quote,
    Navigate(Section),
    Comparison(comparison::Message),
    Faq(faq::Message),
    Contact(contact::Message),
    Location(location::Message),
}

/// Contextual data needed to render the page.
pub struct ViewContext<'a> {
    pub colors: &'a ColorScheme,
    pub business: &'a BusinessInfo,
    pub hero_image: Option<&'a LoadedImage>,
    pub video_thumbnail: Option<&'a LoadedImage>,
    pub comparison: &'a comparison::State,
    pub faq: &'a faq::State,
    pub contact: &'a contact::State,
    pub location: &'a location::State,
    pub compact: bool,
}

/// Render every section, top to bottom.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .width(Length::Fill)
        .push(hero::view(ctx))
        .push(showcase::view(ctx))
        .push(pain::view(ctx))
        .push(services::view(ctx))
        .push(portfolio::view(ctx))
        .push(benefits::view(ctx))
        .push(questions::view(ctx))
        .push(footer::view(ctx))
        .into()
}

/// Distance from the top of the page to the start of `section`.
///
/// `None` for the contact section, which sits at the end of the page
/// after the variable-height footer content.
#[must_use]
pub fn anchor_offset(section: Section) -> Option<f32> {
    let services = layout::HERO_HEIGHT + layout::SHOWCASE_HEIGHT + layout::PAIN_HEIGHT;
    match section {
        Section::Home => Some(0.0),
        Section::Services => Some(services),
        Section::Portfolio => Some(services + layout::SERVICES_HEIGHT),
        Section::Contact => None,
    }
}

/// Relative scroll position that brings `section` to the top.
///
/// `scrollable_height` is the content height minus the viewport height.
/// Unknown geometry snaps to the top; the contact section always snaps to
/// the end.
#[must_use]
pub fn anchor_snap(section: Section, scrollable_height: f32) -> RelativeOffset {
    let y = match anchor_offset(section) {
        None => 1.0,
        Some(_) if !(scrollable_height.is_finite() && scrollable_height > 0.0) => 0.0,
        Some(offset) => (offset / scrollable_height).clamp(0.0, 1.0),
    };
    RelativeOffset { x: 0.0, y }
}

// =============================================================================
// Shared building blocks
// =============================================================================

/// Full-width band of fixed height with centered, width-limited content.
fn band<'a>(
    content: impl Into<Element<'a, Message>>,
    height: Length,
    background: Color,
) -> Element<'a, Message> {
    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill)
            .padding([spacing::XXL, spacing::LG]),
    )
    .width(Length::Fill)
    .height(height)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(crate::ui::styles::container::section(background))
    .into()
}

fn heading<'a>(title: &'a str, color: Color) -> Text<'a> {
    Text::new(title).size(typography::TITLE_LG).color(color)
}

/// Lays cells out in rows of `columns`, each cell sharing the row width.
fn grid<'a>(cells: Vec<Element<'a, Message>>, columns: usize) -> Element<'a, Message> {
    let columns = columns.max(1);
    let mut rows = Column::new().spacing(spacing::LG).width(Length::Fill);
    let mut row = Row::new().spacing(spacing::LG).width(Length::Fill);
    let mut in_row = 0;

    for cell in cells {
        row = row.push(Container::new(cell).width(Length::FillPortion(1)));
        in_row += 1;
        if in_row == columns {
            rows = rows.push(row);
            row = Row::new().spacing(spacing::LG).width(Length::Fill);
            in_row = 0;
        }
    }
    if in_row > 0 {
        for _ in in_row..columns {
            row = row.push(Container::new(Text::new("")).width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.into()
}

fn columns_for(compact: bool, wide: usize) -> usize {
    if compact {
        2.min(wide)
    } else {
        wide
    }
}
