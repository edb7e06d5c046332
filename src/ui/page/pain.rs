// SPDX-License-Identifier: MPL-2.0
//! Warning signs of a neglected facade.

use super::{band, columns_for, grid, heading, Message, ViewContext};
use crate::domain::content::copy::pain as copy;
use crate::domain::content::{PainPoint, Tone, PAIN_POINTS};
use crate::ui::design_tokens::{layout, opacity, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::{Column, Container, Text};
use iced::{Color, Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let cards = PAIN_POINTS
        .iter()
        .map(|point| card(point, colors))
        .collect();

    let content = Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(heading(copy::TITLE, colors.text_primary).align_x(Horizontal::Center))
        .push(grid(cards, columns_for(ctx.compact, PAIN_POINTS.len())));

    band(
        content,
        Length::Fixed(layout::PAIN_HEIGHT),
        colors.surface_secondary,
    )
}

fn tone_color(tone: Tone, colors: &ColorScheme) -> Color {
    match tone {
        Tone::Danger => colors.error,
        Tone::Warning => colors.warning,
        Tone::Neutral => colors.text_tertiary,
    }
}

fn card<'a>(point: &PainPoint, colors: &ColorScheme) -> Element<'a, Message> {
    let accent = tone_color(point.tone, colors);

    let badge = Container::new(icons::tinted(icons::glyph(point.glyph), accent, sizing::ICON_LG))
        .padding(spacing::MD)
        .style(styles::container::icon_badge(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..accent
        }));

    let body = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(badge)
        .push(
            Text::new(point.title)
                .size(typography::TITLE_MD)
                .color(colors.text_primary),
        )
        .push(
            Text::new(point.body)
                .size(typography::BODY)
                .color(colors.text_secondary)
                .align_x(Horizontal::Center),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::accent_card(colors.surface_card, accent))
        .into()
}
