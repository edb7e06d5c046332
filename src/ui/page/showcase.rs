// SPDX-License-Identifier: MPL-2.0
//! Institutional video block. The thumbnail is display only.

use super::{band, heading, Message, ViewContext};
use crate::domain::content::copy::showcase as copy;
use crate::ui::design_tokens::{layout, opacity, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{container, image, Column, Container, Space, Stack, Text};
use iced::{Border, ContentFit, Element, Length, Theme};

const THUMBNAIL_HEIGHT: f32 = 360.0;

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let thumbnail: Element<'a, Message> = match ctx.video_thumbnail {
        Some(loaded) => image(loaded.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::section(palette::NAVY_800))
            .into(),
    };

    let play_badge = Container::new(
        Container::new(icons::tinted(icons::play(), palette::WHITE, sizing::ICON_LG))
            .padding(spacing::LG)
            .style(styles::container::icon_badge(palette::CYAN_600)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::scrim(opacity::OVERLAY_SUBTLE));

    let caption = Container::new(
        Container::new(
            Text::new(copy::CAPTION)
                .size(typography::CAPTION)
                .color(palette::WHITE),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(|_theme: &Theme| container::Style {
            background: Some(
                iced::Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..palette::BLACK
                }
                .into(),
            ),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::MD)
    .align_x(Horizontal::Left)
    .align_y(Vertical::Bottom);

    let card = Container::new(Stack::new().push(thumbnail).push(play_badge).push(caption))
        .width(Length::Fill)
        .max_width(sizing::TEXT_MAX_WIDTH + sizing::TEXT_MAX_WIDTH / 3.0)
        .height(Length::Fixed(THUMBNAIL_HEIGHT))
        .style(styles::container::card(palette::NAVY_900, colors.border_subtle));

    let content = Column::new()
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(heading(copy::TITLE, colors.text_primary).align_x(Horizontal::Center))
        .push(
            Text::new(copy::BODY)
                .size(typography::BODY_LG)
                .color(colors.text_secondary)
                .align_x(Horizontal::Center),
        )
        .push(card);

    band(
        content,
        Length::Fixed(layout::SHOWCASE_HEIGHT),
        colors.surface_primary,
    )
}
