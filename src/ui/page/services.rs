// SPDX-License-Identifier: MPL-2.0
//! Service listing on the navy band.

use super::{band, columns_for, grid, heading, Message, ViewContext};
use crate::domain::content::copy::services as copy;
use crate::domain::content::{ServiceItem, SERVICES};
use crate::ui::design_tokens::{layout, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Text};
use iced::{Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let intro_title = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(copy::EYEBROW)
                .size(typography::BODY_SM)
                .color(palette::CYAN_400),
        )
        .push(heading(copy::TITLE, palette::WHITE));

    let intro_body = Text::new(copy::BODY)
        .size(typography::BODY_LG)
        .color(palette::SLATE_400);

    let intro: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::MD)
            .push(intro_title)
            .push(intro_body)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .push(Container::new(intro_title).width(Length::FillPortion(1)))
            .push(Container::new(intro_body).width(Length::FillPortion(1)))
            .into()
    };

    let cards = SERVICES.iter().map(card).collect();

    let content = Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .push(intro)
        .push(grid(cards, columns_for(ctx.compact, SERVICES.len())));

    band(
        content,
        Length::Fixed(layout::SERVICES_HEIGHT),
        palette::NAVY_900,
    )
}

fn card<'a>(service: &ServiceItem) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::MD)
        .push(
            Container::new(icons::tinted(
                icons::glyph(service.glyph),
                palette::CYAN_400,
                sizing::ICON_LG,
            ))
            .padding(spacing::SM)
            .style(styles::container::icon_badge(palette::NAVY_700)),
        )
        .push(
            Text::new(service.title)
                .size(typography::TITLE_SM)
                .color(palette::WHITE),
        )
        .push(
            Text::new(service.description)
                .size(typography::BODY_SM)
                .color(palette::SLATE_400),
        );

    Container::new(body)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card(palette::NAVY_800, palette::SLATE_700))
        .into()
}
