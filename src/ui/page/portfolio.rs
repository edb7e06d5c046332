// SPDX-License-Identifier: MPL-2.0
//! Portfolio band hosting the before/after comparison.

use super::{band, heading, Message, ViewContext};
use crate::domain::content::copy::portfolio as copy;
use crate::ui::design_tokens::{layout, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let intro = Column::new()
        .spacing(spacing::XS)
        .push(heading(copy::TITLE, palette::WHITE))
        .push(
            Text::new(copy::BODY)
                .size(typography::BODY_LG)
                .color(palette::SLATE_400),
        );

    let cta = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Text::new(copy::CTA).size(typography::BODY))
            .push(icons::tinted(icons::chat(), palette::CYAN_400, sizing::ICON_SM)),
    )
    .on_press(Message::Quote)
    .padding([spacing::SM, spacing::XL])
    .style(styles::button::nav_link(palette::CYAN_400));

    let header: Element<'a, Message> = if ctx.compact {
        Column::new().spacing(spacing::MD).push(intro).push(cta).into()
    } else {
        Row::new()
            .align_y(Vertical::Bottom)
            .push(intro)
            .push(Space::new().width(Length::Fill))
            .push(cta)
            .into()
    };

    let comparison = Container::new(ctx.comparison.view().map(Message::Comparison))
        .width(Length::Fill)
        .style(styles::container::card(palette::NAVY_800, palette::SLATE_700));

    let content = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .push(header)
        .push(comparison)
        .push(
            Text::new(copy::DISCLAIMER)
                .size(typography::CAPTION)
                .color(palette::SLATE_500)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        );

    band(
        content,
        Length::Fixed(layout::PORTFOLIO_HEIGHT),
        palette::NAVY_900,
    )
}
