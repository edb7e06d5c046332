// SPDX-License-Identifier: MPL-2.0
//! Hero band: background photo, headline and the main call to action.

use super::{Message, ViewContext};
use crate::domain::content::copy::hero as copy;
use crate::ui::design_tokens::{layout, opacity, palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, Column, Container, Row, Space, Stack, Text};
use iced::{ContentFit, Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let background: Element<'a, Message> = match ctx.hero_image {
        Some(loaded) => image(loaded.handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::section(palette::NAVY_900))
            .into(),
    };

    let scrim = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::scrim(opacity::OVERLAY_STRONG));

    let cta = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::tinted(icons::building(), palette::WHITE, sizing::ICON_SM))
            .push(Text::new(copy::CTA).size(typography::BODY_LG)),
    )
    .on_press(Message::Quote)
    .padding([spacing::MD, spacing::XL])
    .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::LG)
        .max_width(sizing::TEXT_MAX_WIDTH + sizing::TEXT_MAX_WIDTH / 4.0)
        .align_x(Horizontal::Center)
        .push(
            Text::new(copy::TITLE)
                .size(typography::DISPLAY)
                .color(palette::WHITE)
                .align_x(Horizontal::Center),
        )
        .push(
            Text::new(copy::TITLE_ACCENT)
                .size(typography::DISPLAY)
                .color(palette::CYAN_400)
                .align_x(Horizontal::Center),
        )
        .push(
            Text::new(copy::SUBTITLE)
                .size(typography::BODY_LG)
                .color(palette::SLATE_200)
                .align_x(Horizontal::Center),
        )
        .push(cta)
        .push(icons::tinted(
            icons::chevron_down(),
            palette::SLATE_300,
            sizing::ICON_LG,
        ));

    let foreground = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([layout::HEADER_HEIGHT, spacing::LG])
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center);

    Container::new(Stack::new().push(background).push(scrim).push(foreground))
        .width(Length::Fill)
        .height(Length::Fixed(layout::HERO_HEIGHT))
        .into()
}
