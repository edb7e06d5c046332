// SPDX-License-Identifier: MPL-2.0
//! Contact band and footer: quote form, location card, phone and legal
//! links.

use super::{heading, Message, ViewContext};
use crate::domain::content::copy::{contact as copy, header};
use crate::domain::content::Section;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{
    button, container, rule, Column, Container, Row, Space, Text,
};
use iced::{Border, Element, Length, Theme};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let pitch = Column::new()
        .spacing(spacing::LG)
        .push(heading(copy::TITLE, palette::WHITE))
        .push(
            Text::new(copy::BODY)
                .size(typography::BODY_LG)
                .color(palette::SLATE_400),
        )
        .push(ctx.contact.view().map(Message::Contact));

    let details = Column::new()
        .spacing(spacing::XL)
        .push(brand_row())
        .push(ctx.location.view(&location_colors(ctx.colors)).map(Message::Location))
        .push(phone_link(&ctx.business.phone_display))
        .push(availability());

    let columns: Element<'a, Message> = if ctx.compact {
        Column::new()
            .spacing(spacing::XXL)
            .push(pitch)
            .push(details)
            .into()
    } else {
        Row::new()
            .spacing(spacing::XXL)
            .push(Container::new(pitch).width(Length::FillPortion(1)))
            .push(Container::new(details).width(Length::FillPortion(1)))
            .into()
    };

    let legal = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.business.copyright())
                .size(typography::BODY_SM)
                .color(palette::SLATE_500),
        )
        .push(Space::new().width(Length::Fill))
        .push(legal_link(copy::PRIVACY))
        .push(Space::new().width(spacing::LG))
        .push(legal_link(copy::TERMS));

    let content = Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .push(columns)
        .push(rule::horizontal(border::WIDTH_SM))
        .push(legal);

    Container::new(
        Container::new(content)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill)
            .padding([spacing::XXXL, spacing::LG]),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .style(styles::container::section(palette::NAVY_900))
    .into()
}

/// The location card sits on the navy band but keeps the light card look.
fn location_colors(colors: &ColorScheme) -> ColorScheme {
    if colors.surface_primary == palette::WHITE {
        colors.clone()
    } else {
        ColorScheme::light()
    }
}

fn brand_row<'a>() -> Element<'a, Message> {
    let logo: Element<'a, Message> = match icons::logo() {
        Some(svg) => svg
            .width(Length::Fixed(sizing::LOGO))
            .height(Length::Fixed(sizing::LOGO))
            .into(),
        None => Container::new(Text::new(header::LOGO_FALLBACK).size(typography::TITLE_SM))
            .width(Length::Fixed(sizing::BUTTON_HEIGHT))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(|_theme: &Theme| container::Style {
                background: Some(palette::WHITE.into()),
                text_color: Some(palette::NAVY_900),
                border: Border {
                    radius: radius::MD.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into(),
    };

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(logo)
        .push(
            Container::new(rule::vertical(border::WIDTH_SM))
                .height(Length::Fixed(sizing::BUTTON_HEIGHT)),
        )
        .push(
            Text::new(copy::TAGLINE)
                .size(typography::BODY_SM)
                .color(palette::SLATE_400),
        )
        .into()
}

fn phone_link(phone: &str) -> Element<'_, Message> {
    let badge = Container::new(icons::tinted(icons::phone(), palette::SLATE_300, sizing::ICON_SM))
        .padding(spacing::MD)
        .style(styles::container::icon_badge(palette::NAVY_800));

    button(
        Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(badge)
            .push(Text::new(phone).size(typography::BODY_LG)),
    )
    .on_press(Message::Quote)
    .padding(0)
    .style(styles::button::nav_link(palette::SLATE_300))
    .into()
}

fn availability<'a>() -> Element<'a, Message> {
    let dot = Container::new(Space::new().width(spacing::SM).height(spacing::SM))
        .style(styles::container::icon_badge(palette::SUCCESS_500));

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Container::new(dot)
                .padding(spacing::LG - spacing::XXS)
                .style(styles::container::icon_badge(palette::NAVY_800)),
        )
        .push(
            Text::new(copy::AVAILABILITY)
                .size(typography::BODY)
                .color(palette::SUCCESS_500),
        )
        .into()
}

/// Legal links have no destination; they take the reader back to the top.
fn legal_link(label: &str) -> Element<'_, Message> {
    button(Text::new(label).size(typography::BODY_SM))
        .on_press(Message::Navigate(Section::Home))
        .padding(0)
        .style(styles::button::nav_link(palette::SLATE_500))
        .into()
}
