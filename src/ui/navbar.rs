// SPDX-License-Identifier: MPL-2.0
//! Page header with section anchors and the quote button.
//!
//! On wide windows the anchors sit inline next to the logo; below the
//! compact breakpoint they move into a drop-down menu behind a hamburger
//! toggle. The bar is transparent over the hero until the page scrolls or
//! the menu opens.

use crate::domain::content::copy::header as copy;
use crate::domain::content::Section;
use crate::ui::design_tokens::{layout, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    pub menu_open: bool,
    /// Vertical scroll offset of the page.
    pub scroll_offset: f32,
    pub window_width: f32,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    Navigate(Section),
    RequestQuote,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Section),
    RequestQuote,
}

/// Process a navbar message and return the corresponding event.
///
/// Choosing any entry closes the menu.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::CloseMenu => {
            *menu_open = false;
            Event::None
        }
        Message::Navigate(section) => {
            *menu_open = false;
            Event::Navigate(section)
        }
        Message::RequestQuote => {
            *menu_open = false;
            Event::RequestQuote
        }
    }
}

/// Whether the header draws its solid background.
#[must_use]
pub fn is_solid(scroll_offset: f32, menu_open: bool) -> bool {
    menu_open || scroll_offset > layout::HEADER_SOLID_SCROLL
}

/// Whether the window is narrow enough for the hamburger layout.
#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width < layout::COMPACT_BREAKPOINT
}

/// Render the header bar, plus the drop-down when open in compact mode.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let compact = is_compact(ctx.window_width);
    let solid = is_solid(ctx.scroll_offset, ctx.menu_open);

    let trailing: Element<'a, Message> = if compact {
        let toggle_icon = if ctx.menu_open {
            icons::close()
        } else {
            icons::menu()
        };
        button(icons::tinted(toggle_icon, palette::WHITE, sizing::ICON_MD))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::icon(palette::WHITE))
            .into()
    } else {
        build_inline_nav()
    };

    let bar = Row::new()
        .align_y(Vertical::Center)
        .push(build_brand())
        .push(Space::new().width(Length::Fill))
        .push(trailing);

    let header = Container::new(
        Container::new(bar)
            .max_width(sizing::CONTENT_MAX_WIDTH)
            .width(Length::Fill)
            .padding([0.0, spacing::LG]),
    )
    .width(Length::Fill)
    .height(Length::Fixed(layout::HEADER_HEIGHT))
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(styles::container::header(solid));

    let mut content = Column::new().width(Length::Fill).push(header);
    if compact && ctx.menu_open {
        content = content.push(build_dropdown());
    }
    content.into()
}

fn build_brand<'a>() -> Element<'a, Message> {
    let logo: Element<'a, Message> = match icons::logo() {
        Some(svg) => svg
            .width(Length::Fixed(sizing::LOGO))
            .height(Length::Fixed(sizing::LOGO))
            .into(),
        None => Container::new(Text::new(copy::LOGO_FALLBACK).size(typography::TITLE_MD))
            .width(Length::Fixed(sizing::LOGO))
            .height(Length::Fixed(sizing::LOGO))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(|_theme: &Theme| container::Style {
                background: Some(palette::WHITE.into()),
                text_color: Some(palette::NAVY_900),
                border: Border {
                    radius: radius::LG.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into(),
    };

    let wordmark = Column::new()
        .push(
            Text::new(copy::WORDMARK_TOP)
                .size(typography::TITLE_MD)
                .color(palette::WHITE),
        )
        .push(
            Text::new(copy::WORDMARK_BOTTOM)
                .size(typography::BODY_SM)
                .color(palette::CYAN_400),
        );

    let brand = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(logo)
        .push(wordmark);

    button(brand)
        .on_press(Message::Navigate(Section::Home))
        .padding(0)
        .style(styles::button::nav_link(palette::WHITE))
        .into()
}

fn build_inline_nav<'a>() -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XL).align_y(Vertical::Center);

    for section in Section::ALL {
        row = row.push(
            button(Text::new(section.label()).size(typography::BODY))
                .on_press(Message::Navigate(section))
                .padding(spacing::XXS)
                .style(styles::button::nav_link(palette::SLATE_200)),
        );
    }

    let quote = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::tinted(icons::phone(), palette::WHITE, sizing::ICON_SM))
        .push(Text::new(copy::QUOTE).size(typography::BODY));

    row.push(
        button(quote)
            .on_press(Message::RequestQuote)
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::primary),
    )
    .into()
}

fn build_dropdown<'a>() -> Element<'a, Message> {
    let mut menu_column = Column::new().spacing(spacing::XXS).width(Length::Fill);

    for section in Section::ALL {
        menu_column = menu_column.push(
            button(Text::new(section.label()).size(typography::BODY))
                .on_press(Message::Navigate(section))
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::button::accordion(palette::SLATE_200, palette::NAVY_800)),
        );
    }

    menu_column = menu_column.push(Space::new().height(spacing::MD)).push(
        button(
            Text::new(copy::QUOTE_WHATSAPP)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .on_press(Message::RequestQuote)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::solid),
    );

    Container::new(menu_column)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .style(styles::container::menu_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_menu_flips_state() {
        let mut menu_open = false;
        assert_eq!(update(Message::ToggleMenu, &mut menu_open), Event::None);
        assert!(menu_open);
        update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
    }

    #[test]
    fn choosing_an_entry_closes_the_menu() {
        let mut menu_open = true;
        let event = update(Message::Navigate(Section::Portfolio), &mut menu_open);
        assert_eq!(event, Event::Navigate(Section::Portfolio));
        assert!(!menu_open);

        menu_open = true;
        assert_eq!(update(Message::RequestQuote, &mut menu_open), Event::RequestQuote);
        assert!(!menu_open);
    }

    #[test]
    fn header_turns_solid_past_threshold() {
        assert!(!is_solid(0.0, false));
        assert!(!is_solid(50.0, false));
        assert!(is_solid(50.5, false));
    }

    #[test]
    fn open_menu_forces_solid_header() {
        assert!(is_solid(0.0, true));
    }

    #[test]
    fn compact_below_breakpoint() {
        assert!(is_compact(767.0));
        assert!(!is_compact(768.0));
    }
}
