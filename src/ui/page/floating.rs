// SPDX-License-Identifier: MPL-2.0
//! Floating WhatsApp button pinned to the bottom-right corner.

use crate::ui::design_tokens::{palette, sizing, spacing};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Container};
use iced::{Element, Length};

/// Renders the button over a full-size transparent layer.
pub fn view<'a, M: Clone + 'a>(on_press: M) -> Element<'a, M> {
    let icon = icons::tinted(icons::phone(), palette::WHITE, sizing::ICON_LG);

    let floating = button(
        Container::new(icon)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .on_press(on_press)
    .width(Length::Fixed(sizing::FLOATING_BUTTON))
    .height(Length::Fixed(sizing::FLOATING_BUTTON))
    .style(styles::button::whatsapp);

    Container::new(floating)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(Horizontal::Right)
        .align_y(Vertical::Bottom)
        .into()
}
