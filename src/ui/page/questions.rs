// SPDX-License-Identifier: MPL-2.0
//! FAQ band.

use super::{band, heading, Message, ViewContext};
use crate::domain::content::copy::faq as copy;
use crate::domain::content::FAQS;
use crate::ui::design_tokens::{layout, sizing, spacing};
use iced::alignment::Horizontal;
use iced::widget::{Column, Container};
use iced::{Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let accordion = Container::new(ctx.faq.view(&FAQS, ctx.colors).map(Message::Faq))
        .max_width(sizing::TEXT_MAX_WIDTH + sizing::TEXT_MAX_WIDTH / 6.0);

    let content = Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(heading(copy::TITLE, ctx.colors.text_primary))
        .push(accordion);

    band(
        content,
        Length::Fixed(layout::FAQ_HEIGHT),
        ctx.colors.surface_secondary,
    )
}
