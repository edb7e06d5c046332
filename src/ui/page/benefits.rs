// SPDX-License-Identifier: MPL-2.0
//! "Why us" list.

use super::{band, columns_for, grid, heading, Message, ViewContext};
use crate::domain::content::copy::benefits as copy;
use crate::domain::content::BENEFITS;
use crate::ui::design_tokens::{layout, sizing, spacing, typography};
use crate::ui::icons;
use iced::alignment::Horizontal;
use iced::widget::{Column, Row, Text};
use iced::{Element, Length};

pub(super) fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let colors = ctx.colors;

    let items = BENEFITS
        .iter()
        .map(|benefit| {
            Row::new()
                .spacing(spacing::MD)
                .push(icons::tinted(
                    icons::check_circle(),
                    colors.brand_primary,
                    sizing::ICON_MD,
                ))
                .push(
                    Column::new()
                        .spacing(spacing::XXS)
                        .push(
                            Text::new(benefit.title)
                                .size(typography::TITLE_SM)
                                .color(colors.text_primary),
                        )
                        .push(
                            Text::new(benefit.text)
                                .size(typography::BODY)
                                .color(colors.text_secondary),
                        ),
                )
                .into()
        })
        .collect();

    let content = Column::new()
        .spacing(spacing::XXL)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .push(heading(copy::TITLE, colors.text_primary).align_x(Horizontal::Center))
        .push(grid(items, columns_for(ctx.compact, 2)));

    band(
        content,
        Length::Fixed(layout::BENEFITS_HEIGHT),
        colors.surface_primary,
    )
}
