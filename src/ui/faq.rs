// SPDX-License-Identifier: MPL-2.0
//! Single-open FAQ accordion.

use crate::domain::content::FaqItem;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// Index of the open entry, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    open: Option<usize>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Toggle(usize),
}

impl State {
    /// Currently open entry.
    #[must_use]
    pub fn open(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opening an entry closes the previous one; toggling the open entry
    /// closes it.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Toggle(index) => {
                self.open = if self.is_open(index) { None } else { Some(index) };
            }
        }
    }

    pub fn view<'a>(&self, items: &[FaqItem], colors: &ColorScheme) -> Element<'a, Message> {
        let mut list = Column::new().spacing(spacing::MD).width(Length::Fill);

        for (index, item) in items.iter().enumerate() {
            list = list.push(self.entry(index, item, colors));
        }

        list.into()
    }

    fn entry<'a>(&self, index: usize, item: &FaqItem, colors: &ColorScheme) -> Element<'a, Message> {
        let open = self.is_open(index);
        let chevron = if open {
            icons::chevron_up()
        } else {
            icons::chevron_down()
        };
        let chevron_color = if open {
            colors.brand_primary
        } else {
            colors.text_tertiary
        };

        let question = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(
                Text::new(item.question)
                    .size(typography::TITLE_SM)
                    .width(Length::Fill),
            )
            .push(icons::tinted(chevron, chevron_color, sizing::ICON_MD));

        let mut body = Column::new().push(
            button(question)
                .on_press(Message::Toggle(index))
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::button::accordion(
                    colors.text_primary,
                    colors.surface_secondary,
                )),
        );

        if open {
            body = body.push(
                Container::new(
                    Text::new(item.answer)
                        .size(typography::BODY)
                        .color(colors.text_secondary),
                )
                .padding(iced::Padding {
                    top: 0.0,
                    right: spacing::LG,
                    bottom: spacing::LG,
                    left: spacing::LG,
                }),
            );
        }

        Container::new(body)
            .width(Length::Fill)
            .style(styles::container::card(colors.surface_card, colors.border_subtle))
            .into()
    }
}
