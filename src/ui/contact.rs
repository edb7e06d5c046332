// SPDX-License-Identifier: MPL-2.0
//! Quote request form.
//!
//! The form collects a name and a phone number. Submitting is accepted and
//! logged; there is no backend to deliver it to.

use crate::domain::content::copy::contact as copy;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text_input, Column, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Default)]
pub struct State {
    name: String,
    phone: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    PhoneChanged(String),
    Submit,
}

impl State {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::NameChanged(name) => self.name = name,
            Message::PhoneChanged(phone) => self.phone = phone,
            Message::Submit => {
                tracing::info!(
                    has_name = !self.name.trim().is_empty(),
                    has_phone = !self.phone.trim().is_empty(),
                    "quote form submitted"
                );
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let name = text_input(copy::NAME_PLACEHOLDER, &self.name)
            .on_input(Message::NameChanged)
            .on_submit(Message::Submit)
            .padding(spacing::MD)
            .size(typography::BODY)
            .style(styles::input::on_dark);

        let phone = text_input(copy::PHONE_PLACEHOLDER, &self.phone)
            .on_input(Message::PhoneChanged)
            .on_submit(Message::Submit)
            .padding(spacing::MD)
            .size(typography::BODY)
            .style(styles::input::on_dark);

        let submit = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(Text::new(copy::SUBMIT).size(typography::BODY))
                .push(icons::tinted(icons::send(), palette::WHITE, sizing::ICON_SM)),
        )
        .on_press(Message::Submit)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::button::solid);

        Column::new()
            .spacing(spacing::MD)
            .max_width(sizing::FORM_MAX_WIDTH)
            .align_x(Horizontal::Left)
            .push(name)
            .push(phone)
            .push(submit)
            .into()
    }
}
