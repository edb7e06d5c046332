// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page scrolls underneath a fixed header; the floating WhatsApp button
//! and the toasts float above both.

use super::{Message, PAGE_SCROLLABLE_ID};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::page::{self, ViewContext as PageViewContext};
use iced::widget::{Id, Scrollable, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub page: PageViewContext<'a>,
    pub navbar: NavbarViewContext,
    pub notifications: &'a notifications::Manager,
}

/// Renders the page with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body = Scrollable::new(page::view(&ctx.page).map(Message::Page))
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::PageScrolled {
            offset: viewport.absolute_offset(),
            bounds: viewport.bounds(),
            content_bounds: viewport.content_bounds(),
        });

    let header = navbar::view(ctx.navbar).map(Message::Navbar);
    let floating = page::floating_button(Message::FloatingQuote);
    let toasts = Toast::view_overlay(ctx.notifications).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(body)
        .push(header)
        .push(floating)
        .push(toasts)
        .into()
}
