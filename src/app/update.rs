// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are forwarded to their owners; the events they emit
//! become side effects here (clipboard writes, scroll snaps, toasts).

use super::{Message, PAGE_SCROLLABLE_ID};
use crate::domain::content::copy::notice;
use crate::domain::content::{BusinessInfo, Section};
use crate::infrastructure::links;
use crate::ui::comparison;
use crate::ui::contact;
use crate::ui::faq;
use crate::ui::location;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::page;
use iced::widget::{operation, Id};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub business: &'a BusinessInfo,
    pub comparison: &'a mut comparison::State,
    pub faq: &'a mut faq::State,
    pub contact: &'a mut contact::State,
    pub location: &'a mut location::State,
    pub menu_open: &'a mut bool,
    pub scrollable_height: f32,
    pub notifications: &'a mut notifications::Manager,
}

/// Handles navbar messages.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.menu_open) {
        navbar::Event::None => Task::none(),
        navbar::Event::Navigate(section) => scroll_to(section, ctx.scrollable_height),
        navbar::Event::RequestQuote => {
            request_quote(ctx.notifications, ctx.business, &ctx.business.whatsapp_number)
        }
    }
}

/// Handles messages from the page body.
pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: page::Message) -> Task<Message> {
    match message {
        page::Message::Quote => {
            request_quote(ctx.notifications, ctx.business, &ctx.business.whatsapp_number)
        }
        page::Message::Navigate(section) => scroll_to(section, ctx.scrollable_height),
        page::Message::Comparison(message) => {
            ctx.comparison.update(message);
            Task::none()
        }
        page::Message::Faq(message) => {
            ctx.faq.update(message);
            Task::none()
        }
        page::Message::Contact(message) => {
            ctx.contact.update(message);
            Task::none()
        }
        page::Message::Location(message) => match ctx.location.update(message) {
            location::Event::None => Task::none(),
            location::Event::OpenLink(url) => open_link(ctx.notifications, url),
            location::Event::LookupFailed => {
                ctx.notifications
                    .push(Notification::info(notice::LOCATION_UNAVAILABLE));
                Task::none()
            }
        },
    }
}

/// The floating button targets its own WhatsApp number.
pub fn handle_floating_quote(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    request_quote(
        ctx.notifications,
        ctx.business,
        &ctx.business.whatsapp_floating_number,
    )
}

fn request_quote(
    notifications: &mut notifications::Manager,
    business: &BusinessInfo,
    number: &str,
) -> Task<Message> {
    let url = links::whatsapp_link(number, &business.whatsapp_message);
    open_link(notifications, url)
}

/// Copies `url` to the clipboard and confirms with a toast.
fn open_link(notifications: &mut notifications::Manager, url: String) -> Task<Message> {
    tracing::info!(%url, "link requested");
    notifications.push(Notification::success(notice::LINK_COPIED));
    iced::clipboard::write(url)
}

fn scroll_to(section: Section, scrollable_height: f32) -> Task<Message> {
    tracing::debug!(section = section.slug(), "scrolling to anchor");
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        page::anchor_snap(section, scrollable_height),
    )
}
