// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::comparison;
use crate::ui::page;
use iced::{event, time, window, Event, Subscription};
use std::time::Duration;

/// Window resizes drive the compact header layout.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Drag tracking of the comparison widget, present only mid-drag.
pub fn create_comparison_subscription(state: &comparison::State) -> Subscription<Message> {
    state
        .subscription()
        .map(|message| Message::Page(page::Message::Comparison(message)))
}
