// SPDX-License-Identifier: MPL-2.0
//! Which toasts are on screen and for how long.
//!
//! At most [`MAX_VISIBLE`] toasts are shown; the rest wait in arrival order.
//! A toast's lifetime counts from the moment it is shown, so a toast that
//! waited in the backlog still gets its full time on screen.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    /// The toast's close button was pressed.
    Dismiss(NotificationId),
}

#[derive(Debug)]
struct Shown {
    notification: Notification,
    since: Instant,
}

impl Shown {
    fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.since) >= self.notification.severity().lifetime()
    }
}

#[derive(Debug, Default)]
pub struct Manager {
    /// On screen, oldest first.
    shown: Vec<Shown>,
    backlog: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now, or once a slot frees up.
    pub fn push(&mut self, notification: Notification) {
        if notification.severity() == Severity::Warning {
            tracing::warn!(message = notification.message(), "notification");
        }
        self.backlog.push_back(notification);
        self.fill(Instant::now());
    }

    /// Removes a toast wherever it is. Returns whether it existed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(index) = self.shown.iter().position(|s| s.notification.id() == id) {
            self.shown.remove(index);
            self.fill(Instant::now());
            true
        } else if let Some(index) = self.backlog.iter().position(|n| n.id() == id) {
            self.backlog.remove(index);
            true
        } else {
            false
        }
    }

    /// Drops the toasts whose lifetime ran out by `now`.
    pub fn tick(&mut self, now: Instant) {
        let before = self.shown.len();
        self.shown.retain(|shown| !shown.expired(now));
        if self.shown.len() != before {
            self.fill(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        let Message::Dismiss(id) = message;
        self.dismiss(*id);
    }

    /// Toasts currently on screen, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.shown.iter().map(|shown| &shown.notification)
    }

    /// Returns whether nothing is shown or waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty() && self.backlog.is_empty()
    }

    fn fill(&mut self, now: Instant) {
        while self.shown.len() < MAX_VISIBLE {
            let Some(notification) = self.backlog.pop_front() else {
                break;
            };
            self.shown.push(Shown {
                notification,
                since: now,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn messages(manager: &Manager) -> Vec<&str> {
        manager.visible().map(Notification::message).collect()
    }

    #[test]
    fn starts_empty() {
        let manager = Manager::new();
        assert!(manager.is_empty());
        assert_eq!(manager.visible().count(), 0);
    }

    #[test]
    fn overflow_waits_in_the_backlog() {
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::success(format!("copiado-{i}")));
        }
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert_eq!(manager.backlog.len(), 1);
        assert_eq!(messages(&manager)[0], "copiado-0");
    }

    #[test]
    fn dismissing_a_shown_toast_promotes_the_next() {
        let mut manager = Manager::new();
        let first = Notification::success("primeiro");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::success(format!("copiado-{i}")));
        }
        manager.push(Notification::info("aguardando"));

        manager.handle_message(&Message::Dismiss(first_id));
        assert!(manager.backlog.is_empty());
        assert_eq!(messages(&manager).last(), Some(&"aguardando"));
        assert!(!manager.dismiss(first_id));
    }

    #[test]
    fn dismissing_a_waiting_toast_removes_it() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("copiado-{i}")));
        }
        let waiting = Notification::info("aguardando");
        let waiting_id = waiting.id();
        manager.push(waiting);

        assert!(manager.dismiss(waiting_id));
        assert!(manager.backlog.is_empty());
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
    }

    #[test]
    fn tick_drops_only_expired_toasts() {
        let mut manager = Manager::new();
        manager.push(Notification::success("copiado"));
        manager.push(Notification::warning("aviso"));
        let shown_at = manager.shown[0].since;

        manager.tick(shown_at + Duration::from_secs(4));
        assert_eq!(messages(&manager), ["aviso"]);

        manager.tick(shown_at + Duration::from_secs(6));
        assert!(manager.is_empty());
    }

    #[test]
    fn promoted_toast_gets_a_full_lifetime() {
        let mut manager = Manager::new();
        for i in 0..=MAX_VISIBLE {
            manager.push(Notification::success(format!("copiado-{i}")));
        }
        let last_shown_at = manager.shown[MAX_VISIBLE - 1].since;
        let expiry = last_shown_at + Severity::Success.lifetime();

        manager.tick(expiry);
        assert_eq!(messages(&manager), ["copiado-3"]);

        manager.tick(expiry + Duration::from_secs(1));
        assert_eq!(messages(&manager), ["copiado-3"]);
    }
}
