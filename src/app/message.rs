// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::LoadedImage;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::page;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(page::Message),
    Notification(notifications::NotificationMessage),
    /// The floating button, which targets the dedicated WhatsApp number.
    FloatingQuote,
    /// The page scrolled or was laid out again.
    PageScrolled {
        offset: AbsoluteOffset,
        bounds: Rectangle,
        content_bounds: Rectangle,
    },
    WindowResized(Size),
    HeroLoaded(Result<LoadedImage, Error>),
    ThumbnailLoaded(Result<LoadedImage, Error>),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VERTICAL_COR_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Skip the location lookup and show the map-search link right away.
    pub offline: bool,
}
