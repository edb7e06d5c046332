// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the page sections (comparison, FAQ,
//! contact form, location card) and translates their events into side
//! effects like copying WhatsApp links or scrolling to an anchor.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::LocationLookup;
use crate::domain::content::BusinessInfo;
use crate::infrastructure::gemini::GeminiLocator;
use crate::media::{self, LoadedImage};
use crate::ui::comparison;
use crate::ui::contact;
use crate::ui::faq;
use crate::ui::location;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::page;
use crate::ui::theming::AppTheme;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Id of the page scrollable, targeted by anchor navigation.
pub const PAGE_SCROLLABLE_ID: &str = "page";

/// Root Iced application state.
pub struct App {
    theme: AppTheme,
    business: BusinessInfo,
    hero_image: Option<LoadedImage>,
    video_thumbnail: Option<LoadedImage>,
    comparison: comparison::State,
    faq: faq::State,
    contact: contact::State,
    location: location::State,
    /// Whether the compact-header menu is open.
    menu_open: bool,
    /// Vertical scroll offset of the page.
    scroll_offset: f32,
    /// Content height minus viewport height, once known.
    scrollable_height: f32,
    window_width: f32,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("business", &self.business.name)
            .field("split", &self.comparison.split())
            .field("location", self.location.status())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Iced 0.14 requires a Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Builds the location lookup service, or `None` when the lookup is turned
/// off, the app runs offline, or no API key is available.
fn location_lookup(
    settings: &config::LocationConfig,
    offline: bool,
) -> Option<Arc<dyn LocationLookup>> {
    if offline {
        tracing::info!("offline mode, skipping location lookup");
        return None;
    }

    let gemini = settings.gemini_settings(|key| std::env::var(key).ok())?;
    match GeminiLocator::new(gemini) {
        Ok(locator) => Some(Arc::new(locator)),
        Err(err) => {
            tracing::info!(
                env = settings.api_key_env(),
                error = %err,
                "location lookup unavailable, using map-search link"
            );
            None
        }
    }
}

/// Starts loading an optional image, delivering the result as `wrap`.
fn load_optional(
    source: Option<media::ImageSource>,
    wrap: fn(Result<LoadedImage, crate::error::Error>) -> Message,
) -> Task<Message> {
    match source {
        Some(source) => Task::perform(media::load(source), wrap),
        None => Task::none(),
    }
}

impl App {
    /// Initializes application state from the configuration file and kicks
    /// off the image loads and the location lookup.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(std::path::PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir);

        let mut notifications = notifications::Manager::new();
        if let Some(warning) = config_warning {
            notifications.push(notifications::Notification::warning(warning));
        }

        let business = config.business.to_info();
        let lookup = location_lookup(&config.location, flags.offline);

        let (comparison, comparison_task) = comparison::State::new(
            config.comparison.before_source(),
            config.comparison.after_source(),
        );
        let (location, location_task) = location::State::new(business.address.clone(), lookup);

        let app = Self {
            theme: AppTheme::new(config.general.theme_mode),
            business,
            hero_image: None,
            video_thumbnail: None,
            comparison,
            faq: faq::State::default(),
            contact: contact::State::default(),
            location,
            menu_open: false,
            scroll_offset: 0.0,
            scrollable_height: 0.0,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            notifications,
        };

        let task = Task::batch([
            load_optional(config.media.hero_source(), Message::HeroLoaded),
            load_optional(
                config.media.video_thumbnail_source(),
                Message::ThumbnailLoaded,
            ),
            comparison_task.map(|message| Message::Page(page::Message::Comparison(message))),
            location_task.map(|message| Message::Page(page::Message::Location(message))),
        ]);

        (app, task)
    }

    fn title(&self) -> String {
        self.business.name.clone()
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_comparison_subscription(&self.comparison),
            subscription::create_tick_subscription(!self.notifications.is_empty()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            business: &self.business,
            comparison: &mut self.comparison,
            faq: &mut self.faq,
            contact: &mut self.contact,
            location: &mut self.location,
            menu_open: &mut self.menu_open,
            scrollable_height: self.scrollable_height,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::FloatingQuote => update::handle_floating_quote(&mut ctx),
            Message::PageScrolled {
                offset,
                bounds,
                content_bounds,
            } => {
                self.scroll_offset = offset.y;
                self.scrollable_height = (content_bounds.height - bounds.height).max(0.0);
                Task::none()
            }
            Message::WindowResized(size) => {
                self.window_width = size.width;
                if !navbar::is_compact(size.width) {
                    self.menu_open = false;
                }
                Task::none()
            }
            Message::HeroLoaded(result) => {
                self.hero_image = media::accept("hero", result);
                Task::none()
            }
            Message::ThumbnailLoaded(result) => {
                self.video_thumbnail = media::accept("video thumbnail", result);
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let compact = navbar::is_compact(self.window_width);

        view::view(view::ViewContext {
            page: page::ViewContext {
                colors: &self.theme.colors,
                business: &self.business,
                hero_image: self.hero_image.as_ref(),
                video_thumbnail: self.video_thumbnail.as_ref(),
                comparison: &self.comparison,
                faq: &self.faq,
                contact: &self.contact,
                location: &self.location,
                compact,
            },
            navbar: navbar::ViewContext {
                menu_open: self.menu_open,
                scroll_offset: self.scroll_offset,
                window_width: self.window_width,
            },
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
impl App {
    /// Builds an app from defaults without touching disk or network.
    fn for_tests() -> Self {
        let business = BusinessInfo::default();
        let (location, _) = location::State::new(business.address.clone(), None);
        let (comparison, _) = comparison::State::new(None, None);

        Self {
            theme: AppTheme::default(),
            business,
            hero_image: None,
            video_thumbnail: None,
            comparison,
            faq: faq::State::default(),
            contact: contact::State::default(),
            location,
            menu_open: false,
            scroll_offset: 0.0,
            scrollable_height: 0.0,
            window_width: WINDOW_DEFAULT_WIDTH as f32,
            notifications: notifications::Manager::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::Section;
    use crate::ui::design_tokens::layout;
    use iced::widget::scrollable::AbsoluteOffset;
    use iced::{Rectangle, Size};

    #[test]
    fn page_scroll_records_offset_and_scrollable_height() {
        let mut app = App::for_tests();
        let _ = app.update(Message::PageScrolled {
            offset: AbsoluteOffset { x: 0.0, y: 120.0 },
            bounds: Rectangle::new(iced::Point::ORIGIN, Size::new(1280.0, 800.0)),
            content_bounds: Rectangle::new(iced::Point::ORIGIN, Size::new(1280.0, 5000.0)),
        });
        assert_eq!(app.scroll_offset, 120.0);
        assert_eq!(app.scrollable_height, 4200.0);
    }

    #[test]
    fn widening_the_window_closes_the_menu() {
        let mut app = App::for_tests();
        let _ = app.update(Message::WindowResized(Size::new(500.0, 800.0)));
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::WindowResized(Size::new(
            layout::COMPACT_BREAKPOINT + 200.0,
            800.0,
        )));
        assert!(!app.menu_open);
    }

    #[test]
    fn navigating_from_the_menu_closes_it() {
        let mut app = App::for_tests();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleMenu));
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(
            Section::Portfolio,
        )));
        assert!(!app.menu_open);
    }

    #[test]
    fn quote_buttons_push_a_toast() {
        let mut app = App::for_tests();
        let _ = app.update(Message::FloatingQuote);
        let _ = app.update(Message::Page(page::Message::Quote));
        assert_eq!(app.notifications.visible().count(), 2);
    }

    #[test]
    fn failed_location_lookup_explains_the_fallback() {
        use crate::application::port::LocationError;
        use crate::ui::notifications::Severity;

        let mut app = App::for_tests();
        let _ = app.update(Message::Page(page::Message::Location(
            location::Message::Resolved(Err(LocationError::Transport("timeout".into()))),
        )));

        let toast = app.notifications.visible().next().map(|n| (n.severity(), n.message()));
        assert_eq!(
            toast,
            Some((
                Severity::Info,
                crate::domain::content::copy::notice::LOCATION_UNAVAILABLE
            ))
        );
        assert_eq!(app.location.status(), &location::Status::Fallback);
    }

    #[test]
    fn comparison_pair_arrival_recenters_the_slider() {
        let pixel = || LoadedImage::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let mut app = App::for_tests();
        let _ = app.update(Message::Page(page::Message::Comparison(
            comparison::Message::FingerMoved {
                id: 1,
                x: 100.0,
                span: crate::test_utils::TEST_SPAN,
            },
        )));
        let _ = app.update(Message::Page(page::Message::Comparison(
            comparison::Message::BeforeLoaded(Ok(pixel())),
        )));
        let _ = app.update(Message::Page(page::Message::Comparison(
            comparison::Message::AfterLoaded(Ok(pixel())),
        )));
        crate::test_utils::assert_split(app.comparison.split(), 50.0);
    }

    #[test]
    fn failed_hero_load_keeps_placeholder() {
        let mut app = App::for_tests();
        let _ = app.update(Message::HeroLoaded(Err(crate::error::Error::Io(
            "gone".to_string(),
        ))));
        assert!(app.hero_image.is_none());
    }

    #[test]
    fn title_is_business_name() {
        let app = App::for_tests();
        assert_eq!(app.title(), "Vertical Cor");
    }
}
