// SPDX-License-Identifier: MPL-2.0
//! Location card of the contact section.
//!
//! Shows the business address and, once the lookup answers, either a link
//! to the resolved map place (with the first review snippet, if any) or a
//! plain map-search link for the address. Lookup failures and answers
//! without a map place both end on the search link.

use crate::application::port::{LocationError, LocationLookup};
use crate::domain::content::copy::location as copy;
use crate::domain::location::{LocationReport, MapPlace};
use crate::infrastructure::links;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length, Task};
use std::sync::Arc;

/// Lookup progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Searching,
    Found(MapPlace),
    Fallback,
}

#[derive(Debug, Clone)]
pub enum Message {
    Resolved(Result<LocationReport, LocationError>),
    OpenPlace,
    OpenFallback,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user asked to follow a link.
    OpenLink(String),
    /// The lookup failed; the card now offers the map-search link.
    LookupFailed,
}

#[derive(Debug, Clone)]
pub struct State {
    address: String,
    status: Status,
}

impl State {
    /// Starts a lookup for `address`. Without a lookup service the card
    /// goes straight to the map-search link.
    pub fn new(address: String, lookup: Option<Arc<dyn LocationLookup>>) -> (Self, Task<Message>) {
        match lookup {
            Some(lookup) => {
                let future = lookup.locate(&address);
                (
                    Self {
                        address,
                        status: Status::Searching,
                    },
                    Task::perform(future, Message::Resolved),
                )
            }
            None => (
                Self {
                    address,
                    status: Status::Fallback,
                },
                Task::none(),
            ),
        }
    }

    #[must_use]
    pub fn status(&self) -> &Status {
        &self.status
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Map-search link for the address.
    #[must_use]
    pub fn fallback_link(&self) -> String {
        links::map_search_link(&self.address)
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Resolved(Ok(report)) => {
                tracing::debug!(summary = %report.summary, "location resolved");
                self.status = match report.place {
                    Some(place) => Status::Found(place),
                    None => Status::Fallback,
                };
                Event::None
            }
            Message::Resolved(Err(err)) => {
                tracing::warn!(error = %err, "location lookup failed");
                self.status = Status::Fallback;
                Event::LookupFailed
            }
            Message::OpenPlace => match &self.status {
                Status::Found(place) => Event::OpenLink(place.uri.clone()),
                _ => Event::None,
            },
            Message::OpenFallback => Event::OpenLink(self.fallback_link()),
        }
    }

    pub fn view(&self, colors: &ColorScheme) -> Element<'_, Message> {
        let status: Element<'_, Message> = match &self.status {
            Status::Searching => Row::new()
                .spacing(spacing::XS)
                .align_y(Vertical::Center)
                .push(icons::tinted(icons::navigation(), palette::CYAN_500, sizing::ICON_SM))
                .push(
                    Text::new(copy::SEARCHING)
                        .size(typography::CAPTION)
                        .color(colors.text_tertiary),
                )
                .into(),
            Status::Found(place) => {
                let open = button(
                    Row::new()
                        .spacing(spacing::XS)
                        .align_y(Vertical::Center)
                        .push(icons::tinted(icons::navigation(), palette::WHITE, sizing::ICON_SM))
                        .push(Text::new(copy::OPEN_MAP).size(typography::BODY_SM)),
                )
                .on_press(Message::OpenPlace)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::solid);

                let mut column = Column::new().spacing(spacing::SM).push(open);
                if let Some(snippet) = &place.review_snippet {
                    column = column.push(
                        Container::new(
                            Text::new(format!("\"{snippet}\""))
                                .size(typography::CAPTION)
                                .color(colors.text_tertiary),
                        )
                        .padding([spacing::XXS, spacing::XS])
                        .style(styles::container::quote(palette::CYAN_200)),
                    );
                }
                column.into()
            }
            Status::Fallback => button(
                Row::new()
                    .spacing(spacing::XXS)
                    .align_y(Vertical::Center)
                    .push(Text::new(copy::FALLBACK_LINK).size(typography::BODY_SM))
                    .push(icons::tinted(
                        icons::external_link(),
                        colors.brand_primary,
                        typography::CAPTION,
                    )),
            )
            .on_press(Message::OpenFallback)
            .padding(0)
            .style(styles::button::link(colors.brand_primary))
            .into(),
        };

        let details = Column::new()
            .spacing(spacing::XXS)
            .push(
                Text::new(copy::TITLE)
                    .size(typography::BODY)
                    .color(colors.text_primary),
            )
            .push(
                Text::new(self.address.as_str())
                    .size(typography::BODY_SM)
                    .color(colors.text_secondary),
            )
            .push(Container::new(status).padding([spacing::SM, 0.0]));

        let content = Row::new()
            .spacing(spacing::SM)
            .push(icons::tinted(icons::map_pin(), palette::CYAN_600, sizing::ICON_MD))
            .push(details);

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::LG)
            .style(styles::container::card(colors.surface_secondary, colors.border_subtle))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::BoxFuture;

    const ADDRESS: &str = "R. Papa João Paulo II, 4000 - Ataíde, Vila Velha - ES";

    struct Fixed(Result<LocationReport, LocationError>);

    impl LocationLookup for Fixed {
        fn locate(&self, _query: &str) -> BoxFuture<'static, Result<LocationReport, LocationError>> {
            let result = self.0.clone();
            Box::pin(async move { result })
        }
    }

    fn place() -> MapPlace {
        MapPlace {
            uri: "https://maps.google.com/?cid=42".into(),
            title: "Vertical Cor".into(),
            review_snippet: Some("Ótimo serviço".into()),
        }
    }

    fn searching() -> State {
        let lookup: Arc<dyn LocationLookup> = Arc::new(Fixed(Err(LocationError::Unavailable(
            "unused".into(),
        ))));
        State::new(ADDRESS.into(), Some(lookup)).0
    }

    #[test]
    fn starts_searching_with_a_lookup() {
        assert_eq!(searching().status(), &Status::Searching);
    }

    #[test]
    fn without_lookup_goes_straight_to_fallback() {
        let (state, _task) = State::new(ADDRESS.into(), None);
        assert_eq!(state.status(), &Status::Fallback);
    }

    #[test]
    fn map_place_is_found() {
        let mut state = searching();
        state.update(Message::Resolved(Ok(LocationReport {
            summary: "ok".into(),
            place: Some(place()),
        })));
        assert_eq!(state.status(), &Status::Found(place()));
        assert_eq!(
            state.update(Message::OpenPlace),
            Event::OpenLink("https://maps.google.com/?cid=42".into())
        );
    }

    #[test]
    fn report_without_place_falls_back_silently() {
        let mut state = searching();
        let event = state.update(Message::Resolved(Ok(LocationReport {
            summary: "sem mapa".into(),
            place: None,
        })));
        assert_eq!(event, Event::None);
        assert_eq!(state.status(), &Status::Fallback);
    }

    #[test]
    fn lookup_error_falls_back_to_search_link() {
        let mut state = searching();
        let event = state.update(Message::Resolved(Err(LocationError::Transport(
            "offline".into(),
        ))));
        assert_eq!(event, Event::LookupFailed);
        assert_eq!(state.status(), &Status::Fallback);

        let Event::OpenLink(link) = state.update(Message::OpenFallback) else {
            panic!("fallback must open a link");
        };
        assert!(link.starts_with("https://www.google.com/maps/search/?api=1&query="));
        assert!(link.contains("Vila+Velha"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn open_place_without_result_is_ignored() {
        let mut state = searching();
        assert_eq!(state.update(Message::OpenPlace), Event::None);
    }
}
