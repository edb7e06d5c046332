// SPDX-License-Identifier: MPL-2.0
//! Outbound links to third-party services.

use reqwest::Url;

/// Base of the generic Google Maps search link.
pub const MAP_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Base of WhatsApp click-to-chat links.
pub const WHATSAPP_BASE: &str = "https://wa.me/";

/// Map-search link for a free-text address, used when no resolved place is
/// available.
#[must_use]
pub fn map_search_link(address: &str) -> String {
    with_query(MAP_SEARCH_BASE, &[("api", "1"), ("query", address)])
}

/// Click-to-chat link opening a conversation with `number` and a pre-filled
/// `message`.
#[must_use]
pub fn whatsapp_link(number: &str, message: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    with_query(&format!("{WHATSAPP_BASE}{digits}"), &[("text", message)])
}

fn with_query(base: &str, params: &[(&str, &str)]) -> String {
    match Url::parse_with_params(base, params) {
        Ok(url) => url.into(),
        Err(err) => {
            tracing::warn!(%base, %err, "could not build link");
            base.to_string()
        }
    }
}
