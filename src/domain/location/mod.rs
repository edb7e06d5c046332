// SPDX-License-Identifier: MPL-2.0
//! Location lookup results.
//!
//! These types describe what a location service returned for a free-text
//! address, independent of the service that produced them.

/// A place resolved on the map, with a navigable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapPlace {
    /// Link that opens the place on the map.
    pub uri: String,
    /// Display title of the place.
    pub title: String,
    /// First review snippet attached to the place, if any.
    pub review_snippet: Option<String>,
}

/// Result of a location lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationReport {
    /// Short textual confirmation produced by the service.
    pub summary: String,
    /// The resolved place, when the service grounded the answer on a map.
    pub place: Option<MapPlace>,
}

impl LocationReport {
    /// Returns the resolved place, if any.
    #[must_use]
    pub fn place(&self) -> Option<&MapPlace> {
        self.place.as_ref()
    }
}
