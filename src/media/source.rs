// SPDX-License-Identifier: MPL-2.0
//! Where an image comes from.

use std::fmt;
use std::path::PathBuf;

/// A remote URL or a local file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Url(String),
    Path(PathBuf),
}

impl ImageSource {
    /// Interprets a settings string: `http://` and `https://` prefixes mean a
    /// URL, anything else a path. Blank strings yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Some(Self::Url(raw.to_string()))
        } else {
            Some(Self::Path(PathBuf::from(raw)))
        }
    }

    /// Whether the source names an SVG document.
    #[must_use]
    pub fn is_svg(&self) -> bool {
        match self {
            Self::Url(url) => url
                .split(['?', '#'])
                .next()
                .is_some_and(|path| path.to_ascii_lowercase().ends_with(".svg")),
            Self::Path(path) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("svg")),
        }
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
