// SPDX-License-Identifier: MPL-2.0
//! Loading of the page imagery (hero, video thumbnail, comparison pair).
//!
//! Sources are either remote (`http`/`https`) or local paths. Fetching runs
//! on the tokio runtime and decoding on a blocking thread, so callers can
//! wrap [`load`] in an `iced::Task`.

pub mod image;
pub mod source;

pub use image::{decode, LoadedImage};
pub use source::ImageSource;

use crate::error::{Error, Result};

/// Formats the decoder understands, advertised to image CDNs.
const ACCEPT: &str = "image/webp,image/png,image/jpeg;q=0.9";

/// Fetches or reads `source` and decodes it.
///
/// # Errors
///
/// Returns [`Error::Http`] or [`Error::Io`] when the bytes cannot be
/// obtained and [`Error::Decode`] when they are not a supported image.
pub async fn load(source: ImageSource) -> Result<LoadedImage> {
    let (bytes, is_svg) = match &source {
        ImageSource::Url(url) => (fetch(url).await?, source.is_svg()),
        ImageSource::Path(path) => (tokio::fs::read(path).await?, source.is_svg()),
    };

    let image = tokio::task::spawn_blocking(move || decode(&bytes, is_svg))
        .await
        .map_err(|e| Error::Decode(e.to_string()))??;

    tracing::debug!(%source, width = image.width, height = image.height, "image loaded");
    Ok(image)
}

/// Keeps a loaded image. A failed load is logged under `label` and leaves
/// its section on the placeholder.
pub fn accept(label: &str, result: Result<LoadedImage>) -> Option<LoadedImage> {
    result
        .map_err(|err| tracing::warn!(label, error = %err, "image failed to load"))
        .ok()
}

async fn fetch(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("VerticalCor/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, ACCEPT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(Error::Http(format!("HTTP status: {}", response.status())));
    }

    Ok(response.bytes().await?.to_vec())
}
