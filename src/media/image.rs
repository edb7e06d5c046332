// SPDX-License-Identifier: MPL-2.0
//! Image decoding (JPEG, PNG, WebP and SVG).

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use resvg::usvg;

/// A decoded image ready for rendering.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    /// Creates a new `LoadedImage` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Pixel size as floats, for layout math.
    #[must_use]
    pub fn size(&self) -> iced::Size {
        iced::Size::new(self.width as f32, self.height as f32)
    }
}

/// Decodes encoded bytes. SVG documents are rasterized at their intrinsic
/// size.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not a supported image or the
/// image has empty dimensions.
pub fn decode(bytes: &[u8], is_svg: bool) -> Result<LoadedImage> {
    if is_svg {
        return rasterize_svg(bytes);
    }

    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Decode("image has empty dimensions".into()));
    }

    Ok(LoadedImage::from_rgba(width, height, img.to_rgba8().into_vec()))
}

fn rasterize_svg(bytes: &[u8]) -> Result<LoadedImage> {
    let tree = usvg::Tree::from_data(bytes, &usvg::Options::default())
        .map_err(|e| Error::Decode(e.to_string()))?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Decode("failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(LoadedImage::from_rgba(width, height, pixmap.take()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("failed to encode png");

        let data = decode(&bytes, false).expect("png should decode");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
    }

    #[test]
    fn decode_svg_rasterizes() {
        let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" width="6" height="3"><rect width="6" height="3" fill="blue"/></svg>"#;
        let data = decode(svg, true).expect("svg should rasterize");
        assert_eq!((data.width, data.height), (6, 3));
    }

    #[test]
    fn invalid_bytes_return_decode_error() {
        match decode(b"not a png", false) {
            Err(Error::Decode(message)) => assert!(!message.is_empty()),
            other => panic!("expected Decode error, got {other:?}"),
        }
        assert!(matches!(decode(b"<svg>oops", true), Err(Error::Decode(_))));
    }
}
