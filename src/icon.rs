// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded brand logo at runtime to produce a RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use crate::ui::icons;
use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon, in pixels.
const ICON_SIZE: u32 = 128;

/// Rasterize the embedded logo to a square RGBA buffer.
/// Returns `None` if the asset is missing or parsing/rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    let rgba = rasterize_logo(ICON_SIZE)?;
    icon::from_rgba(rgba, ICON_SIZE, ICON_SIZE).ok()
}

fn rasterize_logo(target: u32) -> Option<Vec<u8>> {
    let source = icons::logo_bytes()?;

    let tree = match usvg::Tree::from_data(&source, &usvg::Options::default()) {
        Ok(t) => t,
        Err(err) => {
            tracing::warn!(error = %err, "window icon failed to parse");
            return None;
        }
    };

    let orig_size = tree.size();
    let scale_x = target as f32 / orig_size.width();
    let scale_y = target as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some(pixmap.data().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_rasterizes_to_square_rgba() {
        let rgba = rasterize_logo(32).expect("logo should rasterize");
        assert_eq!(rgba.len(), 32 * 32 * 4);
        assert!(rgba.chunks(4).any(|pixel| pixel[3] > 0), "icon is fully transparent");
    }

    #[test]
    fn window_icon_loads() {
        assert!(load_window_icon().is_some());
    }
}
