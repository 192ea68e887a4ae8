//! Intrinsic dimensions of image sources.
//!
//! Icons are measured during layout, before anything is decoded for display,
//! so only the header (or the SVG tree size) is needed here.

use std::path::Path;

use image::GenericImageView;

use crate::widgets::image::ImageSource;

/// Get the intrinsic dimensions of an image source.
///
/// Returns `None` if the image cannot be read or parsed.
pub fn get_intrinsic_size(source: &ImageSource) -> Option<(u32, u32)> {
    let size = match source {
        ImageSource::Path(path) => image::image_dimensions(path).ok(),
        ImageSource::Bytes(bytes) => image::load_from_memory(bytes)
            .ok()
            .map(|img| img.dimensions()),
        ImageSource::SvgPath(path) => get_svg_size_from_file(path),
        ImageSource::SvgBytes(bytes) => get_svg_size_from_bytes(bytes),
    };

    if size.is_none() {
        log::warn!("Unable to read image dimensions for {:?}", source);
    }
    size
}

/// Get SVG dimensions from a file path.
fn get_svg_size_from_file(path: &Path) -> Option<(u32, u32)> {
    let data = std::fs::read(path).ok()?;
    get_svg_size_from_bytes(&data)
}

/// Get SVG dimensions from raw bytes.
fn get_svg_size_from_bytes(bytes: &[u8]) -> Option<(u32, u32)> {
    let tree = resvg::usvg::Tree::from_data(bytes, &resvg::usvg::Options::default()).ok()?;
    let size = tree.size();
    Some((size.width() as u32, size.height() as u32))
}
