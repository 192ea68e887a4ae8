//! Draw command definitions recorded by [`PaintContext`](super::PaintContext).

use super::paint::Paint;
use crate::widgets::image::ImageSource;
use crate::widgets::{Color, Rect};

/// A single draw operation in surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Draw a circle, filled or stroked depending on the paint.
    Circle {
        /// Center point
        center: (f32, f32),
        /// Radius in pixels
        radius: f32,
        paint: Paint,
    },

    /// Draw text.
    Text {
        /// The text string to render
        text: String,
        /// The bounding rectangle for the text
        rect: Rect,
        /// The text color
        color: Color,
        /// The font size in pixels
        font_size: f32,
    },

    /// Draw an image scaled into a rectangle.
    Image {
        /// Image source (path or bytes)
        source: ImageSource,
        /// Bounding rectangle
        rect: Rect,
    },
}

impl DrawCommand {
    /// Create a circle.
    pub fn circle(center: (f32, f32), radius: f32, paint: Paint) -> Self {
        Self::Circle {
            center,
            radius,
            paint,
        }
    }
}
