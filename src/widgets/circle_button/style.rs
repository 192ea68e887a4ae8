//! Style constants and attribute resolution for [`CircleButton`](super::CircleButton).

use crate::attributes::{AttributeError, AttributeSet, Dimension};
use crate::resources::DisplayMetrics;
use crate::widgets::Color;

/// Added to each RGB channel of the base color while pressed.
pub const PRESSED_COLOR_LIGHTUP: u8 = (255 / 25) as u8;
/// Alpha of the pressed ring stroke.
pub const PRESSED_RING_ALPHA: u8 = 75;
pub const DEFAULT_PRESSED_RING_WIDTH_DP: f32 = 4.0;
pub const DEFAULT_IMAGE_SPACING_DP: f32 = 4.0;

pub const ATTR_COLOR: &str = "color";
pub const ATTR_IMAGE_SPACING: &str = "imageSpacing";
pub const ATTR_PRESSED_RING_WIDTH: &str = "pressedRingWidth";

/// Brighten each RGB channel by `amount`, saturating at 255. Alpha is kept.
pub fn highlight_color(color: Color, amount: u8) -> Color {
    Color::argb(
        color.a,
        color.r.saturating_add(amount),
        color.g.saturating_add(amount),
        color.b.saturating_add(amount),
    )
}

/// Resolved construction options, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    pub color: Color,
    /// Gap between the icon and the label
    pub image_spacing: i32,
    /// Stroke width of the pressed ring
    pub pressed_ring_width: i32,
}

impl ButtonStyle {
    pub fn defaults(metrics: &DisplayMetrics) -> Self {
        Self {
            color: Color::BLACK,
            image_spacing: (DEFAULT_IMAGE_SPACING_DP * metrics.density + 0.5) as i32,
            pressed_ring_width: Dimension::dp(DEFAULT_PRESSED_RING_WIDTH_DP).to_px(metrics) as i32,
        }
    }

    /// Apply `attrs` over the defaults. Dimensions are truncated to whole pixels.
    pub fn resolve(attrs: &AttributeSet, metrics: &DisplayMetrics) -> Result<Self, AttributeError> {
        let defaults = Self::defaults(metrics);

        let color = attrs.get_color(ATTR_COLOR, defaults.color)?;
        let image_spacing =
            attrs.get_dimension(ATTR_IMAGE_SPACING, defaults.image_spacing as f32, metrics)?;
        let pressed_ring_width = attrs.get_dimension(
            ATTR_PRESSED_RING_WIDTH,
            defaults.pressed_ring_width as f32,
            metrics,
        )?;

        let style = Self {
            color,
            image_spacing: image_spacing as i32,
            pressed_ring_width: pressed_ring_width as i32,
        };
        log::debug!("Resolved circle button style: {:?}", style);
        Ok(style)
    }
}
