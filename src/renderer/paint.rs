use bitflags::bitflags;

use crate::widgets::Color;

bitflags! {
    /// Rasterization hints carried by a [`Paint`]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PaintFlags: u8 {
        /// Smooth shape edges
        const ANTI_ALIAS = 0b01;
    }
}

/// Whether a shape is filled or outlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintStyle {
    #[default]
    Fill,
    /// Outline centered on the shape edge, `stroke_width` wide.
    Stroke,
}

/// Color and style used to draw a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub flags: PaintFlags,
}

impl Paint {
    pub fn new(flags: PaintFlags) -> Self {
        Self {
            color: Color::BLACK,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            flags,
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Replace only the alpha channel of the current color.
    pub fn set_alpha(&mut self, alpha: u8) {
        self.color = self.color.with_alpha(alpha);
    }

    pub fn set_style(&mut self, style: PaintStyle) {
        self.style = style;
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    pub fn is_anti_alias(&self) -> bool {
        self.flags.contains(PaintFlags::ANTI_ALIAS)
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::new(PaintFlags::empty())
    }
}
