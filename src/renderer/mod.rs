pub mod commands;
pub mod paint;
mod text_measurer;

use crate::widgets::image::ImageSource;
use crate::widgets::{Color, Rect};

pub use commands::DrawCommand;
pub use paint::{Paint, PaintFlags, PaintStyle};
pub use text_measurer::measure_text;

/// Collects the draw commands produced by one paint pass.
///
/// Commands are kept in call order; later commands draw over earlier ones.
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<DrawCommand>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw a circle centered at `(cx, cy)`.
    ///
    /// Negative radii are clamped to zero.
    pub fn draw_circle(&mut self, cx: f32, cy: f32, radius: f32, paint: &Paint) {
        self.commands
            .push(DrawCommand::circle((cx, cy), radius.max(0.0), *paint));
    }

    pub fn draw_text(&mut self, text: &str, rect: Rect, color: Color, font_size: f32) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            rect,
            color,
            font_size,
        });
    }

    pub fn draw_image(&mut self, source: ImageSource, rect: Rect) {
        self.commands.push(DrawCommand::Image { source, rect });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
