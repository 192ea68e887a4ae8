use crate::invalidation::{ChangeFlags, WidgetId};
use crate::layout::{Constraints, Size};
use crate::renderer::{measure_text, PaintContext};

use super::impl_dirty_flags;
use super::widget::{Color, Padding, Rect, Widget};

/// Text element: a single string with a color, a font size and padding.
pub struct TextView {
    widget_id: WidgetId,
    dirty_flags: ChangeFlags,
    text: String,
    color: Color,
    font_size: f32,
    padding: Padding,
    bounds: Rect,
}

impl TextView {
    pub fn new() -> Self {
        Self {
            widget_id: WidgetId::next(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            text: String::new(),
            color: Color::BLACK,
            font_size: 14.0,
            padding: Padding::default(),
            bounds: Rect::default(),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.text != text {
            self.text = text;
            self.mark_dirty(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.color = color;
        self.mark_dirty(ChangeFlags::NEEDS_PAINT);
    }

    pub fn text_color(&self) -> Color {
        self.color
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
        self.mark_dirty(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
    }

    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.mark_dirty(ChangeFlags::NEEDS_LAYOUT);
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Rectangle the glyphs are drawn into, inside the padding.
    fn content_rect(&self) -> Rect {
        Rect::new(
            self.bounds.x + self.padding.left,
            self.bounds.y + self.padding.top,
            (self.bounds.width - self.padding.horizontal()).max(0.0),
            (self.bounds.height - self.padding.vertical()).max(0.0),
        )
    }
}

impl Default for TextView {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextView {
    fn layout(&mut self, constraints: Constraints) -> Size {
        let max_text_width = constraints.max_width - self.padding.horizontal();
        let measured = measure_text(
            &self.text,
            self.font_size,
            max_text_width.is_finite().then_some(max_text_width.max(0.0)),
        );

        let size = constraints.constrain(Size::new(
            measured.width + self.padding.horizontal(),
            measured.height + self.padding.vertical(),
        ));

        self.bounds.width = size.width;
        self.bounds.height = size.height;
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);

        size
    }

    fn paint(&self, ctx: &mut PaintContext) {
        if self.text.is_empty() {
            return;
        }
        ctx.draw_text(&self.text, self.content_rect(), self.color, self.font_size);
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn id(&self) -> WidgetId {
        self.widget_id
    }

    impl_dirty_flags!();
}
