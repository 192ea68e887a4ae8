//! Circular button with an icon, a label and an animated pressed ring.
//!
//! The button paints a filled circle inset by the ring width. Behind it sits a
//! translucent stroked ring that grows out from under the body while the button
//! is pressed and shrinks back when it is released. The icon and the label are
//! stacked vertically and centered on top.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use circle_button::prelude::*;
//!
//! let ctx = Context::default();
//! let mut button = CircleButton::new(&ctx).on_click(|| println!("clicked"));
//! button.set_color(Color::from_hex(0x3F51B5));
//! button.set_text("Play");
//! button.set_size(96);
//!
//! button.layout(Constraints::unbounded());
//! button.set_pressed(true);
//! while button.advance_animations(Duration::from_millis(16)) {}
//! assert_eq!(button.animation_progress(), button.ring_width() as f32);
//! ```

mod geometry;
pub mod style;

use std::time::Duration;

use crate::animation::{FloatAnimator, TimingFunction};
use crate::attributes::{AttributeError, AttributeSet};
use crate::invalidation::{ChangeFlags, WidgetId};
use crate::layout::{Constraints, Size};
use crate::renderer::{Paint, PaintContext, PaintFlags, PaintStyle};
use crate::resources::{Context, ResourceId, StyleId};

use super::image::{ImageSource, ImageView};
use super::text::TextView;
use super::widget::{Color, Event, EventResponse, Key, MouseButton, Padding, Rect, Widget};

pub use geometry::CircleGeometry;
pub use style::ButtonStyle;
use style::{highlight_color, PRESSED_COLOR_LIGHTUP, PRESSED_RING_ALPHA};

pub struct CircleButton {
    widget_id: WidgetId,
    dirty_flags: ChangeFlags,
    bounds: Rect,

    /// Pixel size the geometry was computed for
    size_px: Option<(i32, i32)>,
    geometry: CircleGeometry,

    base_color: Color,
    highlight_color: Color,
    ring_width: i32,
    circle_paint: Paint,
    ring_paint: Paint,

    animation_progress: f32,
    pressed_animator: FloatAnimator,

    pressed: bool,
    focused: bool,
    focusable: bool,
    clickable: bool,
    on_click: Option<Box<dyn FnMut()>>,

    /// Explicit layout size set through `set_size`
    layout_width: Option<i32>,
    layout_height: Option<i32>,

    image_view: ImageView,
    text_view: TextView,
    /// Child offsets from our origin, computed during layout
    image_offset: (f32, f32),
    text_offset: (f32, f32),
}

impl CircleButton {
    /// Create a button with the default style.
    pub fn new(context: &Context) -> Self {
        let style = ButtonStyle::defaults(context.resources().display_metrics());
        Self::from_style(context, style)
    }

    /// Create a button styled by `attrs` (`color`, `imageSpacing`, `pressedRingWidth`).
    pub fn with_attributes(context: &Context, attrs: &AttributeSet) -> Result<Self, AttributeError> {
        let style = ButtonStyle::resolve(attrs, context.resources().display_metrics())?;
        Ok(Self::from_style(context, style))
    }

    /// Like [`with_attributes`](Self::with_attributes), with the registered
    /// style `style_id` supplying values `attrs` leaves out.
    pub fn with_style(
        context: &Context,
        attrs: &AttributeSet,
        style_id: StyleId,
    ) -> Result<Self, AttributeError> {
        let defaults = context
            .resources()
            .style(style_id)
            .ok_or(AttributeError::UnknownStyle(style_id))?;
        Self::with_attributes(context, &attrs.merged_over(defaults))
    }

    pub fn from_style(context: &Context, style: ButtonStyle) -> Self {
        let mut circle_paint = Paint::new(PaintFlags::ANTI_ALIAS);
        circle_paint.set_style(PaintStyle::Fill);

        let mut ring_paint = Paint::new(PaintFlags::ANTI_ALIAS);
        ring_paint.set_style(PaintStyle::Stroke);
        ring_paint.set_stroke_width(style.pressed_ring_width as f32);

        let mut text_view = TextView::new();
        text_view.set_padding(Padding::default().top(style.image_spacing as f32));

        let pressed_animator =
            FloatAnimator::new(0.0, 0.0, context.resources().short_animation_duration());

        let mut button = Self {
            widget_id: WidgetId::next(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            bounds: Rect::default(),
            size_px: None,
            geometry: CircleGeometry::default(),
            base_color: style.color,
            highlight_color: style.color,
            ring_width: style.pressed_ring_width,
            circle_paint,
            ring_paint,
            animation_progress: 0.0,
            pressed_animator,
            pressed: false,
            focused: false,
            focusable: true,
            clickable: true,
            on_click: None,
            layout_width: None,
            layout_height: None,
            image_view: ImageView::new(context),
            text_view,
            image_offset: (0.0, 0.0),
            text_offset: (0.0, 0.0),
        };
        button.set_color(style.color);
        button
    }

    /// Callback fired when a press is released over the button.
    pub fn on_click<F: FnMut() + 'static>(mut self, callback: F) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn set_color(&mut self, color: Color) {
        self.base_color = color;
        self.highlight_color = highlight_color(color, PRESSED_COLOR_LIGHTUP);

        self.circle_paint.set_color(self.base_color);
        self.ring_paint.set_color(self.base_color);
        self.ring_paint.set_alpha(PRESSED_RING_ALPHA);

        self.invalidate();
    }

    pub fn color(&self) -> Color {
        self.base_color
    }

    pub fn highlight_color(&self) -> Color {
        self.highlight_color
    }

    pub fn ring_width(&self) -> i32 {
        self.ring_width
    }

    pub fn circle_paint(&self) -> &Paint {
        &self.circle_paint
    }

    pub fn ring_paint(&self) -> &Paint {
        &self.ring_paint
    }

    pub fn geometry(&self) -> &CircleGeometry {
        &self.geometry
    }

    /// Square layout size.
    pub fn set_size(&mut self, side: i32) {
        self.set_size_wh(side, side);
    }

    /// Layout size; the icon is limited to a third of each side.
    pub fn set_size_wh(&mut self, width: i32, height: i32) {
        self.layout_width = Some(width);
        self.layout_height = Some(height);

        self.image_view.set_max_width((width / 3) as f32);
        self.image_view.set_max_height((height / 3) as f32);

        self.mark_dirty(ChangeFlags::NEEDS_LAYOUT);
    }

    pub fn layout_size(&self) -> (Option<i32>, Option<i32>) {
        (self.layout_width, self.layout_height)
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        let fill = if pressed {
            self.highlight_color
        } else {
            self.base_color
        };
        let target = if pressed { self.ring_width as f32 } else { 0.0 };

        // Ring already at rest on the target: nothing to animate
        let settled =
            !self.pressed_animator.is_running() && self.animation_progress == target;
        if settled && self.pressed == pressed && self.circle_paint.color == fill {
            return;
        }

        log::debug!("CircleButton {:?} pressed={}", self.widget_id, pressed);
        self.pressed = pressed;
        self.circle_paint.set_color(fill);

        if settled {
            self.invalidate();
            return;
        }

        self.pressed_animator
            .set_values(self.animation_progress, target);
        let start = self.pressed_animator.start();
        self.set_animation_progress(start);
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn animation_progress(&self) -> f32 {
        self.animation_progress
    }

    pub fn set_animation_progress(&mut self, animation_progress: f32) {
        self.animation_progress = animation_progress;
        self.invalidate();
    }

    /// Replace the easing curve of the pressed ring animation.
    pub fn set_animation_timing(&mut self, timing: TimingFunction) {
        self.pressed_animator.set_timing(timing);
    }

    pub fn is_animating(&self) -> bool {
        self.pressed_animator.is_running()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text_view.set_text(text);
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_view.set_text_color(color);
    }

    /// Label font size in pixels.
    pub fn set_text_size(&mut self, size: f32) {
        self.text_view.set_font_size(size);
    }

    pub fn text_view(&self) -> &TextView {
        &self.text_view
    }

    pub fn image_view(&self) -> &ImageView {
        &self.image_view
    }

    pub fn image_view_mut(&mut self) -> &mut ImageView {
        &mut self.image_view
    }

    pub fn set_image_resource(&mut self, id: ResourceId) {
        self.image_view.set_image_resource(id);
    }

    pub fn set_image_drawable(&mut self, drawable: Option<ImageSource>) {
        self.image_view.set_image_drawable(drawable);
    }

    pub fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
        if !clickable && self.pressed {
            self.set_pressed(false);
        }
    }

    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
        if !focusable {
            self.focused = false;
        }
    }

    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    fn invalidate(&mut self) {
        self.dirty_flags |= ChangeFlags::NEEDS_PAINT;
    }

    fn size_changed(&mut self, width: i32, height: i32) {
        self.size_px = Some((width, height));
        self.geometry = CircleGeometry::new(width, height, self.ring_width);
        log::debug!(
            "CircleButton {:?} resized to {}x{}: {:?}",
            self.widget_id,
            width,
            height,
            self.geometry
        );
        self.invalidate();
    }

    fn hit_test(&self, x: f32, y: f32) -> bool {
        self.geometry
            .contains(x - self.bounds.x, y - self.bounds.y)
    }

    fn perform_click(&mut self) {
        if let Some(callback) = self.on_click.as_mut() {
            callback();
        }
    }

    fn position_children(&mut self) {
        let (x, y) = (self.bounds.x, self.bounds.y);
        self.image_view
            .set_origin(x + self.image_offset.0, y + self.image_offset.1);
        self.text_view
            .set_origin(x + self.text_offset.0, y + self.text_offset.1);
    }
}

fn is_activation_key(key: Key) -> bool {
    matches!(key, Key::Enter | Key::Char(' '))
}

impl Widget for CircleButton {
    fn advance_animations(&mut self, dt: Duration) -> bool {
        if let Some(progress) = self.pressed_animator.advance(dt) {
            log::trace!("CircleButton {:?} ring progress {}", self.widget_id, progress);
            self.set_animation_progress(progress);
        }
        self.pressed_animator.is_running()
    }

    fn layout(&mut self, constraints: Constraints) -> Size {
        let max_width = self
            .layout_width
            .map_or(constraints.max_width, |w| (w as f32).min(constraints.max_width));
        let max_height = self
            .layout_height
            .map_or(constraints.max_height, |h| (h as f32).min(constraints.max_height));

        let icon = self
            .image_view
            .layout(Constraints::new(0.0, 0.0, max_width, max_height));
        let text = self.text_view.layout(Constraints::new(
            0.0,
            0.0,
            max_width,
            (max_height - icon.height).max(0.0),
        ));
        let content = Size::new(icon.width.max(text.width), icon.height + text.height);

        let size = constraints.constrain(Size::new(
            self.layout_width.map_or(content.width, |w| w as f32),
            self.layout_height.map_or(content.height, |h| h as f32),
        ));
        self.bounds.width = size.width;
        self.bounds.height = size.height;

        let size_px = (size.width as i32, size.height as i32);
        if self.size_px != Some(size_px) {
            self.size_changed(size_px.0, size_px.1);
        }

        // Icon over label, the pair centered in both directions
        let top = (size.height - content.height) / 2.0;
        self.image_offset = ((size.width - icon.width) / 2.0, top);
        self.text_offset = ((size.width - text.width) / 2.0, top + icon.height);
        self.position_children();

        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);
        size
    }

    fn paint(&self, ctx: &mut PaintContext) {
        let cx = self.bounds.x + self.geometry.center_x as f32;
        let cy = self.bounds.y + self.geometry.center_y as f32;

        // Ring first so the body covers all of it but the part beyond its edge
        ctx.draw_circle(
            cx,
            cy,
            self.geometry.pressed_ring_radius as f32 + self.animation_progress,
            &self.ring_paint,
        );
        ctx.draw_circle(
            cx,
            cy,
            self.geometry.body_radius(self.ring_width) as f32,
            &self.circle_paint,
        );

        self.image_view.paint(ctx);
        self.text_view.paint(ctx);
    }

    fn event(&mut self, event: &Event) -> EventResponse {
        match *event {
            Event::FocusIn if self.focusable => {
                self.focused = true;
                return EventResponse::Handled;
            }
            Event::FocusOut if self.focused => {
                self.focused = false;
                if self.pressed {
                    self.set_pressed(false);
                }
                return EventResponse::Handled;
            }
            _ => {}
        }

        if !self.clickable {
            return EventResponse::Ignored;
        }

        match *event {
            Event::MouseDown {
                x,
                y,
                button: MouseButton::Left,
            } if self.hit_test(x, y) => {
                self.set_pressed(true);
                EventResponse::Handled
            }
            Event::MouseUp {
                x,
                y,
                button: MouseButton::Left,
            } if self.pressed => {
                self.set_pressed(false);
                if self.hit_test(x, y) {
                    self.perform_click();
                }
                EventResponse::Handled
            }
            Event::MouseMove { x, y } if self.pressed && !self.hit_test(x, y) => {
                self.set_pressed(false);
                EventResponse::Handled
            }
            Event::MouseLeave if self.pressed => {
                self.set_pressed(false);
                EventResponse::Handled
            }
            Event::KeyDown { key } if self.focused && is_activation_key(key) => {
                // Ignore key repeat
                if !self.pressed {
                    self.set_pressed(true);
                }
                EventResponse::Handled
            }
            Event::KeyUp { key } if self.focused && self.pressed && is_activation_key(key) => {
                self.set_pressed(false);
                self.perform_click();
                EventResponse::Handled
            }
            _ => EventResponse::Ignored,
        }
    }

    fn set_origin(&mut self, x: f32, y: f32) {
        self.bounds.x = x;
        self.bounds.y = y;
        self.position_children();
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn id(&self) -> WidgetId {
        self.widget_id
    }

    fn mark_dirty(&mut self, flags: ChangeFlags) {
        self.dirty_flags |= flags;
    }

    fn needs_layout(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_LAYOUT)
            || self.image_view.needs_layout()
            || self.text_view.needs_layout()
    }

    fn needs_paint(&self) -> bool {
        self.dirty_flags.contains(ChangeFlags::NEEDS_PAINT)
            || self.image_view.needs_paint()
            || self.text_view.needs_paint()
    }

    fn clear_dirty(&mut self) {
        self.dirty_flags = ChangeFlags::empty();
        self.image_view.clear_dirty();
        self.text_view.clear_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::DrawCommand;

    fn laid_out(width: f32, height: f32) -> CircleButton {
        let mut button = CircleButton::new(&Context::default());
        button.layout(Constraints::tight(Size::new(width, height)));
        button
    }

    fn circles(button: &CircleButton) -> Vec<(f32, f32, f32, Paint)> {
        let mut ctx = PaintContext::new();
        button.paint(&mut ctx);
        ctx.commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle {
                    center,
                    radius,
                    paint,
                } => Some((center.0, center.1, *radius, *paint)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let button = CircleButton::new(&Context::default());
        assert!(!button.is_pressed());
        assert!(button.is_focusable());
        assert!(button.is_clickable());
        assert!(button.needs_paint());
        assert_eq!(button.animation_progress(), 0.0);
        assert!(!button.is_animating());
        assert_eq!(button.circle_paint().style, PaintStyle::Fill);
        assert_eq!(button.ring_paint().style, PaintStyle::Stroke);
        assert!(button.circle_paint().is_anti_alias());
        assert!(button.ring_paint().is_anti_alias());
        assert_eq!(button.ring_paint().stroke_width, 4.0);
        assert_eq!(button.text_view().padding().top, 4.0);
    }

    #[test]
    fn test_paint_order_and_radii() {
        let mut button = laid_out(100.0, 200.0);
        button.set_animation_progress(1.5);

        let circles = circles(&button);
        assert_eq!(circles.len(), 2);

        let (cx, cy, ring_radius, ring_paint) = circles[0];
        assert_eq!((cx, cy), (50.0, 100.0));
        assert_eq!(ring_radius, 44.0 + 1.5);
        assert_eq!(ring_paint.style, PaintStyle::Stroke);

        let (_, _, body_radius, body_paint) = circles[1];
        assert_eq!(body_radius, 46.0);
        assert_eq!(body_paint.style, PaintStyle::Fill);
    }

    #[test]
    fn test_paint_follows_origin() {
        let mut button = laid_out(40.0, 40.0);
        button.set_origin(100.0, 10.0);
        let circles = circles(&button);
        assert_eq!((circles[0].0, circles[0].1), (120.0, 30.0));
    }

    #[test]
    fn test_geometry_recomputed_only_on_size_change() {
        let mut button = laid_out(100.0, 100.0);
        button.clear_dirty();

        button.layout(Constraints::tight(Size::new(100.0, 100.0)));
        assert!(!button.needs_paint());

        button.layout(Constraints::tight(Size::new(60.0, 80.0)));
        assert!(button.needs_paint());
        assert_eq!(*button.geometry(), CircleGeometry::new(60, 80, 4));
    }

    #[test]
    fn test_press_switches_fill_color() {
        let mut button = CircleButton::new(&Context::default());
        button.set_color(Color::from_hex(0x204060));

        button.set_pressed(true);
        assert_eq!(button.circle_paint().color, Color::from_hex(0x2A4A6A));

        button.set_pressed(false);
        assert_eq!(button.circle_paint().color, Color::from_hex(0x204060));
    }

    #[test]
    fn test_set_color_while_pressed_shows_base_color() {
        let mut button = CircleButton::new(&Context::default());
        button.set_pressed(true);
        button.set_color(Color::from_hex(0x101010));
        assert_eq!(button.circle_paint().color, Color::from_hex(0x101010));
        assert_eq!(button.highlight_color(), Color::from_hex(0x1A1A1A));
    }

    #[test]
    fn test_release_when_already_released_is_a_no_op() {
        let mut button = laid_out(100.0, 100.0);
        button.clear_dirty();

        button.set_pressed(false);
        assert!(!button.needs_paint());
        assert!(!button.is_animating());
        assert!(!button.advance_animations(Duration::from_millis(16)));
    }

    #[test]
    fn test_repress_at_rest_restores_highlight_without_animating() {
        let mut button = laid_out(100.0, 100.0);
        button.set_pressed(true);
        while button.advance_animations(Duration::from_millis(16)) {}
        button.set_color(Color::from_hex(0x101010));
        button.clear_dirty();

        button.set_pressed(true);
        assert_eq!(button.circle_paint().color, Color::from_hex(0x1A1A1A));
        assert!(button.needs_paint());
        assert!(!button.is_animating());
        assert_eq!(button.animation_progress(), 4.0);
    }

    #[test]
    fn test_text_size_reaches_label() {
        let mut button = CircleButton::new(&Context::default());
        button.set_text("Play");
        button.set_text_size(24.0);
        assert_eq!(button.text_view().font_size(), 24.0);
        assert!(button.needs_layout());
    }

    #[test]
    fn test_set_size_limits_icon() {
        let mut button = CircleButton::new(&Context::default());
        button.set_size_wh(90, 61);
        assert_eq!(button.layout_size(), (Some(90), Some(61)));
        assert_eq!(button.image_view().max_width(), 30.0);
        assert_eq!(button.image_view().max_height(), 20.0);
        assert!(button.needs_layout());

        let size = button.layout(Constraints::unbounded());
        assert_eq!(size, Size::new(90.0, 61.0));
    }

    #[test]
    fn test_set_size_respects_constraints() {
        let mut button = CircleButton::new(&Context::default());
        button.set_size(200);
        let size = button.layout(Constraints::loose(Size::new(120.0, 300.0)));
        assert_eq!(size, Size::new(120.0, 200.0));
        assert_eq!(button.geometry().outer_radius, 60);
    }

    #[test]
    fn test_mouse_press_and_click() {
        use std::cell::Cell;
        use std::rc::Rc;

        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let mut button =
            CircleButton::new(&Context::default()).on_click(move || counter.set(counter.get() + 1));
        button.layout(Constraints::tight(Size::new(100.0, 100.0)));

        let down = Event::MouseDown {
            x: 50.0,
            y: 50.0,
            button: MouseButton::Left,
        };
        assert_eq!(button.event(&down), EventResponse::Handled);
        assert!(button.is_pressed());

        let up = Event::MouseUp {
            x: 55.0,
            y: 45.0,
            button: MouseButton::Left,
        };
        assert_eq!(button.event(&up), EventResponse::Handled);
        assert!(!button.is_pressed());
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_press_outside_circle_is_ignored() {
        let mut button = laid_out(100.0, 100.0);
        let corner = Event::MouseDown {
            x: 3.0,
            y: 3.0,
            button: MouseButton::Left,
        };
        assert_eq!(button.event(&corner), EventResponse::Ignored);
        assert!(!button.is_pressed());

        let right = Event::MouseDown {
            x: 50.0,
            y: 50.0,
            button: MouseButton::Right,
        };
        assert_eq!(button.event(&right), EventResponse::Ignored);
    }

    #[test]
    fn test_dragging_out_cancels_without_click() {
        use std::cell::Cell;
        use std::rc::Rc;

        let clicked = Rc::new(Cell::new(false));
        let flag = clicked.clone();
        let mut button = CircleButton::new(&Context::default()).on_click(move || flag.set(true));
        button.layout(Constraints::tight(Size::new(100.0, 100.0)));

        button.event(&Event::MouseDown {
            x: 50.0,
            y: 50.0,
            button: MouseButton::Left,
        });
        button.event(&Event::MouseMove { x: 99.0, y: 99.0 });
        assert!(!button.is_pressed());

        let response = button.event(&Event::MouseUp {
            x: 50.0,
            y: 50.0,
            button: MouseButton::Left,
        });
        assert_eq!(response, EventResponse::Ignored);
        assert!(!clicked.get());

        button.event(&Event::MouseDown {
            x: 50.0,
            y: 50.0,
            button: MouseButton::Left,
        });
        button.event(&Event::MouseLeave);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_keyboard_activation_needs_focus() {
        let mut button = laid_out(100.0, 100.0);
        let enter = Event::KeyDown { key: Key::Enter };

        assert_eq!(button.event(&enter), EventResponse::Ignored);

        button.event(&Event::FocusIn);
        assert!(button.is_focused());
        assert_eq!(button.event(&enter), EventResponse::Handled);
        assert!(button.is_pressed());

        button.event(&Event::KeyUp { key: Key::Enter });
        assert!(!button.is_pressed());

        button.event(&Event::KeyDown { key: Key::Char(' ') });
        assert!(button.is_pressed());
        button.event(&Event::FocusOut);
        assert!(!button.is_pressed());
        assert!(!button.is_focused());
    }

    #[test]
    fn test_not_focusable() {
        let mut button = laid_out(100.0, 100.0);
        button.set_focusable(false);
        assert_eq!(button.event(&Event::FocusIn), EventResponse::Ignored);
        assert!(!button.is_focused());
    }

    #[test]
    fn test_not_clickable_ignores_input() {
        let mut button = laid_out(100.0, 100.0);
        button.set_pressed(true);
        button.set_clickable(false);
        assert!(!button.is_pressed());

        let down = Event::MouseDown {
            x: 50.0,
            y: 50.0,
            button: MouseButton::Left,
        };
        assert_eq!(button.event(&down), EventResponse::Ignored);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_timing_can_be_replaced() {
        let mut button = CircleButton::new(&Context::default());
        button.set_animation_timing(TimingFunction::Linear);
        button.set_pressed(true);
        button.advance_animations(Duration::from_millis(100));
        assert!((button.animation_progress() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_children_dirty_bubbles_up() {
        let mut button = laid_out(100.0, 100.0);
        button.clear_dirty();
        assert!(!button.needs_layout());

        button.set_text("Next");
        assert!(button.needs_layout());
    }
}
