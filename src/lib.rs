//! A circular button widget with an icon, a text label and an animated
//! pressed ring.
//!
//! The crate is headless: widgets lay themselves out against [`layout::Constraints`],
//! react to input [`widgets::Event`]s, advance their animations from host frame
//! ticks and record what to draw into a [`renderer::PaintContext`]. Turning the
//! recorded [`renderer::DrawCommand`]s into pixels is up to the host.
//!
//! A host frame typically looks like this:
//!
//! ```
//! use std::time::Duration;
//! use circle_button::prelude::*;
//!
//! let ctx = Context::default();
//! let mut button = CircleButton::new(&ctx);
//! button.set_size(64);
//!
//! // One frame
//! let animating = button.advance_animations(Duration::from_millis(16));
//! if button.needs_layout() {
//!     button.layout(Constraints::unbounded());
//!     button.set_origin(0.0, 0.0);
//! }
//! let mut paint = PaintContext::new();
//! button.paint(&mut paint);
//! button.clear_dirty();
//!
//! assert!(!animating);
//! assert_eq!(paint.commands().len(), 2);
//! ```

pub mod animation;
pub mod attributes;
pub mod image_metadata;
pub mod invalidation;
pub mod layout;
pub mod renderer;
pub mod resources;
pub mod widgets;

pub mod prelude {
    pub use crate::animation::{FloatAnimator, TimingFunction};
    pub use crate::attributes::{AttrValue, AttributeError, AttributeSet, Dimension};
    pub use crate::layout::{Constraints, Size};
    pub use crate::renderer::{DrawCommand, Paint, PaintContext, PaintStyle};
    pub use crate::resources::{Context, DisplayMetrics, ResourceId, Resources, StyleId};
    pub use crate::widgets::{
        CircleButton, Color, Event, EventResponse, ImageSource, ImageView, Key, MouseButton,
        Rect, TextView, Widget,
    };
}
