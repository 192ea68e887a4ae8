pub mod circle_button;
pub mod image;
pub mod text;
pub mod widget;

/// Macro to implement common dirty flag methods for leaf widgets.
///
/// CircleButton keeps its custom implementation because it recurses to children.
macro_rules! impl_dirty_flags {
    () => {
        fn mark_dirty(&mut self, flags: crate::invalidation::ChangeFlags) {
            self.dirty_flags |= flags;
        }
        fn needs_layout(&self) -> bool {
            self.dirty_flags
                .contains(crate::invalidation::ChangeFlags::NEEDS_LAYOUT)
        }
        fn needs_paint(&self) -> bool {
            self.dirty_flags
                .contains(crate::invalidation::ChangeFlags::NEEDS_PAINT)
        }
        fn clear_dirty(&mut self) {
            self.dirty_flags = crate::invalidation::ChangeFlags::empty();
        }
    };
}
pub(crate) use impl_dirty_flags;

pub use circle_button::{ButtonStyle, CircleButton, CircleGeometry};
pub use image::{ImageSource, ImageView};
pub use text::TextView;
pub use widget::{Color, Event, EventResponse, Key, MouseButton, Padding, Rect, Widget};
