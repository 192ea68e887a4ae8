//! Icon element: displays a raster or SVG image.
//!
//! The displayed size is the image's intrinsic size, scaled down (never up)
//! to fit both the max width/height and the incoming constraints. The aspect
//! ratio is always preserved.

use std::path::PathBuf;
use std::sync::Arc;

use crate::invalidation::{ChangeFlags, WidgetId};
use crate::layout::{Constraints, Size};
use crate::renderer::PaintContext;
use crate::resources::{Context, ResourceId};

use super::impl_dirty_flags;
use super::widget::{Rect, Widget};

/// Source for an image - can be a file path or in-memory bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Raster image from a file path (PNG, JPEG, GIF, WebP)
    Path(PathBuf),
    /// Raster image from in-memory bytes
    Bytes(Arc<[u8]>),
    /// SVG from a file path
    SvgPath(PathBuf),
    /// SVG from in-memory bytes
    SvgBytes(Arc<[u8]>),
}

impl ImageSource {
    /// Check if this is an SVG source
    pub fn is_svg(&self) -> bool {
        matches!(self, ImageSource::SvgPath(_) | ImageSource::SvgBytes(_))
    }
}

impl From<&str> for ImageSource {
    fn from(path: &str) -> Self {
        ImageSource::from(PathBuf::from(path))
    }
}

impl From<PathBuf> for ImageSource {
    fn from(path: PathBuf) -> Self {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"))
        {
            ImageSource::SvgPath(path)
        } else {
            ImageSource::Path(path)
        }
    }
}

pub struct ImageView {
    widget_id: WidgetId,
    dirty_flags: ChangeFlags,
    context: Context,
    source: Option<ImageSource>,
    max_width: f32,
    max_height: f32,
    bounds: Rect,
    /// Cached intrinsic size of `cached_source`
    intrinsic_size: Option<(u32, u32)>,
    /// Source the intrinsic size was read from
    cached_source: Option<ImageSource>,
}

impl ImageView {
    pub fn new(context: &Context) -> Self {
        Self {
            widget_id: WidgetId::next(),
            dirty_flags: ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT,
            context: context.clone(),
            source: None,
            max_width: f32::INFINITY,
            max_height: f32::INFINITY,
            bounds: Rect::default(),
            intrinsic_size: None,
            cached_source: None,
        }
    }

    /// Show an image, or clear the icon with `None`.
    pub fn set_image_drawable(&mut self, source: Option<ImageSource>) {
        if self.source != source {
            self.source = source;
            self.mark_dirty(ChangeFlags::NEEDS_LAYOUT | ChangeFlags::NEEDS_PAINT);
        }
    }

    /// Show the drawable registered under `id`.
    ///
    /// An unknown id is logged and clears the icon.
    pub fn set_image_resource(&mut self, id: ResourceId) {
        let source = match self.context.resources().drawable(id) {
            Ok(source) => Some(source.clone()),
            Err(err) => {
                log::warn!("Unable to load image resource: {err}");
                None
            }
        };
        self.set_image_drawable(source);
    }

    pub fn source(&self) -> Option<&ImageSource> {
        self.source.as_ref()
    }

    pub fn set_max_width(&mut self, max_width: f32) {
        self.max_width = max_width;
        self.mark_dirty(ChangeFlags::NEEDS_LAYOUT);
    }

    pub fn set_max_height(&mut self, max_height: f32) {
        self.max_height = max_height;
        self.mark_dirty(ChangeFlags::NEEDS_LAYOUT);
    }

    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    pub fn max_height(&self) -> f32 {
        self.max_height
    }

    /// Get the current intrinsic size if known.
    pub fn intrinsic_size(&self) -> Option<(u32, u32)> {
        self.intrinsic_size
    }

    fn calculate_size(&self, constraints: &Constraints) -> Size {
        let Some((w, h)) = self.intrinsic_size.filter(|(w, h)| *w > 0 && *h > 0) else {
            return constraints.constrain(Size::zero());
        };
        let (w, h) = (w as f32, h as f32);

        let max_w = self.max_width.min(constraints.max_width);
        let max_h = self.max_height.min(constraints.max_height);
        let scale = 1.0f32.min(max_w / w).min(max_h / h).max(0.0);

        constraints.constrain(Size::new(w * scale, h * scale))
    }
}

impl Widget for ImageView {
    fn layout(&mut self, constraints: Constraints) -> Size {
        if self.cached_source != self.source {
            self.intrinsic_size = self
                .source
                .as_ref()
                .and_then(crate::image_metadata::get_intrinsic_size);
            self.cached_source = self.source.clone();
        }

        let size = self.calculate_size(&constraints);
        self.bounds.width = size.width;
        self.bounds.height = size.height;
        self.dirty_flags.remove(ChangeFlags::NEEDS_LAYOUT);

        size
    }

    fn paint(&self, ctx: &mut PaintContext) {
        if self.bounds.width <= 0.0 || self.bounds.height <= 0.0 {
            return;
        }
        if let Some(ref source) = self.cached_source {
            ctx.draw_image(source.clone(), self.bounds);
        }
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
