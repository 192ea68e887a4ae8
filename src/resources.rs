//! Host resources shared by every widget created from one [`Context`].

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use thiserror::Error;

use crate::attributes::AttributeSet;
use crate::widgets::image::ImageSource;

/// Duration of short UI animations such as press feedback.
pub const DEFAULT_SHORT_ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Identifier of a registered drawable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#0x{:08x}", self.0)
    }
}

/// Identifier of a registered style (a set of default attributes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId(pub u32);

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#0x{:08x}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResourceError {
    #[error("resource {0} not found")]
    NotFound(ResourceId),
}

/// Screen density information used to resolve dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    /// Pixels per density-independent pixel
    pub density: f32,
    /// Pixels per scale-independent pixel (density times user font scale)
    pub scaled_density: f32,
    /// Physical pixels per inch along the x axis
    pub xdpi: f32,
}

impl DisplayMetrics {
    pub fn with_density(density: f32) -> Self {
        Self {
            density,
            scaled_density: density,
            xdpi: 160.0 * density,
        }
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::with_density(1.0)
    }
}

pub struct Resources {
    display_metrics: DisplayMetrics,
    short_animation_duration: Duration,
    drawables: HashMap<ResourceId, ImageSource>,
    styles: HashMap<StyleId, AttributeSet>,
}

impl Resources {
    pub fn new(display_metrics: DisplayMetrics) -> Self {
        Self {
            display_metrics,
            short_animation_duration: DEFAULT_SHORT_ANIMATION_DURATION,
            drawables: HashMap::new(),
            styles: HashMap::new(),
        }
    }

    pub fn display_metrics(&self) -> &DisplayMetrics {
        &self.display_metrics
    }

    pub fn short_animation_duration(&self) -> Duration {
        self.short_animation_duration
    }

    pub fn set_short_animation_duration(&mut self, duration: Duration) {
        self.short_animation_duration = duration;
    }

    pub fn register_drawable(&mut self, id: ResourceId, source: ImageSource) {
        self.drawables.insert(id, source);
    }

    pub fn drawable(&self, id: ResourceId) -> Result<&ImageSource, ResourceError> {
        self.drawables.get(&id).ok_or(ResourceError::NotFound(id))
    }

    pub fn register_style(&mut self, id: StyleId, attributes: AttributeSet) {
        self.styles.insert(id, attributes);
    }

    pub fn style(&self, id: StyleId) -> Option<&AttributeSet> {
        self.styles.get(&id)
    }
}

impl Default for Resources {
    fn default() -> Self {
        Self::new(DisplayMetrics::default())
    }
}

/// Cheap handle to the resources widgets are created with.
#[derive(Clone, Default)]
pub struct Context {
    resources: Rc<Resources>,
}

impl Context {
    pub fn new(resources: Resources) -> Self {
        Self {
            resources: Rc::new(resources),
        }
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }
}
