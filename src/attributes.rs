//! Attribute bags: named style values supplied by the host at construction.
//!
//! Values can be given already typed ([`Color`], [`Dimension`]) or as raw
//! strings in resource syntax (`"#FF0000"`, `"4dp"`), which are parsed when
//! looked up.
//!
//! ```
//! use circle_button::attributes::AttributeSet;
//! use circle_button::resources::DisplayMetrics;
//! use circle_button::widgets::Color;
//!
//! let attrs = AttributeSet::new()
//!     .with("color", "#3366FF")
//!     .with("pressedRingWidth", "6dp");
//!
//! let metrics = DisplayMetrics::with_density(2.0);
//! assert_eq!(attrs.get_color("color", Color::BLACK).unwrap(), Color::from_hex(0x3366FF));
//! assert_eq!(attrs.get_dimension("pressedRingWidth", 0.0, &metrics).unwrap(), 12.0);
//! ```

use std::collections::HashMap;

use thiserror::Error;

use crate::resources::{DisplayMetrics, StyleId};
use crate::widgets::Color;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AttributeError {
    #[error("attribute `{name}`: `{value}` is not a color")]
    InvalidColor { name: String, value: String },
    #[error("attribute `{name}`: `{value}` is not a dimension")]
    InvalidDimension { name: String, value: String },
    #[error("attribute `{name}` is not a {expected}")]
    TypeMismatch { name: String, expected: &'static str },
    #[error("style {0} is not registered")]
    UnknownStyle(StyleId),
}

/// Unit of a [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionUnit {
    /// Raw pixels
    Px,
    /// Density-independent pixels
    Dp,
    /// Scale-independent pixels (follows the font scale)
    Sp,
    /// Points, 1/72 inch
    Pt,
    /// Inches
    In,
    /// Millimeters
    Mm,
}

/// A length with a unit, resolved to pixels against [`DisplayMetrics`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    pub value: f32,
    pub unit: DimensionUnit,
}

impl Dimension {
    pub const fn new(value: f32, unit: DimensionUnit) -> Self {
        Self { value, unit }
    }

    pub const fn px(value: f32) -> Self {
        Self::new(value, DimensionUnit::Px)
    }

    pub const fn dp(value: f32) -> Self {
        Self::new(value, DimensionUnit::Dp)
    }

    pub fn to_px(&self, metrics: &DisplayMetrics) -> f32 {
        match self.unit {
            DimensionUnit::Px => self.value,
            DimensionUnit::Dp => self.value * metrics.density,
            DimensionUnit::Sp => self.value * metrics.scaled_density,
            DimensionUnit::Pt => self.value * metrics.xdpi / 72.0,
            DimensionUnit::In => self.value * metrics.xdpi,
            DimensionUnit::Mm => self.value * metrics.xdpi / 25.4,
        }
    }

    /// Parse `"<number><unit>"`, e.g. `"4dp"` or `"1.5mm"`. The unit is required.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let split = s.trim_end_matches(|c: char| c.is_ascii_alphabetic()).len();
        let (number, unit) = s.split_at(split);

        let unit = match unit.to_ascii_lowercase().as_str() {
            "px" => DimensionUnit::Px,
            "dp" | "dip" => DimensionUnit::Dp,
            "sp" => DimensionUnit::Sp,
            "pt" => DimensionUnit::Pt,
            "in" => DimensionUnit::In,
            "mm" => DimensionUnit::Mm,
            _ => return None,
        };

        let value: f32 = number.trim().parse().ok()?;
        value.is_finite().then_some(Self::new(value, unit))
    }
}

/// Parse `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB`. Forms without alpha are opaque.
pub fn parse_color(s: &str) -> Option<Color> {
    let hex = s.trim().strip_prefix('#')?;
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let expand = |nibbles: &str| -> Option<u32> {
        let doubled: String = nibbles.chars().flat_map(|c| [c, c]).collect();
        u32::from_str_radix(&doubled, 16).ok()
    };

    let argb = match hex.len() {
        3 => 0xFF00_0000 | expand(hex)?,
        4 => expand(hex)?,
        6 => 0xFF00_0000 | u32::from_str_radix(hex, 16).ok()?,
        8 => u32::from_str_radix(hex, 16).ok()?,
        _ => return None,
    };
    Some(Color::from_argb(argb))
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Color(Color),
    Dimension(Dimension),
    /// Unparsed resource syntax
    Raw(String),
}

impl From<Color> for AttrValue {
    fn from(color: Color) -> Self {
        AttrValue::Color(color)
    }
}

impl From<Dimension> for AttrValue {
    fn from(dimension: Dimension) -> Self {
        AttrValue::Dimension(dimension)
    }
}

impl From<&str> for AttrValue {
    fn from(raw: &str) -> Self {
        AttrValue::Raw(raw.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(raw: String) -> Self {
        AttrValue::Raw(raw)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    values: HashMap<String, AttrValue>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Combine with `defaults`; values in `self` win.
    pub fn merged_over(&self, defaults: &AttributeSet) -> AttributeSet {
        let mut values = defaults.values.clone();
        values.extend(self.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        AttributeSet { values }
    }

    /// Look up a color, or `default` if the attribute is absent.
    pub fn get_color(&self, name: &str, default: Color) -> Result<Color, AttributeError> {
        match self.values.get(name) {
            None => Ok(default),
            Some(AttrValue::Color(color)) => Ok(*color),
            Some(AttrValue::Raw(raw)) => {
                parse_color(raw).ok_or_else(|| AttributeError::InvalidColor {
                    name: name.to_string(),
                    value: raw.clone(),
                })
            }
            Some(AttrValue::Dimension(_)) => Err(AttributeError::TypeMismatch {
                name: name.to_string(),
                expected: "color",
            }),
        }
    }

    /// Look up a dimension resolved to pixels, or `default_px` if absent.
    pub fn get_dimension(
        &self,
        name: &str,
        default_px: f32,
        metrics: &DisplayMetrics,
    ) -> Result<f32, AttributeError> {
        match self.values.get(name) {
            None => Ok(default_px),
            Some(AttrValue::Dimension(dimension)) => Ok(dimension.to_px(metrics)),
            Some(AttrValue::Raw(raw)) => Dimension::parse(raw)
                .map(|d| d.to_px(metrics))
                .ok_or_else(|| AttributeError::InvalidDimension {
                    name: name.to_string(),
                    value: raw.clone(),
                }),
            Some(AttrValue::Color(_)) => Err(AttributeError::TypeMismatch {
                name: name.to_string(),
                expected: "dimension",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_color_forms() {
        assert_eq!(parse_color("#F00"), Some(Color::from_hex(0xFF0000)));
        assert_eq!(parse_color("#8F00"), Some(Color::argb(0x88, 0xFF, 0, 0)));
        assert_eq!(parse_color("#00ff00"), Some(Color::from_hex(0x00FF00)));
        assert_eq!(parse_color("#4B0000FF"), Some(Color::argb(0x4B, 0, 0, 0xFF)));
    }

    #[test]
    fn test_parse_color_rejects_garbage() {
        assert_eq!(parse_color("FF0000"), None);
        assert_eq!(parse_color("#"), None);
        assert_eq!(parse_color("#12345"), None);
        assert_eq!(parse_color("#+12345"), None);
        assert_eq!(parse_color("#GGGGGG"), None);
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(Dimension::parse("4dp"), Some(Dimension::dp(4.0)));
        assert_eq!(Dimension::parse("4dip"), Some(Dimension::dp(4.0)));
        assert_eq!(Dimension::parse(" 12.5PX "), Some(Dimension::px(12.5)));
        assert_eq!(
            Dimension::parse("1in"),
            Some(Dimension::new(1.0, DimensionUnit::In))
        );
        assert_eq!(Dimension::parse("4"), None);
        assert_eq!(Dimension::parse("dp"), None);
        assert_eq!(Dimension::parse("4em"), None);
    }

    #[test]
    fn test_dimension_units_to_px() {
        let metrics = DisplayMetrics {
            density: 2.0,
            scaled_density: 3.0,
            xdpi: 144.0,
        };
        assert_eq!(Dimension::px(5.0).to_px(&metrics), 5.0);
        assert_eq!(Dimension::dp(5.0).to_px(&metrics), 10.0);
        assert_eq!(Dimension::new(5.0, DimensionUnit::Sp).to_px(&metrics), 15.0);
        assert_eq!(Dimension::new(72.0, DimensionUnit::Pt).to_px(&metrics), 144.0);
        assert_eq!(Dimension::new(0.5, DimensionUnit::In).to_px(&metrics), 72.0);
        assert!((Dimension::new(25.4, DimensionUnit::Mm).to_px(&metrics) - 144.0).abs() < 1e-3);
    }

    #[test]
    fn test_missing_attribute_uses_default() {
        let attrs = AttributeSet::new();
        let metrics = DisplayMetrics::default();
        assert_eq!(attrs.get_color("color", Color::BLACK), Ok(Color::BLACK));
        assert_eq!(attrs.get_dimension("imageSpacing", 4.0, &metrics), Ok(4.0));
    }

    #[test]
    fn test_invalid_values_are_errors() {
        let attrs = AttributeSet::new()
            .with("color", "red")
            .with("pressedRingWidth", Color::WHITE);
        let metrics = DisplayMetrics::default();

        assert_eq!(
            attrs.get_color("color", Color::BLACK),
            Err(AttributeError::InvalidColor {
                name: "color".into(),
                value: "red".into()
            })
        );
        assert_eq!(
            attrs.get_dimension("pressedRingWidth", 0.0, &metrics),
            Err(AttributeError::TypeMismatch {
                name: "pressedRingWidth".into(),
                expected: "dimension"
            })
        );
    }

    #[test]
    fn test_merged_over_prefers_explicit_values() {
        let defaults = AttributeSet::new()
            .with("color", "#00FF00")
            .with("imageSpacing", "8dp");
        let explicit = AttributeSet::new().with("color", "#0000FF");

        let merged = explicit.merged_over(&defaults);
        assert_eq!(merged.get("color"), Some(&AttrValue::from("#0000FF")));
        assert_eq!(merged.get("imageSpacing"), Some(&AttrValue::from("8dp")));
    }

    #[test]
    fn test_error_messages() {
        let err = AttributeError::UnknownStyle(StyleId(3));
        assert_eq!(err.to_string(), "style #0x00000003 is not registered");
    }
}
