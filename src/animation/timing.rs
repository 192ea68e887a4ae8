//! Easing curves for animators.
//!
//! A [`TimingFunction`] maps the linear fraction of elapsed time (0 to 1) to
//! the fraction of the value change applied at that point.
//!
//! [`TimingFunction::AccelerateDecelerate`] is the default and drives the
//! pressed ring of a [`CircleButton`](crate::widgets::CircleButton). Any other
//! curve can be swapped in:
//!
//! ```
//! use std::time::Duration;
//! use circle_button::prelude::*;
//!
//! let ctx = Context::default();
//! let mut button = CircleButton::new(&ctx);
//! button.set_size(64);
//! button.layout(Constraints::unbounded());
//!
//! button.set_animation_timing(TimingFunction::EaseOut);
//! button.set_pressed(true);
//! button.advance_animations(Duration::from_millis(100));
//!
//! // Halfway through the default 200 ms, ease-out is already three quarters in
//! let expected = button.ring_width() as f32 * 0.75;
//! assert!((button.animation_progress() - expected).abs() < 1e-4);
//! ```

use std::f32::consts::PI;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub enum TimingFunction {
    /// Constant speed
    Linear,
    /// Quadratic, slow start
    EaseIn,
    /// Quadratic, slow end
    EaseOut,
    /// Quadratic on both halves
    EaseInOut,
    /// Half a cosine period: gentle start and end
    #[default]
    AccelerateDecelerate,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Eased fraction for the time fraction `t`.
    pub fn evaluate(&self, t: f32) -> f32 {
        match self {
            TimingFunction::Linear => t,
            TimingFunction::EaseIn => t * t,
            TimingFunction::EaseOut => t * (2.0 - t),
            TimingFunction::EaseInOut if t < 0.5 => 2.0 * t * t,
            TimingFunction::EaseInOut => -1.0 + (4.0 - 2.0 * t) * t,
            TimingFunction::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                let s = solve_bezier_param(t, *x1, *x2);
                bezier_component(s, *y1, *y2)
            }
            TimingFunction::Custom(f) => f(t),
        }
    }

    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }
}

impl fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimingFunction::Linear => "Linear",
            TimingFunction::EaseIn => "EaseIn",
            TimingFunction::EaseOut => "EaseOut",
            TimingFunction::EaseInOut => "EaseInOut",
            TimingFunction::AccelerateDecelerate => "AccelerateDecelerate",
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                return f
                    .debug_tuple("CubicBezier")
                    .field(x1)
                    .field(y1)
                    .field(x2)
                    .field(y2)
                    .finish();
            }
            TimingFunction::Custom(_) => "Custom",
        };
        f.write_str(name)
    }
}

/// One axis of a cubic bezier from (0, 0) to (1, 1) with control values `p1`, `p2`.
fn bezier_component(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
}

fn bezier_derivative(s: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Newton-Raphson for the curve parameter whose x equals `x`.
/// Assumes `x1` and `x2` lie in [0, 1].
fn solve_bezier_param(x: f32, x1: f32, x2: f32) -> f32 {
    let mut s = x;
    for _ in 0..8 {
        let slope = bezier_derivative(s, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= (bezier_component(s, x1, x2) - x) / slope;
    }
    s
}
