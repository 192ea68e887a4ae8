//! Time-sliced property animation.
//!
//! An [`Animator`] interpolates between a start and an end value over a fixed
//! duration. It owns no clock: the host feeds it the time elapsed since the
//! previous frame through [`Animator::advance`] and writes the returned value
//! into whatever property it drives.
//!
//! Starting an animator that is already running rewinds it. There is no
//! queueing; the most recent `set_values` + `start` pair wins.

use std::time::Duration;

use super::{Animatable, TimingFunction};

pub struct Animator<T: Animatable> {
    from: T,
    to: T,
    current: T,
    duration: Duration,
    elapsed: Duration,
    timing: TimingFunction,
    running: bool,
}

/// Animator for a single float property.
pub type FloatAnimator = Animator<f32>;

impl<T: Animatable> Animator<T> {
    /// Create an idle animator that holds `from` and will move to `to` once started.
    pub fn new(from: T, to: T, duration: Duration) -> Self {
        Self {
            current: from.clone(),
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            timing: TimingFunction::default(),
            running: false,
        }
    }

    /// Replace the start and end values. Takes effect on the next `start`.
    pub fn set_values(&mut self, from: T, to: T) {
        self.from = from;
        self.to = to;
    }

    pub fn set_timing(&mut self, timing: TimingFunction) {
        self.timing = timing;
    }

    /// Start (or restart) from the beginning. Returns the start value.
    pub fn start(&mut self) -> T {
        self.elapsed = Duration::ZERO;
        self.running = true;
        self.current = self.from.clone();
        self.current.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Most recently computed value.
    pub fn value(&self) -> T {
        self.current.clone()
    }

    /// Advance by one frame. Returns the new value, or `None` when idle.
    ///
    /// The frame that reaches the duration yields exactly the end value and
    /// leaves the animator idle.
    pub fn advance(&mut self, dt: Duration) -> Option<T> {
        if !self.running {
            return None;
        }

        self.elapsed = self.elapsed.saturating_add(dt);

        if self.elapsed >= self.duration {
            self.running = false;
            self.current = self.to.clone();
        } else {
            let t = self.elapsed.as_secs_f32() / self.duration.as_secs_f32();
            let eased = self.timing.evaluate(t);
            self.current = T::lerp(&self.from, &self.to, eased);
        }

        Some(self.current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(from: f32, to: f32, ms: u64) -> FloatAnimator {
        let mut animator = FloatAnimator::new(from, to, Duration::from_millis(ms));
        animator.set_timing(TimingFunction::Linear);
        animator
    }

    #[test]
    fn test_idle_until_started() {
        let mut animator = linear(0.0, 10.0, 100);
        assert!(!animator.is_running());
        assert_eq!(animator.advance(Duration::from_millis(16)), None);
        assert_eq!(animator.value(), 0.0);
    }

    #[test]
    fn test_linear_progression() {
        let mut animator = linear(0.0, 10.0, 100);
        assert_eq!(animator.start(), 0.0);

        let v = animator.advance(Duration::from_millis(50)).unwrap();
        assert!((v - 5.0).abs() < 1e-4);
        assert!(animator.is_running());

        let v = animator.advance(Duration::from_millis(50)).unwrap();
        assert_eq!(v, 10.0);
        assert!(!animator.is_running());
    }

    #[test]
    fn test_overshooting_frame_lands_on_end_value() {
        let mut animator = linear(4.0, 0.0, 100);
        animator.start();
        assert_eq!(animator.advance(Duration::from_millis(500)), Some(0.0));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let mut animator = linear(0.0, 8.0, 0);
        animator.start();
        assert_eq!(animator.advance(Duration::ZERO), Some(8.0));
        assert!(!animator.is_running());
    }

    #[test]
    fn test_restart_replaces_previous_motion() {
        let mut animator = linear(0.0, 10.0, 100);
        animator.start();
        let mid = animator.advance(Duration::from_millis(30)).unwrap();

        animator.set_values(mid, 0.0);
        assert_eq!(animator.start(), mid);
        let v = animator.advance(Duration::from_millis(50)).unwrap();
        assert!(v < mid);
        assert_eq!(animator.advance(Duration::from_millis(50)), Some(0.0));
    }
}
