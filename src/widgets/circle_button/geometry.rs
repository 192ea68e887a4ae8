/// Circle layout of a button, in whole pixels relative to its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CircleGeometry {
    pub center_x: i32,
    pub center_y: i32,
    /// Half the shorter side
    pub outer_radius: i32,
    /// Radius of the pressed ring when the animation is at rest
    pub pressed_ring_radius: i32,
}

impl CircleGeometry {
    pub fn new(width: i32, height: i32, ring_width: i32) -> Self {
        let outer_radius = width.min(height) / 2;
        Self {
            center_x: width / 2,
            center_y: height / 2,
            outer_radius,
            pressed_ring_radius: outer_radius - ring_width - ring_width / 2,
        }
    }

    /// Radius of the filled body, inset by the ring width.
    pub fn body_radius(&self, ring_width: i32) -> i32 {
        self.outer_radius - ring_width
    }

    /// Whether a local point lies inside the outer circle.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.center_x as f32;
        let dy = y - self.center_y as f32;
        let r = self.outer_radius as f32;
        dx * dx + dy * dy <= r * r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_box() {
        let g = CircleGeometry::new(100, 200, 4);
        assert_eq!(g.center_x, 50);
        assert_eq!(g.center_y, 100);
        assert_eq!(g.outer_radius, 50);
        assert_eq!(g.pressed_ring_radius, 50 - 4 - 2);
        assert_eq!(g.body_radius(4), 46);
    }

    #[test]
    fn test_odd_sizes_use_integer_halves() {
        let g = CircleGeometry::new(81, 63, 5);
        assert_eq!((g.center_x, g.center_y), (40, 31));
        assert_eq!(g.outer_radius, 31);
        assert_eq!(g.pressed_ring_radius, 31 - 5 - 2);
    }

    #[test]
    fn test_depends_only_on_inputs() {
        let first = CircleGeometry::new(300, 120, 6);
        let _ = CircleGeometry::new(10, 10, 6);
        assert_eq!(CircleGeometry::new(300, 120, 6), first);
    }

    #[test]
    fn test_contains() {
        let g = CircleGeometry::new(100, 100, 4);
        assert!(g.contains(50.0, 50.0));
        assert!(g.contains(50.0, 0.0));
        assert!(!g.contains(2.0, 2.0));
        assert!(!g.contains(150.0, 50.0));
    }
}
