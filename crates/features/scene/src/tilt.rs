/// Perspective tilt of a card following the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Rotation about the horizontal axis, degrees.
    pub x: f64,
    /// Rotation about the vertical axis, degrees.
    pub y: f64,
}

impl Tilt {
    /// Tilt for a pointer at (`px`, `py`) inside a `width` × `height` box.
    ///
    /// The pointer is clamped to the box, so the result never exceeds `max_deg`
    /// on either axis. A degenerate box yields no tilt.
    #[must_use]
    pub fn from_pointer(px: f64, py: f64, width: f64, height: f64, max_deg: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        let nx = (px / width).clamp(0.0, 1.0) - 0.5;
        let ny = (py / height).clamp(0.0, 1.0) - 0.5;
        Self { x: ny * -max_deg * 2.0, y: nx * max_deg * 2.0 }
    }

    #[must_use]
    pub fn transform(&self) -> String {
        format!("rotateX({:.2}deg) rotateY({:.2}deg)", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centre_is_flat() {
        assert_eq!(Tilt::from_pointer(50.0, 50.0, 100.0, 100.0, 15.0), Tilt::default());
    }

    #[test]
    fn corners_reach_the_limit() {
        let t = Tilt::from_pointer(0.0, 0.0, 200.0, 100.0, 15.0);
        assert!((t.x - 15.0).abs() < 1e-12);
        assert!((t.y + 15.0).abs() < 1e-12);
    }

    #[test]
    fn pointer_outside_is_clamped() {
        let t = Tilt::from_pointer(500.0, -40.0, 100.0, 100.0, 8.0);
        assert!((t.y - 8.0).abs() < 1e-12);
        assert!((t.x - 8.0).abs() < 1e-12);
    }

    #[test]
    fn zero_sized_box_yields_no_tilt() {
        assert_eq!(Tilt::from_pointer(1.0, 1.0, 0.0, 10.0, 15.0), Tilt::default());
    }
}
