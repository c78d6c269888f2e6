use crate::math::Vec3;

/// Bob and sway applied to a floating object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Float {
    pub rotation: Vec3,
    pub lift: f64,
}

/// Gentle floating motion at `time` seconds.
///
/// Rotation stays within `rotation_intensity / 8` radians and the vertical lift
/// within `float_intensity` units of rest.
#[must_use]
pub fn float_offset(time: f64, speed: f64, rotation_intensity: f64, float_intensity: f64) -> Float {
    let phase = (time / 4.0) * speed;
    let (sin, cos) = phase.sin_cos();
    Float {
        rotation: Vec3::new(cos / 8.0, sin / 8.0, sin / 20.0) * rotation_intensity,
        // sin / 10 remapped from [-0.1, 0.1] onto the same range
        lift: (sin / 10.0) * float_intensity,
    }
}
