use std::ops::{Add, Mul, Sub};

/// Width of the flat world map in scene units.
pub const MAP_WIDTH: f64 = 12.0;
/// Height of the flat world map in scene units.
pub const MAP_HEIGHT: f64 = 6.0;
/// Cities float just above the map plane.
const MAP_ELEVATION: f64 = 0.02;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Spherical coordinates with `phi` measured from +Y and `theta` around it.
    #[must_use]
    pub fn from_spherical(radius: f64, phi: f64, theta: f64) -> Self {
        let ring = radius * phi.sin();
        Self::new(ring * theta.sin(), radius * phi.cos(), ring * theta.cos())
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.z.mul_add(self.z, self.x.mul_add(self.x, self.y * self.y)).sqrt()
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        (self + other) * 0.5
    }

    #[must_use]
    pub fn rotate_x(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x, self.y.mul_add(cos, -self.z * sin), self.y.mul_add(sin, self.z * cos))
    }

    #[must_use]
    pub fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x.mul_add(cos, self.z * sin), self.y, self.z.mul_add(cos, -self.x * sin))
    }

    #[must_use]
    pub fn rotate_z(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x.mul_add(cos, -self.y * sin), self.x.mul_add(sin, self.y * cos), self.z)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

/// Point at `t` on the quadratic Bézier curve `p0 → p1 → p2`.
#[must_use]
pub fn bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f64) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Equirectangular projection of a coordinate onto the map plane.
#[must_use]
pub fn lat_lng_to_map(lat: f64, lng: f64) -> Vec3 {
    Vec3::new((lng / 180.0) * (MAP_WIDTH / 2.0), (lat / 90.0) * (MAP_HEIGHT / 2.0), MAP_ELEVATION)
}
