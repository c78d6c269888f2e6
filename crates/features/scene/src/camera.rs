use crate::math::Vec3;

/// Target SVG viewport in user units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// A point after perspective projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Screen units per world unit at this depth.
    pub scale: f64,
    /// Distance in front of the camera; larger is farther.
    pub depth: f64,
}

/// Pinhole camera tilted about X, looking down its local -Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub pitch: f64,
    pub fov_deg: f64,
    pub viewport: Viewport,
}

const NEAR: f64 = 0.1;

impl Camera {
    /// Projects a world point; `None` when it sits behind the near plane.
    #[must_use]
    pub fn project(&self, point: Vec3) -> Option<Projected> {
        let view = (point - self.position).rotate_x(-self.pitch);
        let depth = -view.z;
        if depth < NEAR {
            return None;
        }

        let focal = (self.viewport.height / 2.0) / (self.fov_deg.to_radians() / 2.0).tan();
        let scale = focal / depth;
        Some(Projected {
            x: view.x.mul_add(scale, self.viewport.width / 2.0),
            y: (-view.y).mul_add(scale, self.viewport.height / 2.0),
            scale,
            depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera {
        Camera {
            position: Vec3::new(0.0, 0.0, 10.0),
            pitch: 0.0,
            fov_deg: 90.0,
            viewport: Viewport { width: 200.0, height: 100.0 },
        }
    }

    #[test]
    fn origin_projects_to_viewport_center() {
        let p = camera().project(Vec3::ZERO).expect("in front");
        assert!((p.x - 100.0).abs() < 1e-9);
        assert!((p.y - 50.0).abs() < 1e-9);
        assert!((p.depth - 10.0).abs() < 1e-9);
    }

    #[test]
    fn up_is_up_on_screen() {
        let p = camera().project(Vec3::new(0.0, 1.0, 0.0)).expect("in front");
        assert!(p.y < 50.0);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        assert_eq!(camera().project(Vec3::new(0.0, 0.0, 12.0)), None);
    }

    #[test]
    fn nearer_points_scale_up() {
        let cam = camera();
        let near = cam.project(Vec3::new(0.0, 0.0, 5.0)).expect("near");
        let far = cam.project(Vec3::new(0.0, 0.0, -5.0)).expect("far");
        assert!(near.scale > far.scale);
    }
}
