use crate::math::Vec3;
use folio_kernel::entropy::Entropy;

/// A wireframe cube drifting on a slow Lissajous-like orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct DataNode {
    pub t: f64,
    pub factor: f64,
    pub speed: f64,
    pub anchor: Vec3,
}

impl DataNode {
    fn random<E: Entropy + ?Sized>(entropy: &mut E) -> Self {
        Self {
            t: entropy.between(0.0, 100.0),
            factor: entropy.between(20.0, 120.0),
            speed: 0.005 + entropy.unit() / 500.0,
            anchor: Vec3::new(
                entropy.between(-50.0, 50.0),
                entropy.between(-50.0, 50.0),
                entropy.between(-50.0, 50.0),
            ),
        }
    }

    /// Current position on the orbit.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let t = self.t;
        let f = self.factor;
        let wobble = Vec3::new(
            ((t / 10.0) * f).cos() + (t.sin() * f) / 10.0,
            ((t / 10.0) * f).sin() + ((t * 2.0).cos() * f) / 10.0,
            ((t / 10.0) * f).cos() + ((t * 3.0).sin() * f) / 10.0,
        );
        self.anchor + wobble
    }

    /// Spin about the vertical axis.
    #[must_use]
    pub fn yaw(&self) -> f64 {
        self.t * 0.5
    }
}

/// Ambient cloud of data nodes behind the whole page.
#[derive(Debug, Clone, PartialEq)]
pub struct DataField {
    nodes: Vec<DataNode>,
}

impl DataField {
    pub const DEFAULT_COUNT: usize = 80;

    #[must_use]
    pub fn new<E: Entropy + ?Sized>(count: usize, entropy: &mut E) -> Self {
        Self { nodes: (0..count).map(|_| DataNode::random(entropy)).collect() }
    }

    /// Advances every node by one frame.
    pub fn step(&mut self) {
        for node in &mut self.nodes {
            node.t += node.speed / 2.0;
        }
    }

    #[must_use]
    pub fn nodes(&self) -> &[DataNode] {
        &self.nodes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Sphere,
    Cube,
}

/// Large, faint structure floating in the background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatShape {
    pub kind: ShapeKind,
    pub center: Vec3,
    pub size: f64,
    pub speed: f64,
    pub color: &'static str,
    pub opacity: f64,
}

pub const STRATEGIC_SHAPES: [FloatShape; 2] = [
    FloatShape {
        kind: ShapeKind::Sphere,
        center: Vec3::new(18.0, 5.0, -15.0),
        size: 4.0,
        speed: 1.0,
        color: "#1e293b",
        opacity: 0.1,
    },
    FloatShape {
        kind: ShapeKind::Cube,
        center: Vec3::new(-18.0, -8.0, -10.0),
        size: 5.0,
        speed: 1.2,
        color: "#38bdf8",
        opacity: 0.05,
    },
];

/// Line segments of a square grid of `size` units lying in the XZ plane at height `y`.
#[must_use]
pub fn grid_lines(size: f64, divisions: u32, y: f64) -> Vec<(Vec3, Vec3)> {
    let half = size / 2.0;
    let step = size / f64::from(divisions.max(1));
    (0..=divisions.max(1))
        .flat_map(|i| {
            let offset = f64::from(i).mul_add(step, -half);
            [
                (Vec3::new(-half, y, offset), Vec3::new(half, y, offset)),
                (Vec3::new(offset, y, -half), Vec3::new(offset, y, half)),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_kernel::entropy::ScriptedEntropy;

    #[test]
    fn nodes_draw_parameters_from_documented_ranges() {
        let mut entropy = ScriptedEntropy::new([0.0, 0.5, 0.99]);
        let field = DataField::new(DataField::DEFAULT_COUNT, &mut entropy);

        assert_eq!(field.nodes().len(), 80);
        for node in field.nodes() {
            assert!((0.0..100.0).contains(&node.t));
            assert!((20.0..120.0).contains(&node.factor));
            assert!((0.005..0.007).contains(&node.speed));
        }
    }

    #[test]
    fn step_advances_by_half_speed() {
        let mut entropy = ScriptedEntropy::new([0.5]);
        let mut field = DataField::new(3, &mut entropy);
        let before = field.nodes()[0].t;
        field.step();
        let node = &field.nodes()[0];
        assert!((node.t - before - node.speed / 2.0).abs() < 1e-12);
    }

    #[test]
    fn grid_has_two_lines_per_division_edge() {
        let lines = grid_lines(100.0, 60, -10.0);
        assert_eq!(lines.len(), 2 * 61);
        assert!(lines.iter().all(|(a, b)| (a.y - -10.0).abs() < 1e-12 && (b.y - -10.0).abs() < 1e-12));
    }
}
