use folio_domain::content::{Skill, SkillCategory};
use folio_scene::Vec3;

pub const CLOUD_RADIUS: f64 = 11.0;
/// Words closer than this are joined by a faint line.
pub const CONNECTION_DISTANCE: f64 = 8.0;
/// Auto-rotation about the vertical axis, per frame.
pub const ROTATION_PER_FRAME: f64 = 0.001;

#[must_use]
pub const fn category_color(category: SkillCategory) -> &'static str {
    match category {
        SkillCategory::Core => "#38bdf8",
        SkillCategory::Tech => "#94a3b8",
        SkillCategory::Tool => "#e2e8f0",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CloudWord {
    pub name: String,
    pub position: Vec3,
    pub color: &'static str,
}

/// Skills spread evenly over a sphere, slowly spinning.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillCloud {
    words: Vec<CloudWord>,
    connections: Vec<(usize, usize)>,
    rotation: f64,
}

impl SkillCloud {
    /// Lays out every skill on a Fibonacci sphere of `radius`.
    #[must_use]
    pub fn new(skills: &[Skill], radius: f64) -> Self {
        let golden = std::f64::consts::PI * (3.0 - 5.0_f64.sqrt());
        let last = skills.len().saturating_sub(1);

        let words: Vec<CloudWord> = skills
            .iter()
            .enumerate()
            .map(|(i, skill)| {
                let y = if last == 0 { 0.0 } else { 1.0 - (i as f64 / last as f64) * 2.0 };
                CloudWord {
                    name: skill.name.clone(),
                    position: Vec3::from_spherical(radius, y.acos(), golden * i as f64),
                    color: category_color(skill.category),
                }
            })
            .collect();

        let mut connections = Vec::new();
        for (i, a) in words.iter().enumerate() {
            for (j, b) in words.iter().enumerate().skip(i + 1) {
                if a.position.distance(b.position) < CONNECTION_DISTANCE {
                    connections.push((i, j));
                }
            }
        }

        Self { words, connections, rotation: 0.0 }
    }

    /// Advances the auto-rotation by `frames` display frames.
    pub fn spin(&mut self, frames: f64) {
        self.rotation = ROTATION_PER_FRAME.mul_add(frames, self.rotation) % std::f64::consts::TAU;
    }

    #[must_use]
    pub fn words(&self) -> &[CloudWord] {
        &self.words
    }

    /// Index pairs into [`words`](Self::words), each pair once with `i < j`.
    #[must_use]
    pub fn connections(&self) -> &[(usize, usize)] {
        &self.connections
    }

    #[must_use]
    pub const fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Word position after the current rotation.
    #[must_use]
    pub fn rotated(&self, index: usize) -> Option<Vec3> {
        self.words.get(index).map(|w| w.position.rotate_y(self.rotation))
    }
}
