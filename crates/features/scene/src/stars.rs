use crate::math::Vec3;
use folio_kernel::entropy::Entropy;
use std::f64::consts::TAU;

/// Star count of the hero backdrop, the page's only starfield.
pub const HERO_STARS: usize = 600;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Vec3,
    /// Relative point size in `[0.5, 1.5)`.
    pub size: f64,
}

/// Stars scattered in a spherical shell, fixed once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    /// `count` stars between `radius` and `radius + depth` from the origin.
    #[must_use]
    pub fn new<E: Entropy + ?Sized>(count: usize, radius: f64, depth: f64, entropy: &mut E) -> Self {
        let stars = (0..count)
            .map(|_| {
                let distance = depth.mul_add(entropy.unit(), radius);
                let phi = entropy.between(-1.0, 1.0).acos();
                let theta = TAU * entropy.unit();
                Star { position: Vec3::from_spherical(distance, phi, theta), size: entropy.between(0.5, 1.5) }
            })
            .collect();
        Self { stars }
    }

    /// The hero backdrop: [`HERO_STARS`] stars in a shell from 100 to 150 units.
    #[must_use]
    pub fn hero<E: Entropy + ?Sized>(entropy: &mut E) -> Self {
        Self::new(HERO_STARS, 100.0, 50.0, entropy)
    }

    #[must_use]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_kernel::entropy::SeededEntropy;

    #[test]
    fn stars_stay_inside_shell() {
        let mut entropy = SeededEntropy::new(7);
        let field = Starfield::new(500, 100.0, 50.0, &mut entropy);

        assert_eq!(field.stars().len(), 500);
        for star in field.stars() {
            let r = star.position.length();
            assert!((100.0 - 1e-9..150.0 + 1e-9).contains(&r), "radius {r}");
        }
    }

    #[test]
    fn hero_field_matches_backdrop_shell() {
        let mut a = SeededEntropy::new(3);
        let mut b = SeededEntropy::new(3);

        let hero = Starfield::hero(&mut a);
        assert_eq!(hero.stars().len(), HERO_STARS);
        assert_eq!(hero, Starfield::new(HERO_STARS, 100.0, 50.0, &mut b));
    }
}
