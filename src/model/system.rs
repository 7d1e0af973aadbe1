use super::{Planet, Star};

/// The single-star, single-planet system being visualized.
#[derive(Debug, Clone)]
pub struct System {
    pub star: Star,
    pub planet: Planet,
}

impl System {
    pub fn new(star: Star, planet: Planet) -> Self {
        System { star, planet }
    }

    /// Advances the whole system by one frame's worth of time. The planet's
    /// orbit stays centered on the star, so any star drift shifts the path
    /// before the planet steps along it.
    pub fn advance(&mut self, dt: f64) {
        self.star.update(dt);
        if self.planet.orbit().center() != self.star.position() {
            self.planet.set_orbit_center(self.star.position());
        }
        self.planet.update(dt);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use nalgebra::{Point3, Vector3};

    use super::*;
    use crate::astro::orbit::Orbit;
    use crate::model::{PlanetInfo, StarInfo};

    fn test_system(star_velocity: Vector3<f64>) -> System {
        let star = Star::new(
            StarInfo {
                name: "Helios".to_owned(),
                mass: 1.0,
                radius: 1.0,
                temperature: 5800.0,
                luminosity: 100.0,
            },
            Point3::origin(),
            star_velocity,
        );
        let planet = Planet::new(
            PlanetInfo {
                name: "Tellus".to_owned(),
                mass: 0.00315,
                radius: 0.9,
                temperature: 288.0,
                kind: "Terrestrial".to_owned(),
                color: Point3::new(0.2, 0.5, 0.8),
            },
            Orbit::new(5.0, 0.0167, 65.25, star.position()),
        );
        System::new(star, planet)
    }

    #[test]
    fn test_orbit_follows_star() {
        let mut system = test_system(Vector3::new(1.0, 0.0, 0.0));
        system.advance(3.0);

        assert_abs_diff_eq!(system.star.position(), Point3::new(3.0, 0.0, 0.0));
        assert_abs_diff_eq!(system.planet.orbit().center(), system.star.position());

        // The planet's position stays consistent with the shifted orbit.
        assert_abs_diff_eq!(
            system.planet.position(),
            system.planet.orbit().position_at_time(system.planet.elapsed()),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_stationary_star_keeps_path() {
        let mut system = test_system(Vector3::zeros());
        let before = system.planet.path().clone();
        system.advance(1.0);
        assert_eq!(&before, system.planet.path());
    }
}
