use nalgebra::Point3;

use super::path::OrbitPath;
use crate::astro::orbit::Orbit;

/// Segments in the precomputed orbit path. The stored path has one more
/// sample than this, closing the loop.
const ORBIT_SEGMENTS: usize = 360;

// All the immutable info about a planet
#[derive(Debug, Clone)]
pub struct PlanetInfo {
    pub name: String,
    /// Mass in solar masses
    pub mass: f64,
    /// Radius in scene units
    pub radius: f32,
    /// Equilibrium temperature in Kelvin
    pub temperature: f64,
    /// "Terrestrial", "Gas Giant", and friends
    pub kind: String,
    pub color: Point3<f32>,
}

/// A planet on a Keplerian orbit, together with the precomputed path used
/// to draw that orbit.
///
/// The path belongs to this planet alone and is rebuilt whenever one of the
/// shape parameters (eccentricity, orbital distance, period) changes. The
/// position is always derived from the elapsed time; it is never stored
/// apart from the orbit that produces it.
#[derive(Debug, Clone)]
pub struct Planet {
    pub info: PlanetInfo,
    orbit: Orbit,
    path: OrbitPath,
    elapsed: f64,
    position: Point3<f64>,
    traversed: usize,
}

impl Planet {
    pub fn new(info: PlanetInfo, orbit: Orbit) -> Self {
        let path = OrbitPath::generate(&orbit, ORBIT_SEGMENTS);
        let position = orbit.position_at_time(0.0);
        Planet {
            info,
            orbit,
            path,
            elapsed: 0.0,
            position,
            traversed: 0,
        }
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    pub fn path(&self) -> &OrbitPath {
        &self.path
    }

    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Time elapsed within the current revolution, in [0, period).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// How far into the path the planet has gotten this revolution, as an
    /// index in [0, path_len). Used to draw the traveled part of the orbit
    /// differently from the rest of the loop.
    pub fn traversed_index(&self) -> usize {
        self.traversed
    }

    /// Advances the planet by `dt`, wrapping the elapsed time back into
    /// [0, period) at the end of every revolution.
    pub fn update(&mut self, dt: f64) {
        self.elapsed = (self.elapsed + dt).rem_euclid(self.orbit.period());
        self.recompute_derived();
    }

    pub fn set_eccentricity(&mut self, eccentricity: f64) {
        self.orbit.set_eccentricity(eccentricity);
        self.regenerate_path();
    }

    pub fn set_orbital_distance(&mut self, distance: f64) {
        self.orbit.set_semimajor_axis(distance);
        self.regenerate_path();
    }

    pub fn set_orbital_period(&mut self, period: f64) {
        self.orbit.set_period(period);
        self.regenerate_path();
    }

    /// Re-centers the orbit. The path moves rigidly with the center, so the
    /// stored samples are shifted instead of re-solved; the result is the
    /// same as a full regeneration.
    pub fn set_orbit_center(&mut self, center: Point3<f64>) {
        let delta = center - self.orbit.center();
        self.orbit.set_center(center);
        self.path.translate(delta);
        self.position += delta;
    }

    fn regenerate_path(&mut self) {
        self.path = OrbitPath::generate(&self.orbit, ORBIT_SEGMENTS);
        self.elapsed = self.elapsed.rem_euclid(self.orbit.period());
        self.recompute_derived();
    }

    fn recompute_derived(&mut self) {
        self.position = self.orbit.position_at_time(self.elapsed);
        let len = self.path.len();
        let index = (self.elapsed / self.orbit.period() * len as f64) as usize;
        self.traversed = usize::min(index, len - 1);
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::consts::{TELLUS_ECCENTRICITY, TELLUS_ORBIT_DISTANCE, TELLUS_ORBIT_PERIOD};

    fn test_planet() -> Planet {
        let info = PlanetInfo {
            name: "Tellus".to_owned(),
            mass: 0.00315,
            radius: 0.9,
            temperature: 288.0,
            kind: "Terrestrial".to_owned(),
            color: Point3::new(0.2, 0.5, 0.8),
        };
        let orbit = Orbit::new(
            TELLUS_ORBIT_DISTANCE,
            TELLUS_ECCENTRICITY,
            TELLUS_ORBIT_PERIOD,
            Point3::origin(),
        );
        Planet::new(info, orbit)
    }

    #[test]
    fn test_elapsed_time_wraps() {
        let mut planet = test_planet();
        let start = planet.position();

        // One full revolution in 360 equal steps lands back at the start,
        // with the elapsed time wrapped instead of growing without bound.
        for _ in 0..360 {
            planet.update(TELLUS_ORBIT_PERIOD / 360.0);
        }

        let wrapped = planet.elapsed();
        assert!(wrapped >= 0.0 && wrapped < TELLUS_ORBIT_PERIOD);
        assert!(
            wrapped.min(TELLUS_ORBIT_PERIOD - wrapped) < 1e-9,
            "elapsed time {} is not near a period boundary",
            wrapped
        );
        assert_abs_diff_eq!(planet.position(), start, epsilon = 1e-6);
    }

    #[test]
    fn test_traversed_index() {
        let mut planet = test_planet();
        assert_eq!(planet.traversed_index(), 0);

        planet.update(TELLUS_ORBIT_PERIOD / 4.0);
        assert_eq!(planet.traversed_index(), 90);

        // The index saturates at the last sample, even right at the end of
        // a revolution.
        planet.update(TELLUS_ORBIT_PERIOD * 0.7499);
        assert!(planet.traversed_index() < planet.path().len());
    }

    #[test]
    fn test_shape_mutation_regenerates_path() {
        let mut planet = test_planet();
        let before = planet.path().clone();

        planet.set_eccentricity(0.4);
        assert_ne!(&before, planet.path());
        assert_relative_eq!(planet.path().samples()[0].x, 5.0 * 0.6, max_relative = 1e-12);

        // Same elements, same path: regeneration is deterministic.
        let mut again = test_planet();
        again.set_eccentricity(0.4);
        assert_eq!(planet.path(), again.path());
    }

    #[test]
    fn test_period_mutation_keeps_elapsed_in_range() {
        let mut planet = test_planet();
        planet.update(50.0);

        planet.set_orbital_period(20.0);
        assert!(planet.elapsed() < 20.0);
        assert_abs_diff_eq!(planet.elapsed(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_center_shift_matches_regeneration() {
        let mut shifted = test_planet();
        let new_center = Point3::new(4.0, 0.0, -2.5);
        shifted.set_orbit_center(new_center);

        let regenerated = OrbitPath::generate(
            &Orbit::new(
                TELLUS_ORBIT_DISTANCE,
                TELLUS_ECCENTRICITY,
                TELLUS_ORBIT_PERIOD,
                new_center,
            ),
            360,
        );

        for (a, b) in shifted.path().samples().iter().zip(regenerated.samples()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(
            shifted.position(),
            regenerated.samples()[0],
            epsilon = 1e-12
        );
    }
}
