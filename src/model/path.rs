use nalgebra::{Point3, Vector3};

use crate::astro::orbit::Orbit;

/// A discretized trace of one full revolution, sampled at uniform time
/// steps. For `segments` segments the path holds `segments + 1` points, so
/// the first and last samples coincide and the loop closes.
///
/// A path is immutable between regenerations: whenever the orbit's shape
/// changes it is rebuilt wholesale with [OrbitPath::generate], never patched
/// in place. The one exception is [OrbitPath::translate], for the case where
/// only the center moved.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    samples: Vec<Point3<f64>>,
}

impl OrbitPath {
    /// Evaluates the orbit at t = k * (period / segments) for k = 0..=segments.
    pub fn generate(orbit: &Orbit, segments: usize) -> Self {
        assert!(
            segments >= 1,
            "Must have at least one segment, segments was {}",
            segments
        );

        let step = orbit.period() / segments as f64;
        let samples = (0..=segments)
            .map(|k| orbit.position_at_time(k as f64 * step))
            .collect();

        OrbitPath { samples }
    }

    pub fn samples(&self) -> &[Point3<f64>] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Shifts every sample by `delta`. Every sample is center + f(t), so
    /// this matches a full regeneration after moving the center by `delta`.
    pub fn translate(&mut self, delta: Vector3<f64>) {
        for sample in self.samples.iter_mut() {
            *sample += delta;
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn test_orbit(center: Point3<f64>) -> Orbit {
        Orbit::new(8.0, 0.3, 120.0, center)
    }

    #[test]
    fn test_sample_count_and_closure() {
        let path = OrbitPath::generate(&test_orbit(Point3::origin()), 360);
        assert_eq!(path.len(), 361);

        let first = path.samples()[0];
        let last = path.samples()[360];
        assert_abs_diff_eq!(first, last, epsilon = 1e-9);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let orbit = test_orbit(Point3::new(2.0, 0.0, -1.0));
        let a = OrbitPath::generate(&orbit, 360);
        let b = OrbitPath::generate(&orbit, 360);
        assert_eq!(a, b);
    }

    #[test]
    fn test_translate_matches_regeneration() {
        let delta = Vector3::new(3.0, -1.0, 0.5);

        let mut shifted = OrbitPath::generate(&test_orbit(Point3::origin()), 90);
        shifted.translate(delta);

        let regenerated = OrbitPath::generate(&test_orbit(Point3::origin() + delta), 90);
        for (a, b) in shifted.samples().iter().zip(regenerated.samples()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }
}
