use std::f64::consts::PI;

use nalgebra::{Point3, Vector3};

use crate::math::anomaly;

/// An elliptical orbit around a fixed center, lying in the y = 0 plane with
/// periapsis on the +x axis. Time is measured from periapsis passage.
///
/// Invariants, upheld by callers and checked where orbits enter the program
/// (the system-file loader), not re-checked here:
/// - eccentricity in [0, 1), so the orbit is closed
/// - period > 0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    /// Semi-major axis, i.e., the orbital distance.
    semimajor_axis: f64,
    eccentricity: f64,
    period: f64,
    center: Point3<f64>,
}

impl Orbit {
    pub fn new(semimajor_axis: f64, eccentricity: f64, period: f64, center: Point3<f64>) -> Self {
        Orbit {
            semimajor_axis,
            eccentricity,
            period,
            center,
        }
    }

    // -- Orbital elements --

    pub fn semimajor_axis(&self) -> f64 {
        self.semimajor_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    pub fn set_semimajor_axis(&mut self, semimajor_axis: f64) {
        self.semimajor_axis = semimajor_axis;
    }

    pub fn set_eccentricity(&mut self, eccentricity: f64) {
        self.eccentricity = eccentricity;
    }

    pub fn set_period(&mut self, period: f64) {
        self.period = period;
    }

    pub fn set_center(&mut self, center: Point3<f64>) {
        self.center = center;
    }

    // -- Other geometric characteristics --

    pub fn periapsis(&self) -> f64 {
        self.semimajor_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis(&self) -> f64 {
        self.semimajor_axis * (1.0 + self.eccentricity)
    }

    /// Angular speed of the mean anomaly, 2 pi / period.
    pub fn mean_motion(&self) -> f64 {
        2.0 * PI / self.period
    }

    /// Distance from the focus at the given true anomaly, from the conic
    /// equation r = a (1 - e^2) / (1 + e cos theta).
    pub fn radius_at_theta(&self, theta: f64) -> f64 {
        let e = self.eccentricity;
        self.semimajor_axis * (1.0 - e * e) / (1.0 + e * theta.cos())
    }

    /// Position on the orbit after `time` has elapsed since periapsis.
    ///
    /// The anomalies are 2 pi-periodic, so `time` does not need to be
    /// pre-reduced modulo the period. With e = 0 this degenerates to
    /// uniform circular motion.
    pub fn position_at_time(&self, time: f64) -> Point3<f64> {
        let mean_anomaly = self.mean_motion() * time;
        let theta = anomaly::mean_to_true(mean_anomaly, self.eccentricity);
        let radius = self.radius_at_theta(theta);
        self.center + radius * Vector3::new(theta.cos(), 0.0, theta.sin())
    }

    /// Distance from the focus after `time` has elapsed since periapsis.
    pub fn radius_at_time(&self, time: f64) -> f64 {
        let mean_anomaly = self.mean_motion() * time;
        let theta = anomaly::mean_to_true(mean_anomaly, self.eccentricity);
        self.radius_at_theta(theta)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::consts::{TELLUS_ECCENTRICITY, TELLUS_ORBIT_DISTANCE, TELLUS_ORBIT_PERIOD};

    #[test]
    fn test_orbit_shape() {
        let orbit = Orbit::new(10.0, 0.6, 100.0, Point3::origin());
        assert_relative_eq!(orbit.periapsis(), 4.0, max_relative = 1e-12);
        assert_relative_eq!(orbit.apoapsis(), 16.0, max_relative = 1e-12);
        assert_relative_eq!(orbit.radius_at_theta(0.0), 4.0, max_relative = 1e-12);
        assert_relative_eq!(orbit.radius_at_theta(PI), 16.0, max_relative = 1e-12);

        // Circular orbit: constant radius
        let orbit = Orbit::new(10.0, 0.0, 100.0, Point3::origin());
        for theta in [0.0, 1.0, PI, 5.0] {
            assert_relative_eq!(orbit.radius_at_theta(theta), 10.0);
        }
    }

    #[test]
    fn test_circular_motion() {
        // With e = 0 the planet moves uniformly; a quarter period past
        // periapsis puts it at a quarter turn, on the +z axis.
        let center = Point3::new(1.0, 2.0, 3.0);
        let orbit = Orbit::new(5.0, 0.0, 80.0, center);

        let quarter = orbit.position_at_time(20.0);
        assert_abs_diff_eq!(quarter, center + Vector3::new(0.0, 0.0, 5.0), epsilon = 1e-9);

        let half = orbit.position_at_time(40.0);
        assert_abs_diff_eq!(half, center + Vector3::new(-5.0, 0.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn test_apsis_positions() {
        // t = 0 is periapsis, half a period later is apoapsis; both are
        // exact fixed points of the Kepler iteration.
        let orbit = Orbit::new(
            TELLUS_ORBIT_DISTANCE,
            TELLUS_ECCENTRICITY,
            TELLUS_ORBIT_PERIOD,
            Point3::origin(),
        );

        let periapsis = orbit.position_at_time(0.0);
        assert_relative_eq!(periapsis.x, orbit.periapsis(), max_relative = 1e-12);
        assert_abs_diff_eq!(periapsis.y, 0.0);
        assert_abs_diff_eq!(periapsis.z, 0.0);

        let apoapsis = orbit.position_at_time(TELLUS_ORBIT_PERIOD / 2.0);
        assert_relative_eq!(apoapsis.x, -orbit.apoapsis(), max_relative = 1e-9);
        assert_abs_diff_eq!(apoapsis.z, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_radius_extremes() {
        // For e > 0 the radius is smallest near periapsis and largest near
        // apoapsis, and never leaves [a(1-e), a(1+e)].
        let orbit = Orbit::new(10.0, 0.4, 50.0, Point3::origin());

        let mut min_time = 0.0;
        let mut max_time = 0.0;
        let mut min_radius = f64::INFINITY;
        let mut max_radius = 0.0;
        for k in 0..200 {
            let time = k as f64 * 50.0 / 200.0;
            let radius = orbit.radius_at_time(time);
            assert!(radius >= orbit.periapsis() - 1e-9);
            assert!(radius <= orbit.apoapsis() + 1e-9);
            if radius < min_radius {
                min_radius = radius;
                min_time = time;
            }
            if radius > max_radius {
                max_radius = radius;
                max_time = time;
            }
        }

        assert_abs_diff_eq!(min_time, 0.0);
        assert_abs_diff_eq!(max_time, 25.0, epsilon = 0.5);
    }

    #[test]
    fn test_position_is_periodic() {
        let orbit = Orbit::new(7.0, 0.3, 42.0, Point3::new(-1.0, 0.0, 2.0));
        for time in [0.0, 5.0, 17.5, 41.0] {
            assert_abs_diff_eq!(
                orbit.position_at_time(time),
                orbit.position_at_time(time + 42.0),
                epsilon = 1e-9
            );
        }
    }
}
