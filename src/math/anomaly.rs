//! Conversions between the anomalies of an elliptical orbit.
//!
//! Time enters through the mean anomaly, which grows uniformly; the
//! eccentric anomaly comes out of Kepler's equation, and the true anomaly
//! is the angle actually swept from periapsis.

/// Number of fixed-point rounds used on Kepler's equation. The iteration
/// E <- M + e sin(E) contracts with ratio e, so five rounds pins the error
/// well below a pixel for any eccentricity we draw (e < 0.99). There is no
/// residual check; anything that needs tight tolerances near e = 1 should
/// use a Newton solver with a convergence cap instead.
const KEPLER_ITERATIONS: usize = 5;

pub fn mean_to_eccentric(mean_anomaly: f64, e: f64) -> f64 {
    assert!(e < 1.0);

    // No closed form for this one; iterate from the circular-orbit guess.
    let mut ecc_anomaly = mean_anomaly;
    for _ in 0..KEPLER_ITERATIONS {
        ecc_anomaly = mean_anomaly + e * ecc_anomaly.sin();
    }
    ecc_anomaly
}

pub fn eccentric_to_mean(eccentric_anomaly: f64, e: f64) -> f64 {
    assert!(e < 1.0);
    eccentric_anomaly - e * eccentric_anomaly.sin()
}

pub fn eccentric_to_true(eccentric_anomaly: f64, e: f64) -> f64 {
    // sin and cos of the true anomaly share the denominator 1 - e cos E,
    // and atan2 recovers the angle in the right quadrant.
    let denom = 1.0 - e * eccentric_anomaly.cos();
    let sin_true = (1.0 - e * e).sqrt() * eccentric_anomaly.sin() / denom;
    let cos_true = (eccentric_anomaly.cos() - e) / denom;
    sin_true.atan2(cos_true)
}

pub fn mean_to_true(mean_anomaly: f64, ecc: f64) -> f64 {
    eccentric_to_true(mean_to_eccentric(mean_anomaly, ecc), ecc)
}
