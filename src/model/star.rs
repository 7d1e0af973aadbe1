use nalgebra::{Point3, Vector3};

// All the immutable info about a star
#[derive(Debug, Clone)]
pub struct StarInfo {
    pub name: String,
    /// Mass in solar masses
    pub mass: f64,
    /// Radius in scene units
    pub radius: f32,
    /// Effective temperature in Kelvin
    pub temperature: f64,
    /// Luminosity in solar luminosities
    pub luminosity: f64,
}

/// The star at the focus of the system. It does not orbit anything; its
/// only motion is a constant drift, zero by default.
#[derive(Debug, Clone)]
pub struct Star {
    pub info: StarInfo,
    position: Point3<f64>,
    velocity: Vector3<f64>,
}

impl Star {
    pub fn new(info: StarInfo, position: Point3<f64>, velocity: Vector3<f64>) -> Self {
        Star {
            info,
            position,
            velocity,
        }
    }

    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    pub fn update(&mut self, dt: f64) {
        self.position += self.velocity * dt;
    }

    /// Habitable-zone boundary radii (inner, outer), from the conservative
    /// stellar-flux limits 1.1 and 0.53 in solar units.
    pub fn habitable_zone(&self) -> (f64, f64) {
        let lum = self.info.luminosity;
        ((lum / 1.1).sqrt(), (lum / 0.53).sqrt())
    }

    /// Approximate blackbody color for the star's effective temperature.
    pub fn color(&self) -> Point3<f32> {
        temperature_to_color(self.info.temperature)
    }
}

/// Temperature to RGB, using Tanner Helland's piecewise fits to the
/// blackbody locus. Valid from 1000 K to 40000 K; clamped outside that.
/// Channels are normalized to [0, 1].
fn temperature_to_color(kelvin: f64) -> Point3<f32> {
    let t = kelvin.clamp(1000.0, 40000.0) / 100.0;

    let red = if t <= 66.0 {
        255.0
    } else {
        (329.698727446 * (t - 60.0).powf(-0.1332047592)).clamp(0.0, 255.0)
    };

    let green = if t <= 66.0 {
        (99.4708025861 * t.ln() - 161.1195681661).clamp(0.0, 255.0)
    } else {
        (288.1221695283 * (t - 60.0).powf(-0.0755148492)).clamp(0.0, 255.0)
    };

    let blue = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        (138.5177312231 * (t - 10.0).ln() - 305.0447927307).clamp(0.0, 255.0)
    };

    Point3::new(
        red as f32 / 255.0,
        green as f32 / 255.0,
        blue as f32 / 255.0,
    )
}
