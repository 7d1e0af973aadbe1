// Reference system shared by the tests: an Earth-like planet on a nearly
// circular orbit, matching the defaults in exo-bodies.txt.
pub const TELLUS_ORBIT_DISTANCE: f64 = 5.0;
pub const TELLUS_ECCENTRICITY: f64 = 0.0167;
pub const TELLUS_ORBIT_PERIOD: f64 = 65.25;

pub const HELIOS_LUMINOSITY: f64 = 100.0;
