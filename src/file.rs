use std::fs;

use nalgebra::{Point3, Vector3};

use crate::astro::orbit::Orbit;
use crate::model::{Planet, PlanetInfo, Star, StarInfo, System};

/// Reads a system definition: a whitespace table with one line per body,
/// header line skipped. Star lines carry `name star mass radius temperature
/// luminosity`; planet lines carry `name planet mass radius temperature
/// kind color distance eccentricity period`.
///
/// This is the boundary where the orbit invariants get checked; the solver
/// itself assumes them.
pub fn read_file(filename: &str) -> System {
    let mut star: Option<Star> = None;
    let mut planet: Option<Planet> = None;

    // Read lines, skipping header
    for line in fs::read_to_string(filename).unwrap().lines().skip(1) {
        let mut fields = line.split_ascii_whitespace();

        macro_rules! next_string {
            () => {
                fields.next().unwrap()
            };
        }

        macro_rules! next_f64 {
            () => {
                fields.next().unwrap().parse::<f64>().unwrap()
            };
        }

        let name = next_string!();
        let kind = next_string!();

        match kind {
            "star" => {
                let info = StarInfo {
                    name: name.to_owned(),
                    mass: next_f64!(),
                    radius: next_f64!() as f32,
                    temperature: next_f64!(),
                    luminosity: next_f64!(),
                };
                star = Some(Star::new(info, Point3::origin(), Vector3::zeros()));
            }
            "planet" => {
                let info = PlanetInfo {
                    name: name.to_owned(),
                    mass: next_f64!(),
                    radius: next_f64!() as f32,
                    temperature: next_f64!(),
                    kind: next_string!().to_owned(),
                    color: parse_color(next_string!()),
                };
                let (distance, ecc, period) = (next_f64!(), next_f64!(), next_f64!());

                assert!(ecc < 1.0, "Only closed orbits can be drawn");
                assert!(period > 0.0, "Orbital period must be positive");

                let center = star
                    .as_ref()
                    .expect("Planet listed before its star")
                    .position();
                planet = Some(Planet::new(info, Orbit::new(distance, ecc, period, center)));
            }
            _ => panic!("Unknown body kind: {}", kind),
        }
    }

    System::new(
        star.expect("No star in system file"),
        planet.expect("No planet in system file"),
    )
}

fn parse_color(s: &str) -> Point3<f32> {
    assert_eq!(s.len(), 6);
    let r = u8::from_str_radix(&s[0..2], 16).unwrap();
    let g = u8::from_str_radix(&s[2..4], 16).unwrap();
    let b = u8::from_str_radix(&s[4..6], 16).unwrap();

    Point3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}
