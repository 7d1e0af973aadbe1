use plotters::prelude::*;

use exoplanet_sim::file::read_file;
use exoplanet_sim::model::System;

pub fn main() {
    let system = read_file("exo-bodies.txt");
    std::fs::create_dir_all("plots").unwrap();

    draw_radius_plot("plots/radius.png", &system).unwrap();
    draw_orbit_plot("plots/orbit.png", &system).unwrap();
}

/// Orbital radius over one full period. Flat for a circular orbit, a dip
/// and a bulge around the apsides otherwise.
fn draw_radius_plot(name: &str, system: &System) -> Result<(), Box<dyn std::error::Error>> {
    let orbit = system.planet.orbit();
    let period = orbit.period();
    let n_points = 400;

    let root = BitMapBackend::new(name, (640, 480)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .caption("Orbital radius over one period", ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..period, 0.0..1.1 * orbit.apoapsis())?;

    chart.configure_mesh().draw()?;

    chart.draw_series(LineSeries::new(
        (0..=n_points)
            .map(|i| i as f64 * period / n_points as f64)
            .map(|t| (t, orbit.radius_at_time(t))),
        &RED,
    ))?;

    Ok(())
}

/// Top-down view of the precomputed path, with the habitable-zone band.
fn draw_orbit_plot(name: &str, system: &System) -> Result<(), Box<dyn std::error::Error>> {
    let orbit = system.planet.orbit();
    let (hz_inner, hz_outer) = system.star.habitable_zone();
    let star_pos = system.star.position();

    let extent = 1.1 * orbit.apoapsis().max(hz_outer);

    let root = BitMapBackend::new(name, (640, 640)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(5)
        .caption("Orbit and habitable zone", ("sans-serif", 20))
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;

    chart.configure_mesh().draw()?;

    // Habitable-zone boundaries
    for radius in [hz_inner, hz_outer] {
        chart.draw_series(LineSeries::new(
            (0..=180)
                .map(|i| i as f64 * std::f64::consts::PI / 90.0)
                .map(|angle| {
                    (
                        star_pos.x + radius * angle.cos(),
                        star_pos.z + radius * angle.sin(),
                    )
                }),
            &GREEN,
        ))?;
    }

    // The orbit path itself
    chart.draw_series(LineSeries::new(
        system.planet.path().samples().iter().map(|pt| (pt.x, pt.z)),
        &BLUE,
    ))?;

    // The star at the focus
    chart.draw_series(std::iter::once(Circle::new(
        (star_pos.x, star_pos.z),
        5,
        YELLOW.filled(),
    )))?;

    Ok(())
}
