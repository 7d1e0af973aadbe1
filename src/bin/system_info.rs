use clap::Parser;

use exoplanet_sim::file::read_file;

#[derive(Debug, Parser)]
struct Args {
    /// System definition file
    #[arg(default_value = "exo-bodies.txt")]
    file: String,
}

fn main() {
    let args = Args::parse();
    let system = read_file(&args.file);

    let star = &system.star;
    let (hz_inner, hz_outer) = star.habitable_zone();
    println!("Stellar characteristics for {}", star.info.name);
    println!("- Mass: {} Msun", star.info.mass);
    println!("- Radius: {}", star.info.radius);
    println!("- Effective temperature: {} K", star.info.temperature);
    println!("- Luminosity: {} Lsun", star.info.luminosity);
    println!("- Habitable zone: {:.4} to {:.4}", hz_inner, hz_outer);
    println!();

    let planet = &system.planet;
    let orbit = planet.orbit();
    println!(
        "Orbital characteristics for {} ({})",
        planet.info.name, planet.info.kind
    );
    println!("- Orbital distance: {}", orbit.semimajor_axis());
    println!("- Apoapsis: {}", orbit.apoapsis());
    println!("- Periapsis: {}", orbit.periapsis());
    println!("- Orbital eccentricity: {}", orbit.eccentricity());
    println!("- Orbital period: {} d", orbit.period());

    let inside = orbit.periapsis() >= hz_inner && orbit.apoapsis() <= hz_outer;
    println!(
        "- Stays within the habitable zone: {}",
        if inside { "yes" } else { "no" }
    );
}
