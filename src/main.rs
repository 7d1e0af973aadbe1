use kiss3d::light::Light;
use kiss3d::window::Window;

use exoplanet_sim::file::read_file;
use exoplanet_sim::gui::Simulation;

fn main() {
    let mut window = Window::new("Exoplanet Simulator");
    window.set_light(Light::StickToCamera);

    let system = read_file("exo-bodies.txt");
    let simulation = Simulation::new(system, &mut window);
    window.render_loop(simulation);
}
