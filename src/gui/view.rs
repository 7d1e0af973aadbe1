use std::f64::consts::PI;

use kiss3d::camera::{ArcBall, Camera};
use kiss3d::planar_camera::PlanarCamera;
use kiss3d::post_processing::PostProcessingEffect;
use kiss3d::renderer::Renderer;
use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use nalgebra::{Point2, Point3, Translation3, Vector3};

use super::controller::Controller;
use super::utils::{draw_polyline, path_iter_parametric};
use crate::model::System;

/// Where the camera is looking.
#[derive(Debug, Clone, Copy)]
pub enum FocusPoint {
    System,
    Star,
    Planet,
}

const FOCUS_ORDER: [FocusPoint; 3] = [FocusPoint::System, FocusPoint::Star, FocusPoint::Planet];

pub struct View {
    // Object state
    system: System,
    star_sphere: SceneNode,
    planet_sphere: SceneNode,
    // Camera
    camera: ArcBall,
    focus_idx: usize,
}

impl View {
    pub fn new(system: System, window: &mut Window) -> Self {
        // Make the spheres that represent the bodies
        let mut star_sphere = window.add_sphere(system.star.info.radius);
        let color = system.star.color();
        star_sphere.set_color(color.x, color.y, color.z);

        let mut planet_sphere = window.add_sphere(system.planet.info.radius);
        let color = &system.planet.info.color;
        planet_sphere.set_color(color.x, color.y, color.z);

        // Initial placement doesn't matter, fix_camera_focus overrides it
        let camera = ArcBall::new(Point3::new(0.0, 1.0, 1.0), Point3::origin());

        let mut view = Self {
            system,
            star_sphere,
            planet_sphere,
            camera,
            focus_idx: 0,
        };
        view.fix_camera_focus();
        view.update_scene_objects();

        view
    }

    pub fn update_state_by(&mut self, timestep: f64) {
        self.system.advance(timestep);
        self.update_scene_objects();
    }

    pub fn camera_focus_next(&mut self) {
        self.focus_idx = (self.focus_idx + 1) % FOCUS_ORDER.len();
        self.fix_camera_focus();
    }

    pub fn camera_focus_prev(&mut self) {
        self.focus_idx = (self.focus_idx + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len();
        self.fix_camera_focus();
    }

    fn focus_point(&self) -> FocusPoint {
        FOCUS_ORDER[self.focus_idx]
    }

    fn fix_camera_focus(&mut self) {
        let (at, distance) = match self.focus_point() {
            FocusPoint::System => {
                // Pull back far enough to see the whole orbit, or the outer
                // edge of the habitable zone if that's bigger.
                let (_, hz_outer) = self.system.star.habitable_zone();
                let extent = self.system.planet.orbit().apoapsis().max(hz_outer);
                (self.system.star.position(), 2.5 * extent)
            }
            FocusPoint::Star => (
                self.system.star.position(),
                6.0 * f64::from(self.system.star.info.radius),
            ),
            FocusPoint::Planet => (
                self.system.planet.position(),
                6.0 * f64::from(self.system.planet.info.radius),
            ),
        };

        let at: Point3<f32> = nalgebra::convert(at);
        // Sit a little above the orbital plane
        let offset = Vector3::new(0.0, 0.35, 1.0).normalize() * distance as f32;
        self.camera.look_at(at + offset, at);
    }

    pub fn adjust_eccentricity(&mut self, delta: f64) {
        let ecc = (self.system.planet.orbit().eccentricity() + delta).clamp(0.0, 0.99);
        self.system.planet.set_eccentricity(ecc);
        println!("Eccentricity is {:.4}", ecc);
    }

    pub fn adjust_orbital_distance(&mut self, delta: f64) {
        let distance = (self.system.planet.orbit().semimajor_axis() + delta).max(0.5);
        self.system.planet.set_orbital_distance(distance);
        println!("Orbital distance is {:.2}", distance);
    }

    pub fn adjust_orbital_period(&mut self, delta: f64) {
        let period = (self.system.planet.orbit().period() + delta).max(1.0);
        self.system.planet.set_orbital_period(period);
        println!("Orbital period is {:.2} d", period);
    }

    fn update_scene_objects(&mut self) {
        // does some nice conversions
        fn set_position_helper(obj: &mut SceneNode, position: Point3<f64>) {
            let position: Point3<f32> = nalgebra::convert(position);
            obj.set_local_translation(Translation3::from(position));
        }

        set_position_helper(&mut self.star_sphere, self.system.star.position());
        set_position_helper(&mut self.planet_sphere, self.system.planet.position());

        // Keep a focused planet centered as it moves
        if let FocusPoint::Planet = self.focus_point() {
            let at: Point3<f32> = nalgebra::convert(self.system.planet.position());
            self.camera.set_at(at);
        }
    }

    // the big boy
    pub fn prerender_scene(&mut self, window: &mut Window, controller: &Controller) {
        self.draw_orbit_path(window);
        self.draw_habitable_zone(window);

        // Draw text
        let default_font = kiss3d::text::Font::default();
        let text_color = Point3::new(1.0, 1.0, 1.0);
        window.draw_text(
            &self.left_hand_text(),
            &Point2::origin(),
            60.0,
            &default_font,
            &text_color,
        );
        window.draw_text(
            &self.time_summary_text(controller.timestep(), controller.fps()),
            // no idea why i have to multiply by 2.0, but there it is
            &Point2::new(window.width() as f32 * 2.0 - 600.0, 0.0),
            60.0,
            &default_font,
            &text_color,
        );
    }

    fn draw_orbit_path(&self, window: &mut Window) {
        let planet = &self.system.planet;
        let path = planet.path();
        if path.is_empty() {
            return;
        }

        fn to_render_point(pt: &Point3<f64>) -> Point3<f32> {
            nalgebra::convert(*pt)
        }

        // The whole loop as a faint reference...
        draw_polyline(
            window,
            path.samples().iter().map(to_render_point),
            &Point3::new(0.35, 0.35, 0.35),
        );

        // ...with the part already traveled this revolution on top
        let traversed = planet.traversed_index();
        draw_polyline(
            window,
            path.samples()[..=traversed].iter().map(to_render_point),
            &Point3::new(1.0, 0.0, 0.0),
        );
    }

    fn draw_habitable_zone(&self, window: &mut Window) {
        let (inner, outer) = self.system.star.habitable_zone();
        let center = self.system.star.position();

        for radius in [inner, outer] {
            let circle = move |angle: f64| {
                let pt = center + radius * Vector3::new(angle.cos(), 0.0, angle.sin());
                nalgebra::convert::<_, Point3<f32>>(pt)
            };
            draw_polyline(
                window,
                path_iter_parametric(circle, 0.0, 2.0 * PI, 120),
                &Point3::new(0.0, 0.8, 0.2),
            );
        }
    }

    fn left_hand_text(&self) -> String {
        let star = &self.system.star;
        let planet = &self.system.planet;
        let orbit = planet.orbit();
        let (hz_inner, hz_outer) = star.habitable_zone();

        // Indentation is intentional
        format!(
            "Focused on: {}
{}:
    Mass: {:.2} Msun
    Temperature: {:.0} K
    Luminosity: {:.1} Lsun
    Habitable zone: {:.2} to {:.2}
{} ({}):
    Distance: {:.2}
    Eccentricity: {:.4}
    Period: {:.2} d
    Periapsis: {:.3}
    Apoapsis: {:.3}
    Radius now: {:.3}",
            self.focused_name(),
            star.info.name,
            star.info.mass,
            star.info.temperature,
            star.info.luminosity,
            hz_inner,
            hz_outer,
            planet.info.name,
            planet.info.kind,
            orbit.semimajor_axis(),
            orbit.eccentricity(),
            orbit.period(),
            orbit.periapsis(),
            orbit.apoapsis(),
            (planet.position() - star.position()).norm(),
        )
    }

    fn focused_name(&self) -> String {
        match self.focus_point() {
            FocusPoint::System => String::from("<System>"),
            FocusPoint::Star => self.system.star.info.name.clone(),
            FocusPoint::Planet => self.system.planet.info.name.clone(),
        }
    }

    fn time_summary_text(&self, timestep: f64, fps: f64) -> String {
        format!(
            "Day {:.1} of {:.1}
Timestep: {} d/frame
FPS: {:.0}",
            self.system.planet.elapsed(),
            self.system.planet.orbit().period(),
            timestep,
            fps,
        )
    }

    pub fn cameras_and_effect_and_renderer(
        &mut self,
    ) -> (
        Option<&mut dyn Camera>,
        Option<&mut dyn PlanarCamera>,
        Option<&mut dyn Renderer>,
        Option<&mut dyn PostProcessingEffect>,
    ) {
        (Some(&mut self.camera), None, None, None)
    }
}
