use std::{fs::File, io::BufReader};

use clap_serde_derive::{clap::Parser, ClapSerde};
use log::{info, warn};
use nannou::{color::*, prelude::*};
use nannou_egui::{egui, Egui};

use swarm_lib::{
    options::{Bounds, SaveOptions, SimOptions, SteeringWeights},
    render::{self, Color, Surface},
    simulation::Simulation,
    watcher::FlockWatcher,
};

mod cliargs;
use cliargs::{Args, Config};

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

struct ControlsState {
    execution_paused: bool,
    controls_open: bool,
}

struct Model {
    egui: Egui,
    sim: Simulation,
    options: SimOptions,
    control_state: ControlsState,
    watcher: FlockWatcher,
}

fn model(app: &App) -> Model {
    let mut args = Args::parse();

    // defaults < config file < command line
    let config = if let Ok(f) = File::open(&args.config_path) {
        match serde_yaml::from_reader::<_, <Config as ClapSerde>::Opt>(BufReader::new(f)) {
            Ok(config) => Config::from(config).merge(&mut args.config),
            Err(err) => panic!("Error in configuration file:\n{}", err),
        }
    } else {
        Config::from(&mut args.config)
    };

    let options = SimOptions {
        init_boids: config.no_boids,
        bounds: Bounds::new(config.width, config.height),
        weights: SteeringWeights {
            separation: config.separation_weight,
            alignment: config.alignment_weight,
            cohesion: config.cohesion_weight,
        },
        seed: if config.seed == 0 {
            None
        } else {
            Some(config.seed)
        },
        sample_rate: config.sample_rate,
        save_options: SaveOptions {
            save_locations: config.save,
            save_locations_path: Some("./".to_owned()),
            save_locations_timestamp: config.save_timestamp,
        },
    };

    let main_window = app
        .new_window()
        .size(options.bounds.width as u32, options.bounds.height as u32)
        .title("swarm flocking")
        .key_pressed(key_pressed)
        .mouse_pressed(mouse_pressed)
        .closed(window_closed)
        .raw_event(raw_window_event)
        .view(view)
        .build()
        .unwrap();

    let window = app.window(main_window).unwrap();

    info!(
        "seeding {} boids in a {}x{} arena",
        options.init_boids, options.bounds.width, options.bounds.height
    );

    Model {
        egui: Egui::from_window(&window),
        sim: Simulation::new(&options),
        watcher: FlockWatcher::new(options.sample_rate),
        options,
        control_state: ControlsState {
            execution_paused: false,
            controls_open: false,
        },
    }
}

fn update(app: &App, model: &mut Model, update: Update) {
    let Model {
        ref mut egui,
        ref mut sim,
        ref mut watcher,
        ..
    } = *model;

    // track window resizes
    let win = app.window_rect();
    sim.bounds = Bounds::new(win.w(), win.h());

    let init_boids = model.options.init_boids;

    egui.set_elapsed_time(update.since_start);
    let ctx = egui.begin_frame();
    egui::Window::new("controls")
        .default_size(egui::vec2(0.0, 200.0))
        .open(&mut model.control_state.controls_open)
        .show(&ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("separation weight");
                ui.add(egui::Slider::new(&mut sim.flock.weights.separation, 0.0..=10.0))
            });

            ui.horizontal(|ui| {
                ui.label("alignment weight");
                ui.add(egui::Slider::new(&mut sim.flock.weights.alignment, 0.0..=10.0))
            });

            ui.horizontal(|ui| {
                ui.label("cohesion weight");
                ui.add(egui::Slider::new(&mut sim.flock.weights.cohesion, 0.0..=10.0))
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Boids: {}", sim.flock.len()));
            });

            ui.horizontal(|ui| {
                if ui.button("Clear all Boids").clicked() {
                    sim.clear();
                }
                if ui.button("Restart simulation").clicked() {
                    sim.reseed(init_boids);
                }
            });
        });

    if model.control_state.execution_paused {
        return;
    }

    sim.step();
    watcher.watch(&sim.flock);
}

fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    if key == Key::Space {
        // pause the whole simulation
        model.control_state.execution_paused = !model.control_state.execution_paused;
    } else if key == Key::C {
        // show/hide controls
        model.control_state.controls_open = !model.control_state.controls_open;
    } else if key == Key::R {
        // restart the flock, not the simulation
        let init_boids = model.options.init_boids;
        model.sim.reseed(init_boids);
    }
}

fn mouse_pressed(app: &App, model: &mut Model, _button: MouseButton) {
    if model.control_state.controls_open {
        return;
    }

    // touch/click spawns one boid at the sampled coordinate
    let (x, y) = window_to_sim(app.mouse.x, app.mouse.y, model.sim.bounds);
    model.sim.add_boid(x, y);
}

fn window_closed(_app: &App, model: &mut Model) {
    match model.watcher.pop_data_save(&model.options.save_options) {
        Ok(data) => info!("collected {} samples", data.len()),
        Err(err) => warn!("could not save samples: {}", err),
    }
}

/// nannou windows are centered with y up, the simulation area has its
/// origin at the top-left corner with y down.
fn window_to_sim(x: f32, y: f32, bounds: Bounds) -> (f32, f32) {
    (x + bounds.width / 2., bounds.height / 2. - y)
}

/// Adapter turning nannou's `Draw` into the simulation's drawing
/// surface.
struct DrawSurface<'a> {
    draw: &'a Draw,
    width: f32,
    height: f32,
}

impl<'a> DrawSurface<'a> {
    fn to_window(&self, x: f32, y: f32) -> Point2 {
        pt2(x - self.width / 2., self.height / 2. - y)
    }

    fn color(color: Color) -> Rgb8 {
        rgb8(color.r, color.g, color.b)
    }
}

impl<'a> Surface for DrawSurface<'a> {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.draw.background().color(Self::color(color));
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        self.draw
            .line()
            .start(self.to_window(x1, y1))
            .end(self.to_window(x2, y2))
            .weight(2.0)
            .color(Self::color(color));
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Color) {
        let xy = self.to_window(x, y);
        self.draw
            .text(text)
            .x_y(xy.x, xy.y)
            .color(Self::color(color));
    }

    fn present(&mut self) {
        // nannou pushes the frame itself once `view` returns
    }
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    let mut surface = DrawSurface {
        draw: &draw,
        width: model.sim.bounds.width,
        height: model.sim.bounds.height,
    };

    surface.clear(Color::BLACK);
    render::render_flock(&model.sim.flock, &mut surface);

    draw.to_frame(app, &frame).unwrap();
    model.egui.draw_to_frame(&frame).unwrap();
}
