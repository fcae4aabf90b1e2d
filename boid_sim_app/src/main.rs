extern crate nannou;
use std::{fs::File, io::BufReader};

use clap_serde_derive::{clap::Parser, ClapSerde};
use nannou::prelude::*;

use boid_sim_lib::flock::Flock;
use boid_sim_lib::options::{BoidParams, SimOptions};

mod cliargs;
use cliargs::{Args, Config};

const NOSE_RADIUS: f32 = 4.0;

fn main() {
    nannou::app(model).update(update).run();
}

struct Model {
    flock: Flock,
    options: SimOptions,
    mouse_pos: Vec2,
}

fn model(app: &App) -> Model {
    // Parse whole args with clap
    let mut args = Args::parse();

    // Get config file
    let config = if let Ok(f) = File::open(&args.config_path) {
        // Parse config with serde
        match serde_yaml::from_reader::<_, <Config as ClapSerde>::Opt>(BufReader::new(f)) {
            // merge config already parsed from clap
            Ok(config) => Config::from(config).merge(&mut args.config),
            Err(err) => panic!("Error in configuration file:\n{}", err),
        }
    } else {
        // If there is no config file return only config parsed from clap
        Config::from(&mut args.config)
    };

    if config.no_boids == 0 || config.init_width == 0 || config.init_height == 0 {
        panic!("no_boids, init_width and init_height must all be positive");
    }

    let options = SimOptions {
        init_boids: config.no_boids,
        init_width: config.init_width,
        init_height: config.init_height,
        boid: BoidParams {
            max_speed: config.max_speed,
            fov_radius: config.fov_radius,
            body_radius: config.body_radius,
        },
    };

    app.new_window()
        .size(options.init_width, options.init_height)
        .title("boid simulation")
        .mouse_pressed(mouse_pressed)
        .mouse_released(mouse_released)
        .mouse_moved(mouse_moved)
        .view(view)
        .build()
        .unwrap();

    let flock = match Flock::new(&options) {
        Ok(flock) => flock,
        // a negative boid parameter is a config error, not a runtime one
        Err(err) => panic!("failed to populate the flock: {}", err),
    };

    Model {
        flock,
        options,
        mouse_pos: Vec2::ZERO,
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    model.flock.update(model.mouse_pos);
}

fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_pos = to_sim(&model.options, pos);
}

fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.flock.set_seek_target(true);
    }
}

fn mouse_released(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.flock.set_seek_target(false);
    }
}

// nannou's draw space is centred on the window, the sim lives in [0, w] x [0, h]
fn to_screen(options: &SimOptions, p: Vec2) -> Vec2 {
    Vec2::new(
        p.x - options.init_width as f32 / 2.,
        p.y - options.init_height as f32 / 2.,
    )
}

fn to_sim(options: &SimOptions, p: Vec2) -> Vec2 {
    Vec2::new(
        p.x + options.init_width as f32 / 2.,
        p.y + options.init_height as f32 / 2.,
    )
}

fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(BLACK);

    for boid in model.flock.boids() {
        let [nose, left, right] = boid.vertices();
        let nose = to_screen(&model.options, nose);

        draw.tri()
            .points(
                nose,
                to_screen(&model.options, left),
                to_screen(&model.options, right),
            )
            .color(MEDIUMAQUAMARINE);

        draw.ellipse().xy(nose).radius(NOSE_RADIUS).color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}
