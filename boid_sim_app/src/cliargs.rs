use clap_serde_derive::{
    clap::{self, Parser},
    serde::Serialize,
    ClapSerde,
};

#[derive(Parser)]
#[derive(ClapSerde)]
#[command(version, about, long_about = None)]
/// Boid flocking simulation with pointer seeking.
pub struct Args {
    /// Config file
    #[arg(short, long = "config", default_value = "config.yaml")]
    pub config_path: std::path::PathBuf,

    /// Rest of arguments
    #[command(flatten)]
    pub config: <Config as ClapSerde>::Opt,
}

#[derive(ClapSerde, Serialize)]
/// Programatic configuration
///
/// Uses defaults, which can be overwritten by specifying a filepath for the `-c` or `--config` arg option
pub struct Config {
    #[default(175)]
    #[arg(short = 'n', long)]
    /// number of boids
    pub no_boids: usize,

    #[default(1500)]
    #[arg(short = 'x', long)]
    /// window width in pixels
    pub init_width: u32,

    #[default(900)]
    #[arg(short = 'y', long)]
    /// window height in pixels
    pub init_height: u32,

    #[default(2.0)]
    #[arg(long = "max_speed")]
    /// cruising speed of every boid
    pub max_speed: f32,

    #[default(85.0)]
    #[arg(long = "fov")]
    /// vision radius for neighbours, bounds and the pointer
    pub fov_radius: f32,

    #[default(6.0)]
    #[arg(long = "size")]
    /// triangle body radius in pixels
    pub body_radius: f32,
}
