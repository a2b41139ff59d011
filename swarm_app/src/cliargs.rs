use clap_serde_derive::{
    clap::{self, Parser},
    serde::Serialize,
    ClapSerde,
};

#[derive(Parser)]
#[derive(ClapSerde)]
#[command(version, about, long_about = None)]
/// Interactive flocking simulation (Reynolds '86 boids) on a simulated
/// touch display.
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
/// Uses defaults, which can be overwritten by specifying a filepath for
/// the `-c` or `--config` arg option
pub struct Config {
    #[default(40)]
    #[arg(short = 'n', long)]
    /// number of boids seeded at startup and on restart
    pub no_boids: usize,

    #[default(480.)]
    #[arg(short = 'x', long)]
    /// simulation area width
    pub width: f32,

    #[default(480.)]
    #[arg(short = 'y', long)]
    /// simulation area height
    pub height: f32,

    #[default(5.1)]
    #[arg(long = "sep")]
    /// separation weight
    pub separation_weight: f32,

    #[default(1.55)]
    #[arg(long = "ali")]
    /// alignment weight
    pub alignment_weight: f32,

    #[default(2.35)]
    #[arg(long = "coh")]
    /// cohesion weight
    pub cohesion_weight: f32,

    #[default(1)]
    #[arg(short = 'r', long)]
    /// sample every nth tick
    pub sample_rate: u64,

    #[default(false)]
    #[arg(short = 's', long)]
    /// save sampled positions as CSV on exit
    pub save: bool,

    #[default(true)]
    #[arg(short = 't', long)]
    /// timestamp the CSV file name
    pub save_timestamp: bool,

    #[default(0)]
    #[arg(long)]
    /// fixed RNG seed for reproducible runs, 0 draws fresh entropy
    pub seed: u64,
}
