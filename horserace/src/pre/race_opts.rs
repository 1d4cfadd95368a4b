use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    version,
    name = "horserace",
    about = "A tick-driven horse race simulator written in Rust"
)]
pub struct RaceOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Activate GUI (race is then driven in real-time by the tick interval)
    #[arg(short, long)]
    pub gui: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set number of simulation runs (must be one in case the GUI is activated)
    #[arg(short, long, default_value_t = 1)]
    pub no_sim_runs: u32,

    /// Set path to the race parameter file (built-in parameters are used if omitted)
    #[arg(short, long)]
    pub parfile_path: Option<PathBuf>,

    /// Set seed of the random step source for reproducible races
    #[arg(short, long)]
    pub seed: Option<u64>,
}
