// file: src/cli/args.rs
// version: 1.0.0
// guid: 0bf2c739-02c2-4c2a-898d-ca91872d9bac

//! Command line argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "weave")]
#[command(about = "Weaves Hamiltonian cycles on discocube graphs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// First instance to solve, counted in layers per hemisphere
    #[arg(long, default_value_t = 1, value_name = "N")]
    pub start: u32,

    /// Last instance to solve (defaults to the start value)
    #[arg(long, value_name = "N")]
    pub end: Option<u32>,

    /// Instance to render as an interactive 3D page (defaults to the last)
    #[arg(long, value_name = "N")]
    pub plot: Option<u32>,

    /// Directory for solution records, nothing is exported when unset
    #[arg(short, long, value_name = "DIR", env = "WEAVE_OUTPUT_DIR")]
    pub output: Option<PathBuf>,

    /// Directory for rendered plots
    #[arg(long, value_name = "DIR", env = "WEAVE_PLOT_DIR")]
    pub plot_dir: Option<PathBuf>,

    /// Run configuration file (YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip certification of solved cycles
    #[arg(long)]
    pub no_certify: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}
