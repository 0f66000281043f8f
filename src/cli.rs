// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "scrollspace")]
#[command(about = "Scroll-driven space scene", long_about = None)]
pub struct Cli {
    /// Background image assigned once it loads
    #[arg(long, default_value = "espaco.jpeg")]
    pub background: PathBuf,

    /// Number of starfield spheres
    #[arg(long, default_value_t = 200)]
    pub stars: usize,

    /// Seed for star placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Disable UI elements and console output
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Skip the grid helper
    #[arg(long = "no-grid", default_value = "false")]
    pub no_grid: bool,
}
