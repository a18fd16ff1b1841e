//! Command-line flag definitions.

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "hog",
    version,
    about = "Hog dice game simulator and strategy experiments"
)]
pub struct HogCli {
    /// Run the strategy experiments enabled in the configuration
    #[arg(short = 'r', long = "run_experiments")]
    pub run_experiments: bool,
    /// Seed for the dice; a random seed is drawn when absent
    #[arg(long)]
    pub seed: Option<u64>,
    /// Monte Carlo samples per estimate
    #[arg(long)]
    pub samples: Option<usize>,
    /// Print the experiment report as JSON
    #[arg(long)]
    pub json: bool,
    /// Print the resolved configuration and where each value came from
    #[arg(long = "show-config")]
    pub show_config: bool,
}
