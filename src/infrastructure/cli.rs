// Infrastructure: command-line configuration and process setup
// Single Responsibility: turn argv and a file into a rendered answer

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::solve_it;
use crate::domain::{MipBackend, MipConfig, Result};
use crate::strategy::Strategy;

pub const USAGE: &str = "This program requires an input file. Please select one from the data directory. (i.e. facloc ./data/fl_16_2)";

/// Wall-clock budget the command line gives the exact strategy
pub const DEFAULT_TIME_LIMIT_SECONDS: f64 = 1800.0;

pub struct CliConfig {
    pub input_path: PathBuf,
    pub strategy: Strategy,
}

impl CliConfig {
    pub fn new(input_path: impl Into<PathBuf>, strategy: Strategy) -> Self {
        Self {
            input_path: input_path.into(),
            strategy,
        }
    }

    /// Exact strategy, quiet backend, default thread count and time limit.
    pub fn exact(input_path: impl Into<PathBuf>, backend: Arc<dyn MipBackend>) -> Self {
        let config = MipConfig::new()
            .with_verbose(false)
            .with_time_limit(DEFAULT_TIME_LIMIT_SECONDS);
        Self::new(input_path, Strategy::mip(config, backend))
    }
}

/// First positional argument, if any.
pub fn input_path_from_args<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .next()
        .map(|arg| arg.trim().to_string())
        .filter(|arg| !arg.is_empty())
        .map(PathBuf::from)
}

/// Install the stderr fmt subscriber; stdout carries only the answer.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("facloc=info"))
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn run(config: &CliConfig) -> Result<String> {
    info!(path = %config.input_path.display(), "Reading instance");
    let input = fs::read_to_string(&config.input_path)?;
    solve_it(&input, &config.strategy)
}
