// Infrastructure layer: command-line entry support

pub mod cli;

pub use cli::{
    init_tracing, input_path_from_args, run, CliConfig, DEFAULT_TIME_LIMIT_SECONDS, USAGE,
};
