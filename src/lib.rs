// Domain layer: facility location records, binary program, backend contract
pub mod domain;

// Strategies: greedy packing and exact MIP
pub mod strategy;

// Application layer: text formats and the solve use case
pub mod application;

// Infrastructure layer: command line and tracing setup
pub mod infrastructure;

// Solver adapters: concrete implementations of MipBackend
pub mod solver;

// Re-export commonly used types
pub use domain::{
    distance, Assignment, Customer, Facility, Instance, MipBackend, MipConfig, MipModel,
    ModelSolution, Point, Result, SolutionStatus, SolveResult, SolverBackend, SolverError,
};

pub use application::{parse_instance, parse_result, render_result, solve_it};

pub use infrastructure::{init_tracing, input_path_from_args, run, CliConfig, USAGE};

pub use solver::SolverFactory;
#[cfg(feature = "cbc")]
pub use solver::CoinCbcSolver;
#[cfg(feature = "highs")]
pub use solver::HighsSolver;

pub use strategy::Strategy;
