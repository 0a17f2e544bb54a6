// Solving strategies over the facility location model

pub mod mip;
pub mod trivial;

use crate::domain::{Customer, Facility, MipBackend, MipConfig, Result, SolveResult};
use std::fmt;
use std::sync::Arc;

/// The two ways of solving an instance
#[derive(Clone)]
pub enum Strategy {
    /// Sequential greedy packing, fast and never proven optimal
    Trivial,
    /// Exact binary program handed to an external MIP backend
    Mip {
        config: MipConfig,
        backend: Arc<dyn MipBackend>,
    },
}

impl Strategy {
    pub fn mip(config: MipConfig, backend: Arc<dyn MipBackend>) -> Self {
        Strategy::Mip { config, backend }
    }

    pub fn solve(&self, facilities: &[Facility], customers: &[Customer]) -> Result<SolveResult> {
        match self {
            Strategy::Trivial => trivial::solve(facilities, customers),
            Strategy::Mip { config, backend } => {
                mip::solve(facilities, customers, config, backend.as_ref())
            }
        }
    }
}

impl fmt::Debug for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Trivial => write!(f, "Trivial"),
            Strategy::Mip { config, backend } => f
                .debug_struct("Mip")
                .field("config", config)
                .field("backend", &backend.name())
                .finish(),
        }
    }
}
