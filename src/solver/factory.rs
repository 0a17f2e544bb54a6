use crate::domain::{MipBackend, Result, SolverBackend};
use std::sync::Arc;

/// Factory for creating MIP backends from the features compiled in
pub struct SolverFactory;

impl SolverFactory {
    /// Create a backend for a specific solver
    pub fn create_from_backend(backend: SolverBackend) -> Result<Arc<dyn MipBackend>> {
        match backend {
            SolverBackend::Auto => Self::default_solver(),
            SolverBackend::CoinCbc => Self::coin_cbc(),
            SolverBackend::Highs => Self::highs(),
        }
    }

    /// Get the default backend (HiGHS, then CBC)
    pub fn default_solver() -> Result<Arc<dyn MipBackend>> {
        Self::highs().or_else(|_| Self::coin_cbc())
    }

    #[cfg(feature = "cbc")]
    fn coin_cbc() -> Result<Arc<dyn MipBackend>> {
        Ok(Arc::new(super::CoinCbcSolver::new()))
    }

    #[cfg(not(feature = "cbc"))]
    fn coin_cbc() -> Result<Arc<dyn MipBackend>> {
        Err(crate::domain::SolverError::SolverNotAvailable(format!(
            "{} (build with the `cbc` feature)",
            SolverBackend::CoinCbc
        )))
    }

    #[cfg(feature = "highs")]
    fn highs() -> Result<Arc<dyn MipBackend>> {
        Ok(Arc::new(super::HighsSolver::new()))
    }

    #[cfg(not(feature = "highs"))]
    fn highs() -> Result<Arc<dyn MipBackend>> {
        Err(crate::domain::SolverError::SolverNotAvailable(format!(
            "{} (build with the `highs` feature)",
            SolverBackend::Highs
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_availability_follows_features() {
        let cbc = SolverFactory::create_from_backend(SolverBackend::CoinCbc);
        assert_eq!(cbc.is_ok(), cfg!(feature = "cbc"));

        let highs = SolverFactory::create_from_backend(SolverBackend::Highs);
        assert_eq!(highs.is_ok(), cfg!(feature = "highs"));

        let auto = SolverFactory::create_from_backend(SolverBackend::Auto);
        assert_eq!(auto.is_ok(), cfg!(any(feature = "cbc", feature = "highs")));
    }

    #[cfg(feature = "highs")]
    #[test]
    fn test_default_prefers_highs() {
        let backend = SolverFactory::default_solver().unwrap();
        assert_eq!(backend.name(), "HiGHS");
    }

    #[cfg(not(any(feature = "cbc", feature = "highs")))]
    #[test]
    fn test_missing_backend_error_names_feature() {
        let err = SolverFactory::default_solver().err().unwrap().to_string();
        assert!(err.contains("`cbc` feature"));
    }
}
