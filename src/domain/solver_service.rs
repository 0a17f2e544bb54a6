// Domain service interface for MIP backends
// The exact strategy only talks to this trait, never to a concrete solver crate

use super::mip_model::MipModel;
use super::models::{MipConfig, SolverStatistics};
use super::value_objects::SolutionStatus;

/// Error types for the facility location solver
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Greedy packing ran out of facilities at customer {customer} (demand {demand})")]
    PackingExhausted { customer: usize, demand: u64 },

    #[error("Model is infeasible: {0}")]
    Infeasible(String),

    #[error("Solver not available: {0}")]
    SolverNotAvailable(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// What a backend hands back after solving a [`MipModel`]
#[derive(Debug, Clone)]
pub struct ModelSolution {
    pub status: SolutionStatus,
    /// Objective reported by the backend, absent without an incumbent
    pub objective_value: Option<f64>,
    /// One value per model variable, empty without an incumbent
    pub variable_values: Vec<f64>,
    pub statistics: SolverStatistics,
}

impl ModelSolution {
    pub fn new(status: SolutionStatus) -> Self {
        Self {
            status,
            objective_value: None,
            variable_values: Vec::new(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn with_values(mut self, objective_value: f64, variable_values: Vec<f64>) -> Self {
        self.objective_value = Some(objective_value);
        self.variable_values = variable_values;
        self
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    pub fn has_incumbent(&self) -> bool {
        matches!(
            self.status,
            SolutionStatus::Optimal | SolutionStatus::TimeLimit
        ) && self.objective_value.is_some()
    }
}

/// Narrow interface to an external MIP solver.
///
/// Implementations translate a [`MipModel`] into their native API, apply the
/// thread count, time limit and log settings from [`MipConfig`], minimize,
/// and read back status, objective and variable values.
pub trait MipBackend: Send + Sync {
    /// Solve a binary minimization program
    fn solve(&self, model: &MipModel, config: &MipConfig) -> Result<ModelSolution>;

    /// Validate a model without solving it
    fn validate(&self, model: &MipModel) -> Result<()> {
        let mut errors = Vec::new();
        let num_vars = model.num_variables();

        for (i, var) in model.variables.iter().enumerate() {
            if !var.cost.is_finite() {
                errors.push(format!(
                    "Variable {} '{}' has non-finite cost {}",
                    i, var.name, var.cost
                ));
            }
        }

        for (i, constraint) in model.constraints.iter().enumerate() {
            if !constraint.bound.is_finite() {
                errors.push(format!(
                    "Constraint {} '{}' has non-finite bound",
                    i, constraint.name
                ));
            }
            for &(var, coeff) in &constraint.terms {
                if var.index() >= num_vars {
                    errors.push(format!(
                        "Constraint {} '{}' references variable {} but model has {} variables",
                        i,
                        constraint.name,
                        var.index(),
                        num_vars
                    ));
                }
                if !coeff.is_finite() {
                    errors.push(format!(
                        "Constraint {} '{}' has non-finite coefficient",
                        i, constraint.name
                    ));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConstraintType, LinearConstraint};

    struct NullBackend;

    impl MipBackend for NullBackend {
        fn solve(&self, _model: &MipModel, _config: &MipConfig) -> Result<ModelSolution> {
            Ok(ModelSolution::new(SolutionStatus::Infeasible))
        }

        fn name(&self) -> &str {
            "null"
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_model() {
        let mut model = MipModel::new("ok");
        let x = model.add_binary("x", 1.0);
        model.add_constraint(LinearConstraint::new(
            "c",
            vec![(x, 1.0)],
            ConstraintType::Equal,
            1.0,
        ));
        assert!(NullBackend.validate(&model).is_ok());
    }

    #[test]
    fn test_validate_rejects_dangling_variable_and_nan() {
        let mut source = MipModel::new("other");
        source.add_binary("a", 0.0);
        let dangling = source.add_binary("b", 0.0);

        let mut model = MipModel::new("bad");
        model.add_binary("x", f64::NAN);
        model.add_constraint(LinearConstraint::new(
            "c",
            vec![(dangling, 1.0)],
            ConstraintType::LessThanOrEqual,
            1.0,
        ));

        let err = NullBackend.validate(&model).unwrap_err().to_string();
        assert!(err.contains("non-finite cost"));
        assert!(err.contains("references variable 1"));
    }

    #[test]
    fn test_has_incumbent() {
        let solution = ModelSolution::new(SolutionStatus::TimeLimit);
        assert!(!solution.has_incumbent());
        let solution = solution.with_values(3.0, vec![1.0]);
        assert!(solution.has_incumbent());
        assert!(!solution.is_optimal());
    }
}
