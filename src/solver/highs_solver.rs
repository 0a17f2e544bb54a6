// HiGHS Solver Adapter
// Implements the MipBackend interface for HiGHS
// This is an adapter pattern - translates our MipModel to HiGHS rows and columns

use crate::domain::{
    ConstraintType, MipBackend, MipConfig, MipModel, ModelSolution, Result, SolutionStatus,
    SolverError, SolverStatistics,
};
use highs::{Col, HighsModelStatus, RowProblem, Sense};
use std::time::Instant;
use tracing::debug;

/// Row slack accepted when checking a time-limited incumbent.
const FEASIBILITY_TOLERANCE: f64 = 1e-6;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MipBackend for HighsSolver {
    fn solve(&self, model: &MipModel, config: &MipConfig) -> Result<ModelSolution> {
        // Validate first
        self.validate(model)?;

        let start_time = Instant::now();

        // Columns first, then rows
        let mut pb = RowProblem::default();
        let cols: Vec<Col> = model
            .variables
            .iter()
            .map(|var| pb.add_integer_column(var.cost, 0.0..=1.0))
            .collect();

        for constraint in &model.constraints {
            let terms: Vec<(Col, f64)> = constraint
                .terms
                .iter()
                .map(|&(var, coeff)| (cols[var.index()], coeff))
                .collect();

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    pb.add_row(..=constraint.bound, &terms);
                }
                ConstraintType::Equal => {
                    pb.add_row(constraint.bound..=constraint.bound, &terms);
                }
                ConstraintType::GreaterThanOrEqual => {
                    pb.add_row(constraint.bound.., &terms);
                }
            }
        }

        let mut highs_model = pb.optimise(Sense::Minimise);
        if !config.verbose {
            highs_model.make_quiet();
        }
        highs_model.set_option("threads", config.threads() as i32);
        if let Some(seconds) = config.time_limit_seconds {
            highs_model.set_option("time_limit", seconds);
        }

        debug!(
            variables = model.num_variables(),
            constraints = model.num_constraints(),
            "HiGHS model built"
        );

        let solved = highs_model.solve();
        let statistics = SolverStatistics {
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        };

        let status = match solved.status() {
            HighsModelStatus::Optimal => SolutionStatus::Optimal,
            HighsModelStatus::ReachedTimeLimit => SolutionStatus::TimeLimit,
            HighsModelStatus::Infeasible | HighsModelStatus::UnboundedOrInfeasible => {
                return Ok(ModelSolution::new(SolutionStatus::Infeasible).with_statistics(statistics))
            }
            HighsModelStatus::Unbounded => {
                return Ok(ModelSolution::new(SolutionStatus::Unbounded).with_statistics(statistics))
            }
            status => {
                return Err(SolverError::ExecutionFailed(format!(
                    "HiGHS solver returned status: {:?}",
                    status
                )))
            }
        };

        let variable_values = solved.get_solution().columns().to_vec();
        let solution = ModelSolution::new(status).with_statistics(statistics);

        match incumbent(model, status, variable_values) {
            Some(values) => Ok(solution.with_values(solved.objective_value(), values)),
            None => {
                debug!("HiGHS stopped without a feasible incumbent");
                Ok(solution)
            }
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}

/// Column values worth reporting for `status`.
///
/// HiGHS always fills one value per column, even when a time-limited run
/// found no integer solution, so those values count only if they satisfy
/// every row.
fn incumbent(model: &MipModel, status: SolutionStatus, values: Vec<f64>) -> Option<Vec<f64>> {
    let usable = match status {
        SolutionStatus::Optimal => values.len() == model.num_variables(),
        SolutionStatus::TimeLimit => model.is_satisfied_by(&values, FEASIBILITY_TOLERANCE),
        SolutionStatus::Infeasible | SolutionStatus::Unbounded => false,
    };
    usable.then_some(values)
}
