// COIN-OR CBC adapter
// Translates a MipModel into good_lp expressions and runs CBC through its coin_cbc backend

use crate::domain::{
    ConstraintType, MipBackend, MipConfig, MipModel, ModelSolution, Result, SolutionStatus,
    SolverError, SolverStatistics,
};
use good_lp::{
    solvers::coin_cbc::coin_cbc, variable, variables, Expression, ResolutionError, Solution,
    SolverModel, Variable as GoodLpVariable,
};
use std::time::Instant;
use tracing::debug;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MipBackend for CoinCbcSolver {
    fn solve(&self, model: &MipModel, config: &MipConfig) -> Result<ModelSolution> {
        // Validate first
        self.validate(model)?;

        let start_time = Instant::now();

        // One binary column per model variable
        let mut vars = variables!();
        let lp_variables: Vec<GoodLpVariable> = model
            .variables
            .iter()
            .map(|_| vars.add(variable().integer().min(0.0).max(1.0)))
            .collect();

        let mut obj_expr: Expression = 0.into();
        for (var, cost) in lp_variables.iter().zip(model.objective_coefficients()) {
            if cost != 0.0 {
                obj_expr += cost * *var;
            }
        }

        let mut lp_model = vars.minimise(obj_expr).using(coin_cbc);

        lp_model.set_parameter("log", if config.verbose { "1" } else { "0" });
        lp_model.set_parameter("threads", &config.threads().to_string());
        if let Some(seconds) = config.time_limit_seconds {
            lp_model.set_parameter("seconds", &seconds.to_string());
        }

        for constraint in &model.constraints {
            let mut lhs: Expression = 0.into();
            for &(var, coeff) in &constraint.terms {
                lhs += coeff * lp_variables[var.index()];
            }

            match constraint.constraint_type {
                ConstraintType::LessThanOrEqual => {
                    lp_model.add_constraint(lhs.leq(constraint.bound));
                }
                ConstraintType::Equal => {
                    lp_model.add_constraint(lhs.eq(constraint.bound));
                }
                ConstraintType::GreaterThanOrEqual => {
                    lp_model.add_constraint(lhs.geq(constraint.bound));
                }
            }
        }

        debug!(
            variables = model.num_variables(),
            constraints = model.num_constraints(),
            "CBC model built"
        );

        let solution_result = lp_model.solve();
        let statistics = SolverStatistics {
            solve_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        };

        match solution_result {
            Ok(sol) => {
                let variable_values: Vec<f64> =
                    lp_variables.iter().map(|&var| sol.value(var)).collect();

                let raw = sol.model();
                let status = if raw.is_proven_optimal() {
                    SolutionStatus::Optimal
                } else {
                    SolutionStatus::TimeLimit
                };

                Ok(ModelSolution::new(status)
                    .with_values(raw.obj_value(), variable_values)
                    .with_statistics(statistics))
            }
            Err(ResolutionError::Infeasible) => {
                Ok(ModelSolution::new(SolutionStatus::Infeasible).with_statistics(statistics))
            }
            Err(ResolutionError::Unbounded) => {
                Ok(ModelSolution::new(SolutionStatus::Unbounded).with_statistics(statistics))
            }
            Err(e) => Err(SolverError::ExecutionFailed(format!("{:?}", e))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }
}
