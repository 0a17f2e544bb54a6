// Exact strategy: binary integer program solved by an external MIP backend

use crate::domain::{
    distance, Assignment, ConstraintType, Customer, Facility, LinearConstraint, MipBackend,
    MipConfig, MipModel, ModelSolution, Result, SolutionStatus, SolveResult, SolverError, VarId,
};
use tracing::{debug, info, warn};

/// Variable values above this are read back as 1.
const BINARY_THRESHOLD: f64 = 0.5;

/// Capacitated facility location program together with its variable handles.
///
/// `x[j]` opens facility `j`; `y[i][j]` assigns customer `i` to facility `j`.
#[derive(Debug, Clone)]
pub struct FacilityModel {
    pub model: MipModel,
    pub x: Vec<VarId>,
    pub y: Vec<Vec<VarId>>,
}

impl FacilityModel {
    /// Build the program.
    ///
    /// - objective: `Σ_j setup_j x_j + Σ_{i,j} dist(i, j) y_ij`
    /// - `assign[i]`: `Σ_j y_ij = 1`
    /// - `open[i,j]`: `x_j - y_ij >= 0`, one row per pair
    /// - `cap[j]`: `Σ_i demand_i y_ij <= capacity_j`
    pub fn build(facilities: &[Facility], customers: &[Customer]) -> Self {
        let mut model = MipModel::new("facility_location");

        let x: Vec<VarId> = facilities
            .iter()
            .enumerate()
            .map(|(j, f)| model.add_binary(format!("x[{}]", j), f.setup_cost))
            .collect();

        let y: Vec<Vec<VarId>> = customers
            .iter()
            .enumerate()
            .map(|(i, c)| {
                facilities
                    .iter()
                    .enumerate()
                    .map(|(j, f)| {
                        model.add_binary(
                            format!("y[{},{}]", i, j),
                            distance(c.location, f.location),
                        )
                    })
                    .collect()
            })
            .collect();

        for (i, row) in y.iter().enumerate() {
            let terms = row.iter().map(|&var| (var, 1.0)).collect();
            model.add_constraint(LinearConstraint::new(
                format!("assign[{}]", i),
                terms,
                ConstraintType::Equal,
                1.0,
            ));
        }

        for (i, row) in y.iter().enumerate() {
            for (j, &y_ij) in row.iter().enumerate() {
                model.add_constraint(LinearConstraint::new(
                    format!("open[{},{}]", i, j),
                    vec![(x[j], 1.0), (y_ij, -1.0)],
                    ConstraintType::GreaterThanOrEqual,
                    0.0,
                ));
            }
        }

        for (j, facility) in facilities.iter().enumerate() {
            let terms = customers
                .iter()
                .zip(&y)
                .map(|(c, row)| (row[j], c.demand as f64))
                .collect();
            model.add_constraint(LinearConstraint::new(
                format!("cap[{}]", j),
                terms,
                ConstraintType::LessThanOrEqual,
                facility.capacity as f64,
            ));
        }

        Self { model, x, y }
    }

    /// Read the serving facility of every customer out of solved values.
    ///
    /// Each customer must have exactly one `y_ij` set.
    pub fn read_assignment(&self, values: &[f64]) -> Result<Assignment> {
        if values.len() != self.model.num_variables() {
            return Err(SolverError::ExecutionFailed(format!(
                "Backend returned {} values for {} variables",
                values.len(),
                self.model.num_variables()
            )));
        }

        let facility_of = self
            .y
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut chosen = row
                    .iter()
                    .enumerate()
                    .filter(|(_, var)| values[var.index()] > BINARY_THRESHOLD)
                    .map(|(j, _)| j);
                match (chosen.next(), chosen.next()) {
                    (Some(j), None) => Ok(j),
                    (None, _) => Err(SolverError::ExecutionFailed(format!(
                        "Customer {} is not assigned in the solver output",
                        i
                    ))),
                    (Some(_), Some(_)) => Err(SolverError::ExecutionFailed(format!(
                        "Customer {} is assigned to several facilities in the solver output",
                        i
                    ))),
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Assignment::new(facility_of))
    }

    /// Map a backend outcome onto a [`SolveResult`].
    pub fn into_result(&self, solution: ModelSolution) -> Result<SolveResult> {
        match solution.status {
            SolutionStatus::Optimal | SolutionStatus::TimeLimit => {
                let objective = solution.objective_value.ok_or_else(|| {
                    SolverError::ExecutionFailed(format!(
                        "Solver stopped ({}) without a feasible incumbent",
                        solution.status
                    ))
                })?;
                let assignment = self.read_assignment(&solution.variable_values)?;
                Ok(SolveResult::new(
                    objective,
                    solution.is_optimal(),
                    assignment,
                ))
            }
            SolutionStatus::Infeasible => Err(SolverError::Infeasible(
                "no assignment satisfies every capacity".to_string(),
            )),
            SolutionStatus::Unbounded => Err(SolverError::ExecutionFailed(
                "Solver reported an unbounded objective".to_string(),
            )),
        }
    }
}

/// Solve the instance exactly with `backend`.
///
/// Infeasibility is returned as [`SolverError::Infeasible`]; there is no
/// fallback to the greedy strategy. Hitting the time limit with an incumbent
/// is not an error and yields `is_optimal == false`.
pub fn solve(
    facilities: &[Facility],
    customers: &[Customer],
    config: &MipConfig,
    backend: &dyn MipBackend,
) -> Result<SolveResult> {
    if customers.is_empty() {
        debug!("No customers, nothing to open");
        return Ok(SolveResult::new(0.0, true, Assignment::default()));
    }
    if facilities.is_empty() {
        return Err(SolverError::Infeasible(format!(
            "{} customers but no facilities",
            customers.len()
        )));
    }

    let formulation = FacilityModel::build(facilities, customers);

    info!(
        backend = backend.name(),
        facilities = facilities.len(),
        customers = customers.len(),
        variables = formulation.model.num_variables(),
        constraints = formulation.model.num_constraints(),
        threads = config.threads(),
        time_limit = ?config.time_limit_seconds,
        "Solving facility location MIP"
    );

    let solution = backend.solve(&formulation.model, config)?;

    info!(
        status = %solution.status,
        objective = ?solution.objective_value,
        solve_time_ms = solution.statistics.solve_time_ms,
        "MIP backend finished"
    );
    if solution.status == SolutionStatus::TimeLimit {
        warn!("Time limit reached before optimality was proven, returning incumbent");
    }

    formulation.into_result(solution)
}
