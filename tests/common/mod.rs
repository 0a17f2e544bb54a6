// Shared fixtures for the integration tests

#![allow(dead_code)]

use facloc::{
    Customer, Facility, MipBackend, MipConfig, MipModel, ModelSolution, Point, Result,
    SolutionStatus, SolverError,
};

/// Exhaustive search over every 0/1 vector; only usable for tiny models.
pub struct EnumerationBackend;

const MAX_VARIABLES: usize = 20;

impl MipBackend for EnumerationBackend {
    fn solve(&self, model: &MipModel, _config: &MipConfig) -> Result<ModelSolution> {
        self.validate(model)?;

        let n = model.num_variables();
        if n > MAX_VARIABLES {
            return Err(SolverError::ExecutionFailed(format!(
                "{} variables is too many to enumerate",
                n
            )));
        }

        let mut best: Option<(f64, Vec<f64>)> = None;
        for mask in 0u32..(1u32 << n) {
            let values: Vec<f64> = (0..n).map(|k| f64::from((mask >> k) & 1)).collect();
            if !model.is_satisfied_by(&values, 1e-9) {
                continue;
            }
            let objective = model.objective_value(&values);
            if best.as_ref().map_or(true, |(b, _)| objective < *b - 1e-12) {
                best = Some((objective, values));
            }
        }

        Ok(match best {
            Some((objective, values)) => {
                ModelSolution::new(SolutionStatus::Optimal).with_values(objective, values)
            }
            None => ModelSolution::new(SolutionStatus::Infeasible),
        })
    }

    fn name(&self) -> &str {
        "enumeration"
    }
}

pub fn facility(index: usize, setup_cost: f64, capacity: u64, x: f64, y: f64) -> Facility {
    Facility::new(index, setup_cost, capacity, Point::new(x, y))
}

pub fn customer(index: usize, demand: u64, x: f64, y: f64) -> Customer {
    Customer::new(index, demand, Point::new(x, y))
}

/// Two unit facilities ten apart, one customer above each.
pub fn two_by_two() -> (Vec<Facility>, Vec<Customer>) {
    (
        vec![facility(0, 0.0, 1, 0.0, 0.0), facility(1, 0.0, 1, 10.0, 0.0)],
        vec![customer(0, 1, 0.0, 1.0), customer(1, 1, 10.0, 1.0)],
    )
}

/// One facility exactly filled by three co-located customers.
pub fn single_site() -> (Vec<Facility>, Vec<Customer>) {
    (
        vec![facility(0, 100.0, 10, 5.0, 5.0)],
        vec![
            customer(0, 3, 5.0, 5.0),
            customer(1, 3, 5.0, 5.0),
            customer(2, 4, 5.0, 5.0),
        ],
    )
}

/// Total demand three, total capacity two.
pub fn over_demand() -> (Vec<Facility>, Vec<Customer>) {
    (
        vec![facility(0, 1.0, 1, 0.0, 0.0), facility(1, 1.0, 1, 1.0, 0.0)],
        vec![
            customer(0, 1, 0.0, 0.0),
            customer(1, 1, 0.0, 0.0),
            customer(2, 1, 0.0, 0.0),
        ],
    )
}
