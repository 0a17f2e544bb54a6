// Sequential packing heuristic
// Fills facilities in index order and never revisits a facility once the cursor moves on

use crate::domain::{Assignment, Customer, Facility, Result, SolveResult, SolverError};
use tracing::{debug, info};

/// Pack customers into facilities one by one until all customers are served.
///
/// The cursor starts at facility 0 and only moves forward. When the current
/// facility cannot take a customer the cursor advances exactly once; if the
/// next facility cannot take the customer either, or there is no next
/// facility, the solve fails with [`SolverError::PackingExhausted`].
///
/// The result is feasible but carries no optimality guarantee, so
/// `is_optimal` is always false.
pub fn solve(facilities: &[Facility], customers: &[Customer]) -> Result<SolveResult> {
    let mut capacity_remaining: Vec<u64> = facilities.iter().map(|f| f.capacity).collect();
    let mut facility_of = Vec::with_capacity(customers.len());
    let mut cursor = 0usize;

    for customer in customers {
        let fits = |remaining: &[u64], j: usize| {
            remaining
                .get(j)
                .is_some_and(|&left| left >= customer.demand)
        };

        if !fits(&capacity_remaining, cursor) {
            cursor += 1;
            debug!(customer = customer.index, facility = cursor, "advancing facility cursor");
            if !fits(&capacity_remaining, cursor) {
                return Err(SolverError::PackingExhausted {
                    customer: customer.index,
                    demand: customer.demand,
                });
            }
        }

        capacity_remaining[cursor] -= customer.demand;
        facility_of.push(cursor);
    }

    let assignment = Assignment::new(facility_of);
    let objective = assignment.cost(facilities, customers);

    info!(
        customers = customers.len(),
        facilities_used = cursor + usize::from(!customers.is_empty()),
        objective,
        "Greedy packing finished"
    );

    Ok(SolveResult::new(objective, false, assignment))
}
