use super::text_format::{parse_instance, render_result};
use crate::domain::Result;
use crate::strategy::Strategy;
use tracing::info;

/// Parse `input`, solve it with `strategy` and render the two-line answer.
pub fn solve_it(input: &str, strategy: &Strategy) -> Result<String> {
    let instance = parse_instance(input)?;

    info!(
        facilities = instance.facilities.len(),
        customers = instance.customers.len(),
        total_demand = instance.total_demand(),
        total_capacity = instance.total_capacity(),
        strategy = ?strategy,
        "Solving facility location instance"
    );

    let result = strategy.solve(&instance.facilities, &instance.customers)?;
    Ok(render_result(&result))
}
