// Text format mapping: instance files in, two-line results out
// Keeps string handling out of the domain and strategy layers

use crate::domain::{Assignment, Customer, Facility, Instance, Point, Result, SolveResult, SolverError};
use std::str::FromStr;

/// Parse `"<F> <C>"`, then `F` facility lines `"<setup_cost> <capacity> <x> <y>"`,
/// then `C` customer lines `"<demand> <x> <y>"`.
///
/// Blank lines are skipped. Any malformed or missing line rejects the whole
/// input; error line numbers are 1-based.
pub fn parse_instance(input: &str) -> Result<Instance> {
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (line_no, header) = lines.next().ok_or_else(|| SolverError::Parse {
        line: 1,
        message: "missing header line".to_string(),
    })?;
    let [f, c] = fields::<2>(line_no, header)?;
    let facility_count: usize = parse_field(line_no, "facility count", f)?;
    let customer_count: usize = parse_field(line_no, "customer count", c)?;

    let mut facilities = Vec::with_capacity(facility_count);
    for index in 0..facility_count {
        let (line_no, line) = lines.next().ok_or_else(|| truncated(input, "facility", index))?;
        let [setup, capacity, x, y] = fields::<4>(line_no, line)?;

        let setup_cost: f64 = parse_field(line_no, "setup cost", setup)?;
        if !(setup_cost.is_finite() && setup_cost >= 0.0) {
            return Err(invalid(line_no, "setup cost must be a non-negative number"));
        }
        let capacity: u64 = parse_field(line_no, "capacity", capacity)?;
        if capacity == 0 {
            return Err(invalid(line_no, "capacity must be positive"));
        }

        facilities.push(Facility::new(
            index,
            setup_cost,
            capacity,
            parse_point(line_no, x, y)?,
        ));
    }

    let mut customers = Vec::with_capacity(customer_count);
    for index in 0..customer_count {
        let (line_no, line) = lines.next().ok_or_else(|| truncated(input, "customer", index))?;
        let [demand, x, y] = fields::<3>(line_no, line)?;

        let demand: u64 = parse_field(line_no, "demand", demand)?;
        if demand == 0 {
            return Err(invalid(line_no, "demand must be positive"));
        }

        customers.push(Customer::new(index, demand, parse_point(line_no, x, y)?));
    }

    if let Some((line_no, _)) = lines.next() {
        return Err(invalid(line_no, "unexpected content after the last customer"));
    }

    Ok(Instance::new(facilities, customers))
}

/// Render `"<objective:.2> <0|1>"` and the facility index of every customer.
pub fn render_result(result: &SolveResult) -> String {
    let indices: Vec<String> = result
        .assignment
        .as_slice()
        .iter()
        .map(|j| j.to_string())
        .collect();

    format!(
        "{:.2} {}\n{}",
        result.objective,
        u8::from(result.is_optimal),
        indices.join(" ")
    )
}

/// Parse text produced by [`render_result`].
pub fn parse_result(output: &str) -> Result<SolveResult> {
    let mut lines = output.lines();

    let header = lines.next().ok_or_else(|| invalid(1, "missing objective line"))?;
    let [objective, flag] = fields::<2>(1, header)?;
    let objective: f64 = parse_field(1, "objective", objective)?;
    let is_optimal = match flag {
        "0" => false,
        "1" => true,
        other => {
            return Err(invalid(
                1,
                &format!("optimality flag must be 0 or 1, got '{}'", other),
            ))
        }
    };

    let facility_of = lines
        .next()
        .unwrap_or("")
        .split_whitespace()
        .map(|token| parse_field(2, "facility index", token))
        .collect::<Result<Vec<usize>>>()?;

    Ok(SolveResult::new(
        objective,
        is_optimal,
        Assignment::new(facility_of),
    ))
}

fn fields<const N: usize>(line_no: usize, line: &str) -> Result<[&str; N]> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let found = parts.len();
    parts.try_into().map_err(|_| SolverError::Parse {
        line: line_no,
        message: format!("expected {} fields, found {}", N, found),
    })
}

fn parse_field<T: FromStr>(line_no: usize, name: &str, raw: &str) -> Result<T> {
    raw.parse().map_err(|_| SolverError::Parse {
        line: line_no,
        message: format!("invalid {} '{}'", name, raw),
    })
}

fn parse_point(line_no: usize, x: &str, y: &str) -> Result<Point> {
    Ok(Point::new(
        parse_field(line_no, "x coordinate", x)?,
        parse_field(line_no, "y coordinate", y)?,
    ))
}

fn invalid(line_no: usize, message: &str) -> SolverError {
    SolverError::Parse {
        line: line_no,
        message: message.to_string(),
    }
}

fn truncated(input: &str, what: &str, index: usize) -> SolverError {
    SolverError::Parse {
        line: input.lines().count() + 1,
        message: format!("input ended before {} {}", what, index),
    }
}
