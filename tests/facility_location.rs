mod common;

use approx::assert_relative_eq;
use common::{customer, facility, over_demand, single_site, two_by_two, EnumerationBackend};
use facloc::{
    parse_result, render_result, solve_it, Customer, Facility, MipConfig, SolverError, Strategy,
};
use proptest::prelude::*;
use proptest::strategy::Strategy as _;
use std::sync::Arc;

fn exact() -> Strategy {
    Strategy::mip(MipConfig::new().with_threads(1), Arc::new(EnumerationBackend))
}

#[test]
fn test_two_by_two_exact() {
    let (facilities, customers) = two_by_two();
    let result = exact().solve(&facilities, &customers).unwrap();

    assert_eq!(result.assignment.as_slice(), &[0, 1]);
    assert_relative_eq!(result.objective, 2.0);
    assert!(result.is_optimal);
    assert_eq!(render_result(&result), "2.00 1\n0 1");
}

#[test]
fn test_single_site_exact() {
    let (facilities, customers) = single_site();
    let result = exact().solve(&facilities, &customers).unwrap();

    assert_eq!(result.assignment.as_slice(), &[0, 0, 0]);
    assert_relative_eq!(result.objective, 100.0);
    assert_eq!(render_result(&result), "100.00 1\n0 0 0");
}

#[test]
fn test_over_demand_fails_for_both_strategies() {
    let (facilities, customers) = over_demand();

    let err = exact().solve(&facilities, &customers).unwrap_err();
    assert!(matches!(err, SolverError::Infeasible(_)));

    let err = Strategy::Trivial.solve(&facilities, &customers).unwrap_err();
    assert!(matches!(err, SolverError::PackingExhausted { customer: 2, .. }));
}

#[test]
fn test_exact_skips_expensive_first_facility() {
    let facilities = vec![
        facility(0, 1000.0, 10, 0.0, 0.0),
        facility(1, 1.0, 10, 0.0, 0.0),
    ];
    let customers = vec![customer(0, 1, 0.0, 0.0), customer(1, 1, 0.0, 0.0)];

    let greedy = Strategy::Trivial.solve(&facilities, &customers).unwrap();
    let exact = exact().solve(&facilities, &customers).unwrap();

    assert_relative_eq!(greedy.objective, 1000.0);
    assert_relative_eq!(exact.objective, 1.0);
    assert_eq!(exact.assignment.as_slice(), &[1, 1]);
}

#[test]
fn test_exact_trades_setup_cost_against_distance() {
    // Opening the far facility costs 5 but saves 2 * 9 of travel.
    let facilities = vec![
        facility(0, 0.0, 10, 0.0, 0.0),
        facility(1, 5.0, 10, 10.0, 0.0),
    ];
    let customers = vec![
        customer(0, 1, 1.0, 0.0),
        customer(1, 1, 10.0, 0.0),
        customer(2, 1, 10.0, 0.0),
    ];

    let result = exact().solve(&facilities, &customers).unwrap();
    assert_eq!(result.assignment.as_slice(), &[0, 1, 1]);
    assert_relative_eq!(result.objective, 6.0);
}

#[test]
fn test_exact_rerun_gives_same_objective() {
    // Two equally good layouts: either facility can host both customers.
    let facilities = vec![
        facility(0, 3.0, 2, 0.0, 0.0),
        facility(1, 3.0, 2, 0.0, 0.0),
    ];
    let customers = vec![customer(0, 1, 0.0, 2.0), customer(1, 1, 0.0, -2.0)];
    let strategy = exact();

    let first = strategy.solve(&facilities, &customers).unwrap();
    let second = strategy.solve(&facilities, &customers).unwrap();
    assert_relative_eq!(first.objective, 7.0);
    assert_relative_eq!(first.objective, second.objective);
    assert!(second.is_optimal);
}

#[test]
fn test_solve_it_end_to_end() {
    let input = "2 2\n0 1 0 0\n0 1 10 0\n1 0 1\n1 10 1\n";
    assert_eq!(solve_it(input, &exact()).unwrap(), "2.00 1\n0 1");
    assert_eq!(solve_it(input, &Strategy::Trivial).unwrap(), "2.00 0\n0 1");
}

#[test]
fn test_rendered_exact_result_parses_back() {
    let (facilities, customers) = single_site();
    let result = exact().solve(&facilities, &customers).unwrap();
    let parsed = parse_result(&render_result(&result)).unwrap();

    assert_relative_eq!(parsed.objective, 100.0);
    assert_eq!(parsed.is_optimal, result.is_optimal);
    assert_eq!(parsed.assignment, result.assignment);
}

fn arb_instance() -> impl proptest::strategy::Strategy<Value = (Vec<Facility>, Vec<Customer>)> {
    let facilities = prop::collection::vec((0u32..50, 1u64..6, 0i32..20, 0i32..20), 1..=3);
    let customers = prop::collection::vec((1u64..4, 0i32..20, 0i32..20), 1..=3);
    (facilities, customers).prop_map(|(fs, cs)| {
        let facilities = fs
            .into_iter()
            .enumerate()
            .map(|(j, (setup, cap, x, y))| facility(j, setup as f64, cap, x as f64, y as f64))
            .collect();
        let customers = cs
            .into_iter()
            .enumerate()
            .map(|(i, (demand, x, y))| customer(i, demand, x as f64, y as f64))
            .collect();
        (facilities, customers)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_greedy_respects_capacity((facilities, customers) in arb_instance()) {
        if let Ok(result) = Strategy::Trivial.solve(&facilities, &customers) {
            prop_assert!(result.assignment.validate(&facilities, &customers).is_ok());
            prop_assert!(!result.is_optimal);
            let again = Strategy::Trivial.solve(&facilities, &customers).unwrap();
            prop_assert_eq!(again, result);
        }
    }

    #[test]
    fn prop_exact_is_feasible_and_never_worse((facilities, customers) in arb_instance()) {
        let exact = exact().solve(&facilities, &customers);
        let greedy = Strategy::Trivial.solve(&facilities, &customers);

        match exact {
            Ok(result) => {
                prop_assert!(result.is_optimal);
                prop_assert_eq!(result.assignment.len(), customers.len());
                prop_assert!(result.assignment.validate(&facilities, &customers).is_ok());
                prop_assert!(
                    (result.assignment.cost(&facilities, &customers) - result.objective).abs() < 1e-6
                );
                if let Ok(greedy) = greedy {
                    prop_assert!(result.objective <= greedy.objective + 1e-6);
                }

                let again = crate::exact().solve(&facilities, &customers).unwrap();
                prop_assert!((again.objective - result.objective).abs() < 1e-9);
            }
            Err(SolverError::Infeasible(_)) => {
                // Greedy cannot succeed where no feasible assignment exists.
                prop_assert!(greedy.is_err());
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
