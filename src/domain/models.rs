use super::geometry::distance;
use super::solver_service::{Result, SolverError};

/// Location in the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Candidate facility site
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Facility {
    pub index: usize,
    pub setup_cost: f64,
    pub capacity: u64,
    pub location: Point,
}

impl Facility {
    pub fn new(index: usize, setup_cost: f64, capacity: u64, location: Point) -> Self {
        Self {
            index,
            setup_cost,
            capacity,
            location,
        }
    }
}

/// Demand point that must be served by exactly one facility
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Customer {
    pub index: usize,
    pub demand: u64,
    pub location: Point,
}

impl Customer {
    pub fn new(index: usize, demand: u64, location: Point) -> Self {
        Self {
            index,
            demand,
            location,
        }
    }
}

/// A parsed problem instance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Instance {
    pub facilities: Vec<Facility>,
    pub customers: Vec<Customer>,
}

impl Instance {
    pub fn new(facilities: Vec<Facility>, customers: Vec<Customer>) -> Self {
        Self {
            facilities,
            customers,
        }
    }

    /// Sum of all demands; widened so any parsed instance fits.
    pub fn total_demand(&self) -> u128 {
        self.customers.iter().map(|c| u128::from(c.demand)).sum()
    }

    /// Sum of all capacities; widened so any parsed instance fits.
    pub fn total_capacity(&self) -> u128 {
        self.facilities.iter().map(|f| u128::from(f.capacity)).sum()
    }
}

/// Facility index serving each customer, in customer order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assignment(Vec<usize>);

impl Assignment {
    pub fn new(facility_of: Vec<usize>) -> Self {
        Self(facility_of)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Demand placed on every facility. Out-of-range indices are ignored.
    pub fn loads(&self, facility_count: usize, customers: &[Customer]) -> Vec<u128> {
        let mut loads = vec![0u128; facility_count];
        for (customer, &j) in customers.iter().zip(&self.0) {
            if let Some(load) = loads.get_mut(j) {
                *load += u128::from(customer.demand);
            }
        }
        loads
    }

    /// Setup cost of every used facility plus the distance of every
    /// customer to its facility.
    ///
    /// Panics if an index is out of range; run [`Assignment::validate`] first
    /// on untrusted assignments.
    pub fn cost(&self, facilities: &[Facility], customers: &[Customer]) -> f64 {
        let mut used = vec![false; facilities.len()];
        let mut total = 0.0;

        for (customer, &j) in customers.iter().zip(&self.0) {
            used[j] = true;
            total += distance(customer.location, facilities[j].location);
        }

        total
            + facilities
                .iter()
                .zip(&used)
                .filter(|(_, &u)| u)
                .map(|(f, _)| f.setup_cost)
                .sum::<f64>()
    }

    /// Check length, index range and the capacity of every facility.
    pub fn validate(&self, facilities: &[Facility], customers: &[Customer]) -> Result<()> {
        let mut errors = Vec::new();

        if self.0.len() != customers.len() {
            errors.push(format!(
                "Assignment covers {} customers but instance has {}",
                self.0.len(),
                customers.len()
            ));
        }

        for (i, &j) in self.0.iter().enumerate() {
            if j >= facilities.len() {
                errors.push(format!(
                    "Customer {} assigned to unknown facility {}",
                    i, j
                ));
            }
        }

        let loads = self.loads(facilities.len(), customers);
        for (facility, load) in facilities.iter().zip(loads) {
            if load > u128::from(facility.capacity) {
                errors.push(format!(
                    "Facility {} serves demand {} above capacity {}",
                    facility.index, load, facility.capacity
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }
}

/// Outcome of one solve
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub objective: f64,
    pub is_optimal: bool,
    pub assignment: Assignment,
}

impl SolveResult {
    pub fn new(objective: f64, is_optimal: bool, assignment: Assignment) -> Self {
        Self {
            objective,
            is_optimal,
            assignment,
        }
    }
}

/// Configuration for the exact strategy
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MipConfig {
    /// Forward solver progress output
    pub verbose: bool,
    /// Worker threads for the backend; all available cores when unset
    pub num_threads: Option<usize>,
    /// Wall-clock cutoff in seconds
    pub time_limit_seconds: Option<f64>,
}

impl MipConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    pub fn with_time_limit(mut self, seconds: f64) -> Self {
        self.time_limit_seconds = Some(seconds);
        self
    }

    /// Thread count handed to the backend.
    pub fn threads(&self) -> usize {
        self.num_threads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    pub solve_time_ms: f64,
}
