// Solver-neutral binary integer program
// The strategy layer builds one of these and hands it to a MipBackend adapter

use super::value_objects::ConstraintType;

/// Handle of a variable inside a [`MipModel`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(usize);

impl VarId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Binary decision variable with its objective coefficient
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryVariable {
    pub name: String,
    pub cost: f64,
}

/// Sparse linear constraint `Σ coeff * var <op> bound`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearConstraint {
    pub name: String,
    pub terms: Vec<(VarId, f64)>,
    pub constraint_type: ConstraintType,
    pub bound: f64,
}

impl LinearConstraint {
    pub fn new(
        name: impl Into<String>,
        terms: Vec<(VarId, f64)>,
        constraint_type: ConstraintType,
        bound: f64,
    ) -> Self {
        Self {
            name: name.into(),
            terms,
            constraint_type,
            bound,
        }
    }

    pub fn lhs(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(var, coeff)| coeff * values[var.index()])
            .sum()
    }
}

/// Minimization program over binary variables
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MipModel {
    pub name: String,
    pub variables: Vec<BinaryVariable>,
    pub constraints: Vec<LinearConstraint>,
}

impl MipModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            constraints: Vec::new(),
        }
    }

    pub fn add_binary(&mut self, name: impl Into<String>, cost: f64) -> VarId {
        self.variables.push(BinaryVariable {
            name: name.into(),
            cost,
        });
        VarId(self.variables.len() - 1)
    }

    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn objective_coefficients(&self) -> impl Iterator<Item = f64> + '_ {
        self.variables.iter().map(|v| v.cost)
    }

    /// Objective evaluated at `values`
    pub fn objective_value(&self, values: &[f64]) -> f64 {
        self.objective_coefficients()
            .zip(values)
            .map(|(cost, value)| cost * value)
            .sum()
    }

    /// True when every constraint holds at `values` within `tolerance`.
    pub fn is_satisfied_by(&self, values: &[f64], tolerance: f64) -> bool {
        values.len() == self.variables.len()
            && self.constraints.iter().all(|c| {
                c.constraint_type
                    .holds(c.lhs(values), c.bound, tolerance)
            })
    }

    pub fn constraint(&self, name: &str) -> Option<&LinearConstraint> {
        self.constraints.iter().find(|c| c.name == name)
    }

    pub fn variable_id(&self, name: &str) -> Option<VarId> {
        self.variables.iter().position(|v| v.name == name).map(VarId)
    }
}
