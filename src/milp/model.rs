//! MILP model definition.

/// Handle to a binary decision variable within a [`MilpModel`].
///
/// A dense index into the model's variable table. Consumers that need
/// composite keys (e.g., a variable per domain tuple) should compute a
/// fixed-stride layout over these indices instead of hashing names —
/// variable counts grow combinatorially and the lookup sits on the model
/// construction hot path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VarId(pub usize);

impl VarId {
    /// Position of this variable in dense coefficient and value vectors.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Comparison operator of a linear constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `lhs ≤ rhs`
    LessEq,
    /// `lhs ≥ rhs`
    GreaterEq,
    /// `lhs = rhs`
    Equal,
}

/// A linear constraint `Σ coeff·var (≤|≥|=) rhs`.
#[derive(Debug, Clone)]
pub struct LinearConstraint {
    /// Left-hand side terms as (variable, coefficient) pairs.
    pub terms: Vec<(VarId, f64)>,
    /// Comparison operator.
    pub comparison: Comparison,
    /// Right-hand side constant.
    pub rhs: f64,
}

/// A mixed-integer linear program over binary decision variables.
///
/// Contains the variable table, constraints, and an affine minimization
/// objective. The model is plain data: nothing here solves anything, and a
/// model can be handed to any [`MilpSolver`](super::MilpSolver)
/// implementation.
///
/// # Examples
///
/// ```
/// use u_regatta::milp::MilpModel;
///
/// let mut model = MilpModel::new("example");
/// let a = model.add_binary();
/// let b = model.add_binary();
/// model.add_less_eq(vec![(a, 1.0), (b, 1.0)], 1.0);
/// model.add_objective_term(a, 2.0);
/// model.add_objective_term(b, 3.0);
/// assert!(model.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct MilpModel {
    /// Model name.
    pub name: String,
    /// Number of binary decision variables.
    pub binaries: usize,
    /// Constraints.
    pub constraints: Vec<LinearConstraint>,
    /// Linear objective terms as (variable, coefficient) pairs, minimized.
    pub objective: Vec<(VarId, f64)>,
    /// Constant offset added to the objective.
    pub objective_constant: f64,
}

impl MilpModel {
    /// Creates a new empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            binaries: 0,
            constraints: Vec::new(),
            objective: Vec::new(),
            objective_constant: 0.0,
        }
    }

    /// Allocates a binary decision variable and returns its handle.
    ///
    /// Handles are issued densely in allocation order, starting at 0.
    pub fn add_binary(&mut self) -> VarId {
        let id = VarId(self.binaries);
        self.binaries += 1;
        id
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: LinearConstraint) {
        self.constraints.push(constraint);
    }

    /// Convenience: add a `Σ terms ≤ rhs` constraint.
    pub fn add_less_eq(&mut self, terms: Vec<(VarId, f64)>, rhs: f64) {
        self.constraints.push(LinearConstraint {
            terms,
            comparison: Comparison::LessEq,
            rhs,
        });
    }

    /// Convenience: add a `Σ terms ≥ rhs` constraint.
    pub fn add_greater_eq(&mut self, terms: Vec<(VarId, f64)>, rhs: f64) {
        self.constraints.push(LinearConstraint {
            terms,
            comparison: Comparison::GreaterEq,
            rhs,
        });
    }

    /// Convenience: add a `Σ terms = rhs` constraint.
    pub fn add_equal(&mut self, terms: Vec<(VarId, f64)>, rhs: f64) {
        self.constraints.push(LinearConstraint {
            terms,
            comparison: Comparison::Equal,
            rhs,
        });
    }

    /// Adds a linear term to the minimization objective.
    pub fn add_objective_term(&mut self, var: VarId, coefficient: f64) {
        self.objective.push((var, coefficient));
    }

    /// Adds a constant offset to the objective.
    pub fn add_objective_constant(&mut self, constant: f64) {
        self.objective_constant += constant;
    }

    /// Validates the model for structural consistency.
    ///
    /// Checks that every referenced variable handle is within the variable
    /// table and that no constraint has an empty left-hand side.
    pub fn validate(&self) -> Result<(), String> {
        for (i, constraint) in self.constraints.iter().enumerate() {
            if constraint.terms.is_empty() {
                return Err(format!("constraint {i} has no terms"));
            }
            for &(var, _) in &constraint.terms {
                if var.index() >= self.binaries {
                    return Err(format!(
                        "constraint {i} references undefined variable {}",
                        var.index()
                    ));
                }
            }
        }
        for &(var, _) in &self.objective {
            if var.index() >= self.binaries {
                return Err(format!(
                    "objective references undefined variable {}",
                    var.index()
                ));
            }
        }
        Ok(())
    }

    /// Returns the number of decision variables.
    pub fn variable_count(&self) -> usize {
        self.binaries
    }

    /// Returns the number of constraints.
    pub fn constraint_count(&self) -> usize {
        self.constraints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_creation() {
        let mut model = MilpModel::new("test");
        let a = model.add_binary();
        let b = model.add_binary();
        model.add_less_eq(vec![(a, 1.0), (b, 1.0)], 1.0);
        model.add_objective_term(a, 1.5);

        assert_eq!(model.variable_count(), 2);
        assert_eq!(model.constraint_count(), 1);
        assert!(model.validate().is_ok());
    }

    #[test]
    fn test_dense_handles() {
        let mut model = MilpModel::new("test");
        assert_eq!(model.add_binary(), VarId(0));
        assert_eq!(model.add_binary(), VarId(1));
        assert_eq!(model.add_binary().index(), 2);
    }

    #[test]
    fn test_undefined_variable_in_constraint() {
        let mut model = MilpModel::new("test");
        model.add_binary();
        model.add_less_eq(vec![(VarId(5), 1.0)], 1.0);

        assert!(model.validate().is_err());
    }

    #[test]
    fn test_undefined_variable_in_objective() {
        let mut model = MilpModel::new("test");
        model.add_binary();
        model.add_objective_term(VarId(3), 1.0);

        assert!(model.validate().is_err());
    }

    #[test]
    fn test_empty_constraint_rejected() {
        let mut model = MilpModel::new("test");
        model.add_binary();
        model.add_equal(Vec::new(), 1.0);

        assert!(model.validate().is_err());
    }

    #[test]
    fn test_objective_constant_accumulates() {
        let mut model = MilpModel::new("test");
        model.add_objective_constant(1.5);
        model.add_objective_constant(2.0);

        assert!((model.objective_constant - 3.5).abs() < 1e-12);
    }
}
