//! Mixed-Integer Linear Programming (MILP) modeling layer.
//!
//! Provides a domain-agnostic representation of linear programs over binary
//! decision variables: a variable table, linear constraints, and an affine
//! minimization objective.
//!
//! # Key Components
//!
//! - **Variables**: [`VarId`] — dense handles into the model's variable table
//! - **Constraints**: [`LinearConstraint`] — `Σ coeff·var (≤|≥|=) rhs`
//! - **Model**: [`MilpModel`] — container for variables, constraints, objective
//! - **Solver**: [`MilpSolver`] trait — interface for solver implementations
//! - **Backend**: [`GoodLpSolver`] — bundled adapter over the `good_lp` crate
//!
//! # Design
//!
//! This module defines the modeling layer only. It does NOT implement a
//! simplex or branch-and-bound engine. The [`MilpSolver`] trait is the
//! capability boundary: the bundled [`GoodLpSolver`] backend can be swapped
//! for any other engine without touching model construction code.
//!
//! Expected negative outcomes (infeasible, unbounded, time limit reached)
//! are modeled as [`SolverStatus`] values. [`SolverError`] is reserved for
//! genuine faults of the solving capability itself.

mod backend;
mod model;
mod solver;

pub use backend::GoodLpSolver;
pub use model::{Comparison, LinearConstraint, MilpModel, VarId};
pub use solver::{MilpSolution, MilpSolver, SolverConfig, SolverError, SolverStatus};
