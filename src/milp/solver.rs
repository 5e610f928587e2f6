//! Solver interface, configuration, and status taxonomy.

use super::model::{MilpModel, VarId};
use std::time::Duration;
use thiserror::Error;

/// Status of the solver after execution.
///
/// Infeasible, unbounded, and timed-out outcomes are expected results of a
/// solve, not faults: they carry no error and callers decide how to react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStatus {
    /// Proven optimal solution found.
    Optimal,
    /// Integer-feasible incumbent accepted at the time limit.
    ///
    /// Satisfies all hard constraints but may not be globally optimal.
    Feasible,
    /// No feasible solution exists.
    Infeasible,
    /// The objective is unbounded below.
    Unbounded,
    /// Time limit reached before any integer-feasible solution was found.
    TimedOut,
    /// The solver gave up for an unclassified reason.
    Undefined,
}

impl SolverStatus {
    /// Whether an integer-feasible assignment is available.
    pub fn is_solution(self) -> bool {
        matches!(self, SolverStatus::Optimal | SolverStatus::Feasible)
    }
}

/// Solution from a MILP solve.
#[derive(Debug, Clone)]
pub struct MilpSolution {
    /// Solver status.
    pub status: SolverStatus,
    /// Objective function value, when a solution is available.
    pub objective_value: Option<f64>,
    /// Variable values indexed by [`VarId`]; empty when no solution.
    pub values: Vec<f64>,
    /// Wall-clock solve time in milliseconds.
    pub solve_time_ms: i64,
}

impl MilpSolution {
    /// Creates an empty solution with the given status.
    pub fn empty(status: SolverStatus) -> Self {
        Self {
            status,
            objective_value: None,
            values: Vec::new(),
            solve_time_ms: 0,
        }
    }

    /// Raw value of a variable, 0.0 when no solution is present.
    pub fn value(&self, var: VarId) -> f64 {
        self.values.get(var.index()).copied().unwrap_or(0.0)
    }

    /// Whether a binary variable is set in the solution.
    ///
    /// Solvers report binaries as floats; anything above 0.5 counts as set.
    pub fn is_set(&self, var: VarId) -> bool {
        self.value(var) > 0.5
    }
}

/// Solver configuration.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Wall-clock time budget for the solve.
    pub time_limit: Duration,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
        }
    }
}

impl SolverConfig {
    /// Sets the wall-clock time budget.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }
}

/// Genuine faults of the solving capability.
///
/// Expected outcomes (infeasible, unbounded, timeout) are reported through
/// [`SolverStatus`], never through this type. There is no fallback solver
/// path; callers treat these as fatal.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The model failed structural validation.
    #[error("invalid model: {0}")]
    InvalidModel(String),
    /// The solver worker thread could not be started.
    #[error("failed to start solver worker: {0}")]
    Worker(#[from] std::io::Error),
    /// The solver worker terminated without reporting a result.
    #[error("solver worker terminated unexpectedly")]
    WorkerLost,
}

/// Trait for MILP solver implementations.
///
/// Implementors translate the model into a concrete solving engine and map
/// its outcome back onto [`SolverStatus`]. This is the capability boundary:
/// model construction code never touches a concrete engine.
pub trait MilpSolver {
    /// Solves the model within the configured time budget.
    fn solve(&self, model: &MilpModel, config: &SolverConfig) -> Result<MilpSolution, SolverError>;
}
