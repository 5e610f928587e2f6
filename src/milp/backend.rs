//! Bundled solver backend over the `good_lp` crate.

use super::model::{Comparison, MilpModel};
use super::solver::{MilpSolution, MilpSolver, SolverConfig, SolverError, SolverStatus};
use good_lp::{default_solver, variable, variables, Expression, ResolutionError, Solution, SolverModel};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;
use tracing::debug;

/// MILP backend over `good_lp` with the pure-Rust `microlp` solver.
///
/// The time budget is enforced from the outside: the solve runs on a named
/// worker thread and the caller waits on a channel with a receive timeout.
/// When the budget expires the worker's eventual result is discarded and
/// [`SolverStatus::TimedOut`] is reported — `microlp` cannot surface an
/// incumbent mid-search, so [`SolverStatus::Feasible`] is never produced by
/// this backend (it exists for backends that can).
pub struct GoodLpSolver;

impl GoodLpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoodLpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl MilpSolver for GoodLpSolver {
    fn solve(&self, model: &MilpModel, config: &SolverConfig) -> Result<MilpSolution, SolverError> {
        model.validate().map_err(SolverError::InvalidModel)?;

        let started = Instant::now();
        let (tx, rx) = mpsc::channel();
        let owned = model.clone();
        thread::Builder::new()
            .name("milp-worker".into())
            .spawn(move || {
                let _ = tx.send(run_solve(&owned));
            })?;

        let mut solution = match rx.recv_timeout(config.time_limit) {
            Ok(solution) => solution,
            Err(RecvTimeoutError::Timeout) => {
                debug!(
                    limit_ms = config.time_limit.as_millis() as u64,
                    "time budget exhausted before a solution was found"
                );
                MilpSolution::empty(SolverStatus::TimedOut)
            }
            Err(RecvTimeoutError::Disconnected) => return Err(SolverError::WorkerLost),
        };
        solution.solve_time_ms = started.elapsed().as_millis() as i64;
        Ok(solution)
    }
}

/// Translates the model into a `good_lp` problem and solves it to optimality.
fn run_solve(model: &MilpModel) -> MilpSolution {
    let mut vars = variables!();
    let handles: Vec<good_lp::Variable> = (0..model.binaries)
        .map(|i| vars.add(variable().binary().name(format!("x{i}"))))
        .collect();

    let mut objective = Expression::from(model.objective_constant);
    for &(var, coefficient) in &model.objective {
        objective.add_mul(coefficient, handles[var.index()]);
    }

    let mut problem = vars.minimise(objective.clone()).using(default_solver);
    for constraint in &model.constraints {
        let mut lhs = Expression::with_capacity(constraint.terms.len());
        for &(var, coefficient) in &constraint.terms {
            lhs.add_mul(coefficient, handles[var.index()]);
        }
        problem.add_constraint(match constraint.comparison {
            Comparison::LessEq => lhs.leq(constraint.rhs),
            Comparison::GreaterEq => lhs.geq(constraint.rhs),
            Comparison::Equal => lhs.eq(constraint.rhs),
        });
    }

    match problem.solve() {
        Ok(solved) => {
            let values = handles.iter().map(|&v| solved.value(v)).collect();
            MilpSolution {
                status: SolverStatus::Optimal,
                objective_value: Some(solved.eval(objective)),
                values,
                solve_time_ms: 0,
            }
        }
        Err(ResolutionError::Infeasible) => MilpSolution::empty(SolverStatus::Infeasible),
        Err(ResolutionError::Unbounded) => MilpSolution::empty(SolverStatus::Unbounded),
        Err(err) => {
            debug!(%err, "solver returned an unclassified error");
            MilpSolution::empty(SolverStatus::Undefined)
        }
    }
}
