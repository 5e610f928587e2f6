//! Schedule generation loop: build, solve, extract.

use super::config::ScheduleConfig;
use super::extract::{self, Schedule};
use super::index::{Dimensions, IndexSpace};
use super::model::ScheduleModel;
use super::objective::CostWeights;
use crate::milp::{GoodLpSolver, MilpSolver, SolverConfig, SolverError, SolverStatus};
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;
use tracing::{debug, info};

/// Errors surfaced by [`HeatScheduler::generate`].
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// A dimension or configuration bound failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No integer-feasible schedule is available.
    ///
    /// Covers infeasible, unbounded, undefined, and timed-out-without-
    /// incumbent outcomes; the contract does not distinguish them, the
    /// carried [`SolverStatus`] is diagnostic only.
    #[error("no feasible schedule found (solver status {0:?})")]
    NoSolution(SolverStatus),

    /// The solving capability itself failed. There is no fallback path.
    #[error("solver fault: {0}")]
    Solver(#[from] SolverError),
}

/// Generates heat schedules by building and solving one MILP per call.
///
/// Each call assembles a fresh variable/constraint set, draws fresh cost
/// weights, solves, and extracts — no state survives between calls, so
/// independent instances can run concurrently without locking.
///
/// # Examples
///
/// ```no_run
/// use u_regatta::schedule::{Dimensions, HeatScheduler, ScheduleConfig};
///
/// let scheduler = HeatScheduler::new();
/// let config = ScheduleConfig::default().with_seed(42);
/// let schedule = scheduler.generate(Dimensions::new(5, 6, 12, 2), &config)?;
/// for (f, flight) in schedule.flights.iter().enumerate() {
///     for (h, heat) in flight.heats.iter().enumerate() {
///         println!("race {}: {:?}", schedule.race_number(f, h), heat.boats);
///     }
/// }
/// # Ok::<(), u_regatta::schedule::ScheduleError>(())
/// ```
pub struct HeatScheduler<S = GoodLpSolver> {
    solver: S,
}

impl HeatScheduler<GoodLpSolver> {
    /// Creates a scheduler with the bundled `good_lp` backend.
    pub fn new() -> Self {
        Self {
            solver: GoodLpSolver::new(),
        }
    }
}

impl Default for HeatScheduler<GoodLpSolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MilpSolver> HeatScheduler<S> {
    /// Creates a scheduler over a custom solver backend.
    pub fn with_solver(solver: S) -> Self {
        Self { solver }
    }

    /// Builds and solves the scheduling model, returning the schedule.
    ///
    /// A proven-optimal solution and an incumbent accepted at the time
    /// limit are both successes: the hard constraints hold either way, only
    /// optimality under the randomized cost is traded for the budget.
    pub fn generate(
        &self,
        dims: Dimensions,
        config: &ScheduleConfig,
    ) -> Result<Schedule, ScheduleError> {
        dims.validate().map_err(ScheduleError::InvalidInput)?;
        config.validate().map_err(ScheduleError::InvalidInput)?;

        let space = IndexSpace::new(dims);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let weights = CostWeights::random(&space, &mut rng);

        let mut model = ScheduleModel::build(&space);
        model.apply_weights(&space, &weights);
        debug!(
            variables = model.milp.variable_count(),
            constraints = model.milp.constraint_count(),
            "scheduling model assembled"
        );

        let solver_config = SolverConfig::default().with_time_limit(config.time_limit);
        let solution = self.solver.solve(&model.milp, &solver_config)?;
        if !solution.status.is_solution() {
            debug!(status = ?solution.status, "no schedule available");
            return Err(ScheduleError::NoSolution(solution.status));
        }

        info!(
            status = ?solution.status,
            solve_time_ms = solution.solve_time_ms,
            "schedule solved"
        );
        Ok(extract::extract(&space, &model.layout, &solution))
    }
}
