//! Regatta heat scheduling via mixed-integer linear programming.
//!
//! Assigns teams to boats across flights and heats so that every team
//! sails exactly once per flight, no boat is double-booked within a heat,
//! and the arrangement is simultaneously randomized (seeded tie-breaking
//! weights, reproducible) and fairness-balanced (team pairs that never
//! share a heat incur a penalty).
//!
//! # Modules
//!
//! - **`milp`**: Domain-agnostic MILP modeling layer — binary variables,
//!   linear constraints, affine objective, the [`milp::MilpSolver`] trait,
//!   and a bundled backend over `good_lp`.
//! - **`schedule`**: The scheduling domain — index space, model builder,
//!   objective composition, and the [`schedule::HeatScheduler`] entry point.
//!
//! # Architecture
//!
//! `schedule` builds a plain [`milp::MilpModel`] and hands it to whatever
//! [`milp::MilpSolver`] implementation the caller supplies (the bundled
//! `good_lp`/`microlp` backend by default). The solve is the only blocking
//! operation, bounded by a caller-supplied wall-clock budget; everything is
//! built fresh per invocation, so concurrent runs share no state.
//!
//! # Examples
//!
//! ```no_run
//! use u_regatta::schedule::{Dimensions, HeatScheduler, ScheduleConfig};
//!
//! let schedule = HeatScheduler::new()
//!     .generate(Dimensions::new(5, 6, 12, 2), &ScheduleConfig::default().with_seed(7))?;
//! assert_eq!(schedule.flights.len(), 5);
//! # Ok::<(), u_regatta::schedule::ScheduleError>(())
//! ```

pub mod milp;
pub mod schedule;
