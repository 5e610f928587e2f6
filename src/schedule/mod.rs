//! Regatta heat scheduling.
//!
//! Assigns teams to boats across flights and heats so that every team sails
//! exactly once per flight, no boat is double-booked within a heat, and the
//! arrangement is both randomized (seeded, reproducible) and
//! fairness-balanced (team pairs that never share a heat are penalized).
//!
//! # Key Components
//!
//! - **Index space**: [`Dimensions`], [`IndexSpace`] — the ranges and team
//!   pairs the model is built over
//! - **Model**: [`ScheduleModel`] — assignment variables, pairing
//!   indicators, and the full constraint set
//! - **Objective**: [`CostWeights`] — random tie-breaking weights plus
//!   pairwise fairness penalties
//! - **Runner**: [`HeatScheduler`] — build, solve, extract in one call
//! - **Output**: [`Schedule`] — flights → heats → boat-to-team mappings
//!
//! # Design
//!
//! The assignment variables x[team, flight, heat, boat] are the sole source
//! of truth; the pairing indicators w[pair, flight, heat] are linking
//! variables tied to them by a linearized-AND constraint sandwich. All
//! variables live for exactly one solve invocation. Infeasible inputs (more
//! teams than boat-slots per flight) are not pre-checked; the solver
//! discovers them and [`HeatScheduler::generate`] reports "no solution".

mod config;
mod extract;
mod index;
mod model;
mod objective;
mod runner;

pub use config::ScheduleConfig;
pub use extract::{extract, FlightSchedule, HeatSchedule, Schedule};
pub use index::{Dimensions, IndexSpace};
pub use model::{ScheduleModel, VarLayout};
pub use objective::CostWeights;
pub use runner::{HeatScheduler, ScheduleError};
