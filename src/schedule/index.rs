//! Domain index space: the ranges the scheduling model is built over.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Problem dimensions for one scheduling run.
///
/// All four bounds must be positive; [`Dimensions::validate`] is called at
/// the generation entry point so the model builder can assume validated
/// input. The recommended usability bounds (not enforced here) are flights
/// 1–20, boats 2–10, teams 2–20, heats 1–6 — beyond these the variable
/// count makes solves impractically slow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Number of flights. Every team sails exactly once per flight.
    pub flights: usize,
    /// Number of boats, reusable across heats and contended within one.
    pub boats: usize,
    /// Number of teams.
    pub teams: usize,
    /// Number of heats per flight.
    pub heats: usize,
}

impl Dimensions {
    /// Creates dimensions from the four counts.
    pub fn new(flights: usize, boats: usize, teams: usize, heats: usize) -> Self {
        Self {
            flights,
            boats,
            teams,
            heats,
        }
    }

    /// Validates that every bound is positive.
    pub fn validate(&self) -> Result<(), String> {
        if self.flights == 0 {
            return Err("flights must be at least 1".into());
        }
        if self.boats == 0 {
            return Err("boats must be at least 1".into());
        }
        if self.teams == 0 {
            return Err("teams must be at least 1".into());
        }
        if self.heats == 0 {
            return Err("heats must be at least 1".into());
        }
        Ok(())
    }

    /// Number of assignment variables: one per (team, flight, heat, boat).
    pub fn assignment_count(&self) -> usize {
        self.teams * self.flights * self.heats * self.boats
    }

    /// Number of unordered team pairs: T·(T−1)/2.
    pub fn pair_count(&self) -> usize {
        self.teams * self.teams.saturating_sub(1) / 2
    }

    /// Number of pairing-indicator variables: one per (pair, flight, heat).
    pub fn pairing_count(&self) -> usize {
        self.pair_count() * self.flights * self.heats
    }
}

/// Index ranges and the unordered team-pair enumeration.
///
/// Produced once per solve invocation from validated [`Dimensions`]; the
/// model builder and extractor iterate these ranges rather than raw counts.
/// No side effects and no state beyond the pair list.
#[derive(Debug, Clone)]
pub struct IndexSpace {
    dims: Dimensions,
    pairs: Vec<(usize, usize)>,
}

impl IndexSpace {
    /// Enumerates the index space for the given dimensions.
    pub fn new(dims: Dimensions) -> Self {
        let mut pairs = Vec::with_capacity(dims.pair_count());
        for t1 in 0..dims.teams {
            for t2 in t1 + 1..dims.teams {
                pairs.push((t1, t2));
            }
        }
        Self { dims, pairs }
    }

    /// The dimensions this space was built from.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Team index range [0, T).
    pub fn teams(&self) -> Range<usize> {
        0..self.dims.teams
    }

    /// Flight index range [0, F).
    pub fn flights(&self) -> Range<usize> {
        0..self.dims.flights
    }

    /// Heat index range [0, H).
    pub fn heats(&self) -> Range<usize> {
        0..self.dims.heats
    }

    /// Boat index range [0, B).
    pub fn boats(&self) -> Range<usize> {
        0..self.dims.boats
    }

    /// All unordered team pairs (t1, t2) with t1 < t2, in lexicographic order.
    pub fn team_pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }
}
