//! Schedule extraction from a solved assignment.

use super::index::IndexSpace;
use super::model::VarLayout;
use crate::milp::MilpSolution;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Boat-to-team assignments of a single heat.
///
/// Keys are 0-based boat indices, values are 1-based team numbers. Boats
/// with no team are absent from the map — no sentinel values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatSchedule {
    /// boat index → team number (1-based).
    pub boats: BTreeMap<usize, usize>,
}

impl HeatSchedule {
    /// The team sailing the given boat in this heat, if any.
    pub fn team_in_boat(&self, boat: usize) -> Option<usize> {
        self.boats.get(&boat).copied()
    }

    /// Number of occupied boats.
    pub fn occupied_boats(&self) -> usize {
        self.boats.len()
    }
}

/// All heats of one flight, in heat index order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightSchedule {
    /// Heats in index order.
    pub heats: Vec<HeatSchedule>,
}

/// A generated schedule: flights in order, each holding its heats in order.
///
/// An immutable value derived entirely from the solved assignment
/// variables. Team identities are 1-based here (presentation numbering);
/// all indices inside the model stay 0-based, and the offset translation is
/// owned by the extractor alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Flights in index order.
    pub flights: Vec<FlightSchedule>,
}

impl Schedule {
    /// Sequential race number of a (flight, heat) cell, starting at 1.
    ///
    /// Races are numbered heat by heat across flights, the order in which
    /// they are run on the water.
    pub fn race_number(&self, flight: usize, heat: usize) -> usize {
        let heats_per_flight = self.flights.first().map_or(0, |f| f.heats.len());
        flight * heats_per_flight + heat + 1
    }

    /// How many heats each unordered team pair shared across the schedule.
    ///
    /// Keys are (team, team) with the smaller 1-based number first. Pairs
    /// that never met are absent. This is the quantity the fairness penalty
    /// term prices: a pair appears here iff its penalty was cancelled.
    pub fn pair_meet_counts(&self) -> BTreeMap<(usize, usize), usize> {
        let mut counts = BTreeMap::new();
        for flight in &self.flights {
            for heat in &flight.heats {
                let teams: Vec<usize> = heat.boats.values().copied().collect();
                for i in 0..teams.len() {
                    for j in i + 1..teams.len() {
                        let key = (teams[i].min(teams[j]), teams[i].max(teams[j]));
                        *counts.entry(key).or_insert(0) += 1;
                    }
                }
            }
        }
        counts
    }
}

/// Materializes the nested schedule from the solved assignment variables.
///
/// For each (flight, heat), every boat whose assignment variable is set
/// maps to its team's 1-based number. The boat exclusivity constraint
/// guarantees at most one team per boat, so the first set variable wins.
pub fn extract(space: &IndexSpace, layout: &VarLayout, solution: &MilpSolution) -> Schedule {
    let dims = space.dims();
    let mut flights = Vec::with_capacity(dims.flights);
    for f in space.flights() {
        let mut heats = Vec::with_capacity(dims.heats);
        for h in space.heats() {
            let mut boats = BTreeMap::new();
            for b in space.boats() {
                for t in space.teams() {
                    if solution.is_set(layout.assignment(t, f, h, b)) {
                        boats.insert(b, t + 1);
                        break;
                    }
                }
            }
            heats.push(HeatSchedule { boats });
        }
        flights.push(FlightSchedule { heats });
    }
    Schedule { flights }
}
