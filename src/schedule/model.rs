//! MILP model construction for heat schedules.

use super::index::IndexSpace;
use crate::milp::{MilpModel, VarId};

/// Fixed-stride mapping from domain tuples to dense variable handles.
///
/// Assignment variables x[t,f,h,b] occupy the first T·F·H·B slots in
/// (team, flight, heat, boat) major-to-minor order; pairing indicators
/// w[p,f,h] follow in (pair, flight, heat) order. Strides are computed once
/// from the index space, so lookups are pure arithmetic — no hashing at the
/// scale the variable count already imposes.
#[derive(Debug, Clone)]
pub struct VarLayout {
    flights: usize,
    heats: usize,
    boats: usize,
    /// Offset of the first pairing indicator.
    pairing_base: usize,
}

impl VarLayout {
    fn new(space: &IndexSpace) -> Self {
        let dims = space.dims();
        Self {
            flights: dims.flights,
            heats: dims.heats,
            boats: dims.boats,
            pairing_base: dims.assignment_count(),
        }
    }

    /// Handle of the assignment variable x[team, flight, heat, boat].
    pub fn assignment(&self, team: usize, flight: usize, heat: usize, boat: usize) -> VarId {
        VarId(((team * self.flights + flight) * self.heats + heat) * self.boats + boat)
    }

    /// Handle of the pairing indicator w[pair, flight, heat].
    ///
    /// `pair` is an index into [`IndexSpace::team_pairs`].
    pub fn pairing(&self, pair: usize, flight: usize, heat: usize) -> VarId {
        VarId(self.pairing_base + (pair * self.flights + flight) * self.heats + heat)
    }
}

/// The assembled MILP for one scheduling run.
///
/// Holds the plain model plus the layout needed to address its variables
/// from domain tuples. The assignment variables are the sole source of
/// truth for the schedule; the pairing indicators are linking variables
/// kept consistent with them by constraint, not by construction.
#[derive(Debug, Clone)]
pub struct ScheduleModel {
    /// The underlying MILP.
    pub milp: MilpModel,
    /// Domain-tuple addressing for the model's variables.
    pub layout: VarLayout,
}

impl ScheduleModel {
    /// Allocates all decision variables and emits the full constraint set.
    ///
    /// Constraints:
    /// 1. each boat holds at most one team per (flight, heat)
    /// 2. each team sits in at most one boat per (flight, heat)
    /// 3. pairing linkage: w[p,f,h] is sandwiched to the AND of the two
    ///    teams' occupancies within (f, h)
    /// 4. each team occupies exactly one (heat, boat) per flight
    ///
    /// There is no structural feasibility pre-check: when
    /// boats × heats < teams the model is infeasible by construction and
    /// that is discovered at solve time.
    pub fn build(space: &IndexSpace) -> Self {
        let dims = space.dims();
        let layout = VarLayout::new(space);
        let mut milp = MilpModel::new("heat-schedule");

        // Allocation order must match the layout strides: all x, then all w.
        for _ in 0..dims.assignment_count() {
            milp.add_binary();
        }
        for _ in 0..dims.pairing_count() {
            milp.add_binary();
        }
        debug_assert_eq!(
            layout.pairing(0, 0, 0).index(),
            dims.assignment_count(),
            "pairing indicators must start right after the assignment block"
        );

        // 1. Boat exclusivity: for every (flight, heat, boat), at most one team.
        for f in space.flights() {
            for h in space.heats() {
                for b in space.boats() {
                    let terms = space
                        .teams()
                        .map(|t| (layout.assignment(t, f, h, b), 1.0))
                        .collect();
                    milp.add_less_eq(terms, 1.0);
                }
            }
        }

        // 2. Team exclusivity: for every (team, flight, heat), at most one boat.
        for t in space.teams() {
            for f in space.flights() {
                for h in space.heats() {
                    let terms = space
                        .boats()
                        .map(|b| (layout.assignment(t, f, h, b), 1.0))
                        .collect();
                    milp.add_less_eq(terms, 1.0);
                }
            }
        }

        // 3. Pairing linkage. With occ(t) = Σ_b x[t,f,h,b], three inequalities
        //    per (pair, flight, heat):
        //      w ≤ occ(t1),  w ≤ occ(t2),  w ≥ occ(t1) + occ(t2) − 1
        //    The objective rewards large w, the upper bounds cap it at the
        //    conjunction, so at the optimum w equals the AND of the two
        //    occupancy indicators without an explicit equality.
        for (p, &(t1, t2)) in space.team_pairs().iter().enumerate() {
            for f in space.flights() {
                for h in space.heats() {
                    let w = layout.pairing(p, f, h);

                    let mut terms = vec![(w, 1.0)];
                    terms.extend(space.boats().map(|b| (layout.assignment(t1, f, h, b), -1.0)));
                    milp.add_less_eq(terms, 0.0);

                    let mut terms = vec![(w, 1.0)];
                    terms.extend(space.boats().map(|b| (layout.assignment(t2, f, h, b), -1.0)));
                    milp.add_less_eq(terms, 0.0);

                    let mut terms = vec![(w, 1.0)];
                    terms.extend(space.boats().map(|b| (layout.assignment(t1, f, h, b), -1.0)));
                    terms.extend(space.boats().map(|b| (layout.assignment(t2, f, h, b), -1.0)));
                    milp.add_greater_eq(terms, -1.0);
                }
            }
        }

        // 4. Participation: every team sails exactly once per flight. This is
        //    per flight, not per heat — a team may be idle in some heats as
        //    long as it occupies exactly one (heat, boat) within the flight.
        for t in space.teams() {
            for f in space.flights() {
                let mut terms = Vec::with_capacity(dims.heats * dims.boats);
                for h in space.heats() {
                    for b in space.boats() {
                        terms.push((layout.assignment(t, f, h, b), 1.0));
                    }
                }
                milp.add_equal(terms, 1.0);
            }
        }

        Self { milp, layout }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Dimensions;

    #[test]
    fn test_variable_count() {
        let dims = Dimensions::new(2, 3, 4, 2);
        let space = IndexSpace::new(dims);
        let model = ScheduleModel::build(&space);

        assert_eq!(
            model.milp.variable_count(),
            dims.assignment_count() + dims.pairing_count()
        );
        assert!(model.milp.validate().is_ok());
    }

    #[test]
    fn test_constraint_count() {
        let dims = Dimensions::new(2, 3, 4, 2);
        let space = IndexSpace::new(dims);
        let model = ScheduleModel::build(&space);

        let boat_exclusivity = dims.flights * dims.heats * dims.boats;
        let team_exclusivity = dims.teams * dims.flights * dims.heats;
        let pairing_linkage = 3 * dims.pairing_count();
        let participation = dims.teams * dims.flights;
        assert_eq!(
            model.milp.constraint_count(),
            boat_exclusivity + team_exclusivity + pairing_linkage + participation
        );
    }

    #[test]
    fn test_layout_is_dense_and_disjoint() {
        let dims = Dimensions::new(2, 2, 3, 2);
        let space = IndexSpace::new(dims);
        let model = ScheduleModel::build(&space);
        let layout = &model.layout;

        let mut seen = vec![false; model.milp.variable_count()];
        for t in space.teams() {
            for f in space.flights() {
                for h in space.heats() {
                    for b in space.boats() {
                        let id = layout.assignment(t, f, h, b).index();
                        assert!(!seen[id], "assignment handle {id} issued twice");
                        seen[id] = true;
                    }
                }
            }
        }
        for p in 0..space.team_pairs().len() {
            for f in space.flights() {
                for h in space.heats() {
                    let id = layout.pairing(p, f, h).index();
                    assert!(!seen[id], "pairing handle {id} collides");
                    seen[id] = true;
                }
            }
        }
        assert!(seen.iter().all(|&s| s), "layout must cover every variable");
    }

    #[test]
    fn test_single_team_model_has_no_pairing_constraints() {
        let dims = Dimensions::new(2, 2, 1, 1);
        let space = IndexSpace::new(dims);
        let model = ScheduleModel::build(&space);

        assert_eq!(model.milp.variable_count(), dims.assignment_count());
        // boats per heat + team per heat + participation, no linkage rows
        assert_eq!(
            model.milp.constraint_count(),
            dims.flights * dims.heats * dims.boats + dims.teams * dims.flights * dims.heats + dims.teams * dims.flights
        );
    }
}
