//! Objective composition: randomized tie-breaking plus pairwise fairness.

use super::index::IndexSpace;
use super::model::ScheduleModel;
use rand::Rng;

/// Exogenous cost coefficients for one solve.
///
/// Carry no domain meaning beyond bias: the assignment weights break ties
/// between equally feasible schedules so the solver picks a pseudo-random
/// one (a weighted bias, not a uniform sampling guarantee), and the pair
/// penalties price never-meeting team pairs.
#[derive(Debug, Clone)]
pub struct CostWeights {
    /// One tie-breaking weight per assignment variable, in layout order.
    pub assignment: Vec<f64>,
    /// One fairness penalty per unordered team pair.
    pub pair_penalty: Vec<f64>,
}

impl CostWeights {
    /// Draws uniform weights in [0, 1) from the given generator.
    ///
    /// The generator is passed explicitly so a seeded run reproduces the
    /// same weights, and with them the same optimal schedule.
    pub fn random<R: Rng>(space: &IndexSpace, rng: &mut R) -> Self {
        let dims = space.dims();
        let assignment = (0..dims.assignment_count())
            .map(|_| rng.random::<f64>())
            .collect();
        let pair_penalty = (0..dims.pair_count())
            .map(|_| rng.random::<f64>())
            .collect();
        Self {
            assignment,
            pair_penalty,
        }
    }
}

impl ScheduleModel {
    /// Folds the objective into the model:
    ///
    /// ```text
    /// minimize  Σ weight[t,f,h,b]·x[t,f,h,b]  +  Σ penalty[p]·(1 − Σ_{f,h} w[p,f,h])
    /// ```
    ///
    /// The second term is realized as a constant `penalty[p]` plus
    /// coefficient `−penalty[p]` on every w of that pair: a pair that never
    /// shares a heat pays its full penalty, and the first co-occurrence
    /// cancels it. It is the downward pressure this term puts on w that
    /// makes the linkage sandwich settle w at the true AND value.
    pub fn apply_weights(&mut self, space: &IndexSpace, weights: &CostWeights) {
        let mut index = 0;
        for t in space.teams() {
            for f in space.flights() {
                for h in space.heats() {
                    for b in space.boats() {
                        self.milp
                            .add_objective_term(self.layout.assignment(t, f, h, b), weights.assignment[index]);
                        index += 1;
                    }
                }
            }
        }

        for (p, &penalty) in weights.pair_penalty.iter().enumerate() {
            self.milp.add_objective_constant(penalty);
            for f in space.flights() {
                for h in space.heats() {
                    self.milp
                        .add_objective_term(self.layout.pairing(p, f, h), -penalty);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Dimensions;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_weight_vector_lengths() {
        let space = IndexSpace::new(Dimensions::new(2, 3, 4, 2));
        let mut rng = StdRng::seed_from_u64(7);
        let weights = CostWeights::random(&space, &mut rng);

        assert_eq!(weights.assignment.len(), space.dims().assignment_count());
        assert_eq!(weights.pair_penalty.len(), space.dims().pair_count());
        assert!(weights.assignment.iter().all(|&w| (0.0..1.0).contains(&w)));
        assert!(weights.pair_penalty.iter().all(|&w| (0.0..1.0).contains(&w)));
    }

    #[test]
    fn test_same_seed_same_weights() {
        let space = IndexSpace::new(Dimensions::new(2, 3, 4, 2));
        let a = CostWeights::random(&space, &mut StdRng::seed_from_u64(42));
        let b = CostWeights::random(&space, &mut StdRng::seed_from_u64(42));

        assert_eq!(a.assignment, b.assignment);
        assert_eq!(a.pair_penalty, b.pair_penalty);
    }

    #[test]
    fn test_apply_covers_every_variable() {
        let space = IndexSpace::new(Dimensions::new(1, 2, 3, 1));
        let mut model = ScheduleModel::build(&space);
        let weights = CostWeights::random(&space, &mut StdRng::seed_from_u64(1));
        model.apply_weights(&space, &weights);

        // One objective term per assignment variable plus one per pairing
        // indicator, and the constant is the summed pair penalties.
        let dims = space.dims();
        assert_eq!(
            model.milp.objective.len(),
            dims.assignment_count() + dims.pairing_count()
        );
        let total_penalty: f64 = weights.pair_penalty.iter().sum();
        assert!((model.milp.objective_constant - total_penalty).abs() < 1e-12);
    }

    #[test]
    fn test_pairing_coefficients_are_negative_penalties() {
        let space = IndexSpace::new(Dimensions::new(1, 2, 2, 1));
        let mut model = ScheduleModel::build(&space);
        let weights = CostWeights::random(&space, &mut StdRng::seed_from_u64(3));
        model.apply_weights(&space, &weights);

        let w = model.layout.pairing(0, 0, 0);
        let coefficient = model
            .milp
            .objective
            .iter()
            .find(|&&(var, _)| var == w)
            .map(|&(_, c)| c)
            .unwrap();
        assert!((coefficient + weights.pair_penalty[0]).abs() < 1e-12);
    }
}
