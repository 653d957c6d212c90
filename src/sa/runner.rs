//! SA execution loop.

use super::config::AnnealConfig;
use super::state::AnnealState;
use crate::error::Result;
use crate::model::Sign;
use log::trace;
use rand::Rng;

/// Result of one annealing run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnealResult {
    /// Best absolute difference seen, including the starting one.
    pub best_difference: i64,

    /// Absolute difference of the state the walk ended in.
    pub final_difference: i64,

    /// Total number of proposed flips.
    pub steps: usize,

    /// Number of accepted flips (including improvements).
    pub accepted_moves: usize,

    /// Number of accepted flips that strictly reduced the difference.
    pub improving_moves: usize,

    /// Temperature when the loop stopped.
    pub final_temperature: f64,

    /// Best difference after each strict improvement, starting with the
    /// initial difference.
    pub difference_history: Vec<i64>,
}

/// Single-flip simulated annealing over a sign assignment.
#[derive(Debug, Clone, Copy)]
pub struct Annealer {
    config: AnnealConfig,
}

impl Annealer {
    /// Creates an annealer from a validated schedule.
    pub fn new(config: AnnealConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &AnnealConfig {
        &self.config
    }

    /// Refines `assignment` in place.
    ///
    /// `difference` is the absolute difference of `assignment` and seeds
    /// the best-so-far. On return `assignment` holds the best snapshot
    /// taken during the run, which may differ from where the walk ended.
    ///
    /// Per step the RNG is drawn once for the flip position and, only
    /// when the flip does not improve, once more for the Metropolis test.
    pub fn anneal<R: Rng>(
        &self,
        numbers: &[i64],
        assignment: &mut [Sign],
        difference: i64,
        rng: &mut R,
    ) -> AnnealResult {
        let mut state = AnnealState::new(numbers, assignment);
        let n = state.len();

        let mut best = assignment.to_vec();
        let mut best_difference = difference;
        let mut difference_history = vec![best_difference];

        let mut temperature = self.config.initial_temperature;
        let mut steps = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        while n > 0 && temperature > self.config.min_temperature {
            let i = rng.random_range(0..n);
            let candidate = state.flipped_difference(i);
            let delta = candidate.abs() - state.difference().abs();

            // Metropolis acceptance criterion
            let accept = delta < 0
                || (-(delta as f64) / temperature).exp() > rng.random_range(0.0..1.0);

            if accept {
                state.flip(i);
                accepted_moves += 1;
                if delta < 0 {
                    improving_moves += 1;
                }

                let current = state.difference().abs();
                if current < best_difference {
                    best_difference = current;
                    best.copy_from_slice(state.signs());
                    difference_history.push(best_difference);
                }
            }

            temperature *= self.config.cooling_rate;
            steps += 1;
        }

        assignment.copy_from_slice(&best);

        trace!(
            "anneal: {} steps, {} accepted, {} improving, best {} (end {})",
            steps,
            accepted_moves,
            improving_moves,
            best_difference,
            state.difference().abs()
        );

        AnnealResult {
            best_difference,
            final_difference: state.difference().abs(),
            steps,
            accepted_moves,
            improving_moves,
            final_temperature: temperature,
            difference_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::signed_difference;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use Sign::{Minus, Plus};

    fn annealer(t0: f64, rate: f64) -> Annealer {
        Annealer::new(
            AnnealConfig::default()
                .with_initial_temperature(t0)
                .with_cooling_rate(rate),
        )
        .unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = AnnealConfig::default().with_cooling_rate(1.0);
        assert!(Annealer::new(config).is_err());
    }

    #[test]
    fn test_step_count_follows_schedule() {
        let numbers = [8, 7, 6, 5, 4];
        let mut assignment = vec![Plus; 5];
        let mut rng = StdRng::seed_from_u64(42);

        // 0.5^19 > 1e-6 >= 0.5^20
        let result = annealer(1.0, 0.5).anneal(&numbers, &mut assignment, 30, &mut rng);
        assert_eq!(result.steps, 20);
        assert!(result.final_temperature <= 1e-6);
    }

    #[test]
    fn test_cold_start_performs_no_moves() {
        let numbers = [3, 1, 1, 2, 2, 1];
        let initial = vec![Minus, Minus, Plus, Plus, Plus, Minus];
        let mut assignment = initial.clone();
        let mut rng = StdRng::seed_from_u64(42);

        let result = annealer(1e-9, 0.9).anneal(&numbers, &mut assignment, 0, &mut rng);
        assert_eq!(result.steps, 0);
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(assignment, initial);
    }

    #[test]
    fn test_first_flip_from_one_sided_start_improves() {
        // Any flip from all-Plus lowers |30| to 30 - 2x.
        let numbers = [8, 7, 6, 5, 4];
        let mut assignment = vec![Plus; 5];
        let mut rng = StdRng::seed_from_u64(5);

        let result = annealer(10.0, 0.99).anneal(&numbers, &mut assignment, 30, &mut rng);
        assert!(result.best_difference <= 22);
        assert!(result.improving_moves > 0);
        assert_eq!(
            signed_difference(&numbers, &assignment).abs(),
            result.best_difference
        );
    }

    #[test]
    fn test_high_temperature_accepts_uphill() {
        let numbers = [8, 7, 6, 5, 4];
        let mut assignment = vec![Plus, Plus, Minus, Minus, Minus];
        let mut rng = StdRng::seed_from_u64(42);

        let result = annealer(1e6, 0.999).anneal(&numbers, &mut assignment, 0, &mut rng);
        assert!(result.accepted_moves > result.improving_moves);

        // Started at the optimum: the snapshot must still be an optimum.
        assert_eq!(result.best_difference, 0);
        assert_eq!(signed_difference(&numbers, &assignment), 0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let numbers = [31, 8, 17, 4, 22, 9, 13, 1, 40];
        let start = vec![Plus, Minus, Plus, Minus, Plus, Minus, Plus, Minus, Plus];
        let d = signed_difference(&numbers, &start).abs();
        let sa = annealer(50.0, 0.98);

        let mut a = start.clone();
        let mut b = start.clone();
        let ra = sa.anneal(&numbers, &mut a, d, &mut StdRng::seed_from_u64(9));
        let rb = sa.anneal(&numbers, &mut b, d, &mut StdRng::seed_from_u64(9));
        assert_eq!(ra, rb);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_assignment() {
        let mut assignment: Vec<Sign> = Vec::new();
        let mut rng = StdRng::seed_from_u64(1);
        let result = annealer(10.0, 0.9).anneal(&[], &mut assignment, 0, &mut rng);
        assert_eq!(result.steps, 0);
    }

    proptest! {
        #[test]
        fn prop_best_is_consistent_and_non_increasing(
            numbers in prop::collection::vec(-500i64..500, 1..30),
            flips in prop::collection::vec(any::<bool>(), 30),
            t0 in 0.1f64..100.0,
            rate in 0.5f64..0.99,
            seed in any::<u64>(),
        ) {
            let mut assignment: Vec<Sign> = numbers
                .iter()
                .zip(&flips)
                .map(|(_, &f)| if f { Minus } else { Plus })
                .collect();
            let initial = signed_difference(&numbers, &assignment).abs();
            let mut rng = StdRng::seed_from_u64(seed);

            let result = annealer(t0, rate).anneal(&numbers, &mut assignment, initial, &mut rng);

            prop_assert!(result.best_difference <= initial);
            prop_assert!(result.best_difference <= result.final_difference);
            prop_assert_eq!(signed_difference(&numbers, &assignment).abs(), result.best_difference);
            for w in result.difference_history.windows(2) {
                prop_assert!(w[1] < w[0]);
            }
            prop_assert_eq!(
                result.difference_history.last().copied(),
                Some(result.best_difference)
            );
        }
    }
}
