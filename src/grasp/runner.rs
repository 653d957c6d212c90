//! GRASP restart loop.
//!
//! # Algorithm
//!
//! 1. Seed one random stream
//! 2. For each of `iterations` trials:
//!    a. Build an initial assignment with randomized differencing
//!    b. Refine it with local search
//!    c. Keep it if it beats the best difference so far
//! 3. Split the instance along the best assignment
//!
//! All trials draw from the same stream in a fixed order, so a seed fully
//! determines the result.

use super::config::GraspConfig;
use super::types::LocalSearch;
use crate::construct::{Construction, GreedyConstructor};
use crate::error::Result;
use crate::model::{Instance, Partition, Sign};
use crate::sa::Annealer;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Constructed and refined differences of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialRecord {
    pub constructed: i64,
    pub refined: i64,
}

/// Result of a GRASP run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraspResult {
    /// Best sign assignment found, one sign per input number.
    pub assignment: Vec<Sign>,

    /// Absolute difference of the best assignment.
    pub difference: i64,

    /// The two subsets induced by `assignment`, with their sums.
    pub partition: Partition,

    /// Number of trials executed.
    pub iterations: usize,

    /// Trial that produced the best assignment.
    pub best_iteration: usize,

    /// Per-trial differences, in execution order.
    pub trials: Vec<TrialRecord>,

    /// Best difference after each trial.
    pub difference_history: Vec<i64>,

    /// Seed of the random stream.
    pub seed: u64,
}

/// Executes GRASP with randomized differencing and annealing.
pub struct GraspRunner;

impl GraspRunner {
    /// Runs GRASP with simulated annealing as local search.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::grasp::{GraspConfig, GraspRunner};
    /// use u_partition::model::Instance;
    ///
    /// let instance = Instance::new(vec![8, 7, 6, 5, 4]).unwrap();
    /// let config = GraspConfig::default()
    ///     .with_alpha(0.5)
    ///     .with_iterations(20)
    ///     .with_seed(42);
    ///
    /// let result = GraspRunner::run(&instance, &config).unwrap();
    /// assert_eq!(result.partition.difference(), result.difference);
    /// ```
    pub fn run(instance: &Instance, config: &GraspConfig) -> Result<GraspResult> {
        let annealer = Annealer::new(config.anneal)?;
        Self::run_with(instance, config, &annealer)
    }

    /// Runs GRASP with a custom local search.
    pub fn run_with<L: LocalSearch>(
        instance: &Instance,
        config: &GraspConfig,
        search: &L,
    ) -> Result<GraspResult> {
        config.validate()?;
        let constructor = GreedyConstructor::new(config.alpha)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        if let [only] = instance.numbers() {
            debug!("grasp: single number, skipping trials");
            let assignment = vec![Sign::Plus];
            return Ok(GraspResult {
                partition: Partition::from_assignment(instance, &assignment)?,
                assignment,
                difference: only.abs(),
                iterations: 0,
                best_iteration: 0,
                trials: Vec::new(),
                difference_history: vec![only.abs()],
                seed,
            });
        }

        let mut best_assignment = vec![Sign::Plus; instance.len()];
        let mut best_difference = i64::MAX;
        let mut best_iteration = 0;
        let mut trials = Vec::with_capacity(config.iterations);
        let mut difference_history = Vec::with_capacity(config.iterations);

        for trial in 0..config.iterations {
            let Construction {
                mut assignment,
                difference: constructed,
            } = constructor.construct(instance, &mut rng);

            let refined =
                search.refine(instance.numbers(), &mut assignment, constructed, &mut rng);
            trials.push(TrialRecord {
                constructed,
                refined,
            });

            if refined < best_difference {
                best_difference = refined;
                best_assignment = assignment;
                best_iteration = trial;
            }
            difference_history.push(best_difference);

            debug!(
                "grasp trial {}: constructed {}, refined {}, best {}",
                trial, constructed, refined, best_difference
            );
        }

        let partition = Partition::from_assignment(instance, &best_assignment)?;
        info!(
            "grasp: {} trials, best difference {} (trial {}), seed {}",
            config.iterations, best_difference, best_iteration, seed
        );

        Ok(GraspResult {
            assignment: best_assignment,
            difference: best_difference,
            partition,
            iterations: config.iterations,
            best_iteration,
            trials,
            difference_history,
            seed,
        })
    }
}
