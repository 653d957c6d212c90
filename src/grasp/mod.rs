//! Greedy Randomized Adaptive Search Procedure (GRASP).
//!
//! Repeats independent (construction, local search) trials and keeps the
//! best. Construction is randomized differencing
//! ([`GreedyConstructor`](crate::construct::GreedyConstructor)); local
//! search defaults to simulated annealing ([`Annealer`](crate::sa::Annealer))
//! and can be replaced through [`LocalSearch`].
//!
//! Trials share a single random stream instead of being reseeded, so the
//! same seed and configuration reproduce the same result.
//!
//! # References
//!
//! - Feo, T. A. & Resende, M. G. C. (1995), "Greedy Randomized Adaptive
//!   Search Procedures", *Journal of Global Optimization* 6, 109-133.

mod config;
mod runner;
mod types;

pub use config::GraspConfig;
pub use runner::{GraspResult, GraspRunner, TrialRecord};
pub use types::LocalSearch;
