//! Randomized greedy construction (GRASP variant of Karmarkar-Karp).
//!
//! The classical differencing heuristic repeatedly replaces the two
//! largest numbers by their absolute difference. Here the second number
//! is drawn uniformly from a restricted candidate list (RCL): every
//! remaining element within `alpha * (max - min)` of the largest one.
//! `alpha = 0` reproduces the deterministic heuristic, `alpha = 1` draws
//! the second element from everything that remains.
//!
//! # References
//!
//! - Karmarkar, N. & Karp, R. M. (1982), "The Differencing Method of Set Partitioning"
//! - Feo, T. A. & Resende, M. G. C. (1995), "Greedy Randomized Adaptive Search Procedures"

mod constructor;
mod rcl;

pub(crate) use constructor::check_alpha;
pub use constructor::{Construction, GreedyConstructor};
