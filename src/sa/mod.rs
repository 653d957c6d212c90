//! Simulated Annealing (SA) over sign assignments.
//!
//! Each step flips the sign of one uniformly chosen number. Improving
//! flips are always accepted; worsening ones with probability
//! `exp(-delta / T)`, where `delta` is the change in absolute difference.
//! The temperature decays geometrically and the best assignment seen is
//! tracked throughout.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Johnson, Aragon, McGeoch & Schevon (1991), "Optimization by Simulated
//!   Annealing: An Experimental Evaluation; Part II, Graph Coloring and
//!   Number Partitioning"

mod config;
mod runner;
mod state;

pub use config::AnnealConfig;
pub use runner::{AnnealResult, Annealer};
