//! Minimum difference number partitioning.
//!
//! Splits a multiset of integers into two subsets whose sums differ as
//! little as possible, using a metaheuristic pipeline:
//!
//! - **Construction**: GRASP variant of the Karmarkar-Karp differencing
//!   heuristic. The second element of each differencing step is drawn from
//!   a restricted candidate list instead of always being the runner-up.
//! - **Local search**: Simulated Annealing over single sign flips with
//!   geometric cooling and exact incremental bookkeeping.
//! - **Restarts**: a GRASP driver repeats (construct, refine) trials on a
//!   single seeded random stream and keeps the best.
//!
//! # Examples
//!
//! ```
//! use u_partition::grasp::{GraspConfig, GraspRunner};
//! use u_partition::model::Instance;
//!
//! let instance = Instance::new(vec![8, 7, 6, 5, 4]).unwrap();
//! let config = GraspConfig::default()
//!     .with_alpha(0.5)
//!     .with_iterations(100)
//!     .with_initial_temperature(100.0)
//!     .with_cooling_rate(0.99)
//!     .with_seed(42);
//!
//! let result = GraspRunner::run(&instance, &config).unwrap();
//! assert_eq!(result.partition.difference(), result.difference);
//! ```
//!
//! # Architecture
//!
//! Loading instances, parsing command lines and printing reports are left
//! to callers. The crate accepts an [`Instance`](model::Instance) and a
//! validated config, and returns the best assignment together with both
//! subsets and their sums.

pub mod construct;
pub mod error;
pub mod grasp;
pub mod model;
pub mod sa;

pub use error::{PartitionError, Result};
