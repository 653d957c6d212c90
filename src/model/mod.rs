//! Problem model: the validated instance, sign assignments, and the
//! aggregated elements produced during differencing.
//!
//! A solution to the two-way partition problem is a [`Sign`] per input
//! number. [`PartitionElement`] is the unit the constructor works on: an
//! aggregate value together with the signed original numbers folded into
//! it. [`Partition`] is the output view handed to reporters.

mod element;
mod instance;
mod partition;
mod sign;

pub use element::{Contribution, PartitionElement};
pub use instance::Instance;
pub use partition::{signed_difference, Partition};
pub use sign::Sign;
