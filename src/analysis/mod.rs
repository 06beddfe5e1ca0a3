//! Transition graph analysis.
//!
//! Declared successors are static, but whether the stepping code ever picks
//! each of them is not. [`explore`] drives every reachable state over a probe
//! alphabet and compares the edges actually taken with the declared ones.
//! Violations are accumulated with Stillwater's `Validation`, so a single
//! pass reports every dead edge and every unreachable state.

mod coverage;
mod violations;

pub use coverage::{explore, explore_from, Edge, Exploration};
pub use violations::CoverageViolation;
