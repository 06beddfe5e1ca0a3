//! Coverage violations.

use thiserror::Error;

/// Defects in a transition graph found by exploration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoverageViolation {
    #[error("Declared transition {from} -> {to} is never taken")]
    DeadEdge {
        from: &'static str,
        to: &'static str,
    },

    #[error("State {state} is unreachable from the initial state")]
    UnreachableState { state: &'static str },
}
