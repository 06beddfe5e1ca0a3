//! Run history tracking.
//!
//! Records every step of a run as an immutable transition value.

use super::automaton::Automaton;
use super::transition::Input;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single step.
///
/// # Example
///
/// ```rust
/// use stepwise::core::{Automaton, Input, StateTransition};
/// use stepwise::matchers::a_plus_b::{ALetter, APlusB};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: APlusB::initial(),
///     to: APlusB::ALetter(ALetter),
///     input: Input::Symbol('A'),
///     position: 0,
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_self_loop());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<A: Automaton> {
    /// The state being left
    pub from: A,
    /// The state entered
    pub to: A,
    /// Input unit that drove the step
    pub input: Input<A::Symbol>,
    /// Number of symbols consumed before this step
    pub position: usize,
    /// When the step happened
    pub timestamp: DateTime<Utc>,
}

impl<A: Automaton> StateTransition<A> {
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of the steps of one run.
///
/// `record` takes the history by value and returns the extended one, so a
/// history is never observed half-updated.
///
/// # Example
///
/// ```rust
/// use stepwise::core::{Automaton, Input, StateHistory, StateTransition};
/// use stepwise::matchers::a_plus_b::{ALetter, APlusB, BLetter};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: APlusB::initial(),
///         to: APlusB::ALetter(ALetter),
///         input: Input::Symbol('A'),
///         position: 0,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: APlusB::ALetter(ALetter),
///         to: APlusB::BLetter(BLetter),
///         input: Input::Symbol('B'),
///         position: 1,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Start -> ALetter -> BLetter
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<A: Automaton> {
    transitions: Vec<StateTransition<A>>,
}

impl<A: Automaton> Default for StateHistory<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Automaton> StateHistory<A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition<A>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first `from` state, then
    /// the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&A> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Names along [`get_path`](Self::get_path).
    pub fn state_names(&self) -> Vec<&'static str> {
        self.get_path().into_iter().map(|s| s.name()).collect()
    }

    /// State after the last recorded step.
    pub fn last_state(&self) -> Option<&A> {
        self.transitions.last().map(|t| &t.to)
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[StateTransition<A>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
