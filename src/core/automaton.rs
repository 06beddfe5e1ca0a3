//! Stepping: mapping one input unit to exactly one declared successor.

use super::state::Family;
use super::transition::{Input, Transitions};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Per-state stepping function over symbols of type `I`.
///
/// A step consumes the state and returns one of its declared successors.
/// It must handle [`Input::End`]; there is no input the step may refuse.
pub trait Step<I>: Transitions {
    fn step(self, input: Input<&I>) -> Self::Next;
}

/// A runnable automaton: a family with an initial state and a stepping
/// function dispatching to each state's [`Step`] impl.
///
/// Usually implemented by the [`automaton!`](crate::automaton) macro.
pub trait Automaton: Family {
    /// Input alphabet.
    type Symbol: Clone
        + Debug
        + PartialEq
        + Serialize
        + for<'de> Deserialize<'de>
        + Send
        + Sync
        + 'static;

    /// The designated initial state.
    fn initial() -> Self;

    /// Advance by one input unit.
    fn step(self, input: Input<&Self::Symbol>) -> Self;
}
