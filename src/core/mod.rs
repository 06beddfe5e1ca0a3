//! Core automaton capabilities.
//!
//! This module contains the pure functional core of the framework:
//! - States and their closed family via `State` and `Family`
//! - Declared successors via `Transitions`, `Successors` and `TransitionTo`
//! - Tags via `Tag` and `Tagged`
//! - Stepping via `Step` and `Automaton`
//! - Immutable run history
//!
//! Nothing in this module performs I/O or mutation.

mod automaton;
mod history;
mod state;
mod transition;

pub use automaton::{Automaton, Step};
pub use history::{StateHistory, StateTransition};
pub use state::{assert_tagged, Accepting, Family, State, Tag, Tagged};
pub use transition::{Input, Successors, TransitionTo, Transitions};
