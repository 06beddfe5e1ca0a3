//! Stepwise: type-safe finite-state automata
//!
//! The legal transitions out of a state are part of the state's type. A state
//! declares its permitted successors as a closed enum, and the only way its
//! stepping code can produce a successor is through a `TransitionTo` impl for
//! one of them. Picking an undeclared successor does not compile; there is no
//! runtime "illegal transition" error.
//!
//! # Core Concepts
//!
//! - **Family**: the closed enum of all states of one automaton
//! - **Successors**: per-state closed enum of permitted next states
//! - **Tags**: marker types such as `Accepting`, tested after a run halts
//! - **Driver**: iterative runs with optional history, checkpoints and tracing
//!
//! # Example
//!
//! ```rust
//! use stepwise::core::{Accepting, Automaton, Family};
//! use stepwise::driver::run;
//! use stepwise::matchers::a_plus_b::{APlusB, Sink};
//!
//! let state = run(APlusB::initial(), "AAAB".chars());
//! assert!(state.has_tag::<Accepting>());
//!
//! let state = run(APlusB::initial(), "AAACAAB".chars());
//! assert_eq!(state, APlusB::Sink(Sink));
//! ```

mod macros;

pub mod analysis;
pub mod checkpoint;
pub mod core;
pub mod driver;
pub mod matchers;

// Re-export commonly used types
pub use crate::core::{Accepting, Automaton, Family, Input, State, Step, TransitionTo};
pub use crate::driver::{run, Run, RunConfig, Runner, Session};
