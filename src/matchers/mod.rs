//! Matchers built on the automaton framework.

pub mod a_plus_b;

pub use a_plus_b::{is_match, APlusB};
