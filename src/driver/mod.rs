//! Driving automata over input sequences.
//!
//! This module is the shell around the pure core: it folds input through
//! [`Automaton::step`], optionally recording history and logging each step
//! through `tracing`.
//!
//! Runs are iterative. Stack depth does not grow with input length, and each
//! step consumes exactly one input unit, so every finite input terminates
//! after `len + 1` steps (the last one on end of input).

mod config;
mod session;

pub use config::{ConfigError, RunConfig, RunConfigBuilder};
pub use session::{Run, Session};

use crate::core::Automaton;

/// Runs automata with a fixed configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run from `initial` over every symbol of `input`, then end of input.
    pub fn run<A, I>(&self, initial: A, input: I) -> Run<A>
    where
        A: Automaton,
        I: IntoIterator<Item = A::Symbol>,
    {
        Session::new(initial, self.config).feed_all(input).finish()
    }
}

/// Run from `initial` over `input` and return the halting state.
///
/// ```rust
/// use stepwise::core::{Accepting, Automaton, Family};
/// use stepwise::driver::run;
/// use stepwise::matchers::a_plus_b::APlusB;
///
/// assert!(run(APlusB::initial(), "AAB".chars()).has_tag::<Accepting>());
/// assert!(run(APlusB::initial(), "".chars()).is_absorbing());
/// ```
pub fn run<A, I>(initial: A, input: I) -> A
where
    A: Automaton,
    I: IntoIterator<Item = A::Symbol>,
{
    Runner::default().run(initial, input).into_state()
}
