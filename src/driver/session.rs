//! Incremental driving of one automaton run.

use crate::core::{Automaton, Input, StateHistory, StateTransition};
use crate::driver::config::RunConfig;
use chrono::Utc;
use tracing::{debug, trace};

/// A run in progress.
///
/// Each call takes the session by value and returns the advanced one; the
/// previous state is consumed by its step.
///
/// # Example
///
/// ```rust
/// use stepwise::core::{Accepting, Automaton};
/// use stepwise::driver::{RunConfig, Session};
/// use stepwise::matchers::a_plus_b::APlusB;
///
/// let session = Session::new(APlusB::initial(), RunConfig::default())
///     .feed('A')
///     .feed('A');
/// assert_eq!(session.consumed(), 2);
///
/// let run = session.feed('B').finish();
/// assert!(run.has_tag::<Accepting>());
/// ```
#[derive(Clone, Debug)]
pub struct Session<A: Automaton> {
    pub(crate) initial: A,
    pub(crate) current: A,
    pub(crate) consumed: usize,
    pub(crate) skipped: usize,
    pub(crate) history: Option<StateHistory<A>>,
    pub(crate) config: RunConfig,
}

impl<A: Automaton> Session<A> {
    /// Start a run in `initial`.
    pub fn new(initial: A, config: RunConfig) -> Self {
        Self {
            current: initial.clone(),
            initial,
            consumed: 0,
            skipped: 0,
            history: config.record_history.then(StateHistory::new),
            config,
        }
    }

    /// State the run started in
    pub fn initial_state(&self) -> &A {
        &self.initial
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &A {
        &self.current
    }

    /// Number of symbols stepped through so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Recorded steps, if history recording is enabled
    pub fn history(&self) -> Option<&StateHistory<A>> {
        self.history.as_ref()
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn is_absorbed(&self) -> bool {
        self.current.is_absorbing()
    }

    /// Step on one symbol.
    pub fn feed(self, symbol: A::Symbol) -> Self {
        self.advance(Input::Symbol(symbol))
    }

    /// Step on every symbol of `input`, in order.
    pub fn feed_all<I>(self, input: I) -> Self
    where
        I: IntoIterator<Item = A::Symbol>,
    {
        let mut session = self;
        for symbol in input {
            session = session.feed(symbol);
        }
        session
    }

    /// Feed the end of input and halt.
    pub fn finish(self) -> Run<A> {
        let session = self.advance(Input::End);

        debug!(
            state = session.current.name(),
            consumed = session.consumed,
            skipped = session.skipped,
            "run halted"
        );

        Run {
            state: session.current,
            consumed: session.consumed,
            skipped: session.skipped,
            history: session.history,
        }
    }

    fn advance(mut self, input: Input<A::Symbol>) -> Self {
        if self.config.stop_when_absorbed && self.current.is_absorbing() {
            if !input.is_end() {
                self.skipped += 1;
            }
            return self;
        }

        let position = self.consumed;
        let from = self.current;
        let from_name = from.name();
        let record_from = self.history.as_ref().map(|_| from.clone());

        let next = from.step(input.as_ref());

        trace!(
            from = from_name,
            to = next.name(),
            input = ?input,
            position,
            "step"
        );

        if let (Some(history), Some(from)) = (self.history.take(), record_from) {
            self.history = Some(history.record(StateTransition {
                from,
                to: next.clone(),
                input: input.clone(),
                position,
                timestamp: Utc::now(),
            }));
        }

        if !input.is_end() {
            self.consumed += 1;
        }
        self.current = next;
        self
    }
}

/// Outcome of a halted run.
#[derive(Clone, Debug)]
pub struct Run<A: Automaton> {
    state: A,
    consumed: usize,
    skipped: usize,
    history: Option<StateHistory<A>>,
}

impl<A: Automaton> Run<A> {
    /// The state the run halted in
    pub fn state(&self) -> &A {
        &self.state
    }

    pub fn into_state(self) -> A {
        self.state
    }

    /// Number of symbols stepped through
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of symbols left unread because the run was absorbed
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn history(&self) -> Option<&StateHistory<A>> {
        self.history.as_ref()
    }

    /// Capability test on the halting state.
    pub fn has_tag<T: crate::core::Tag>(&self) -> bool {
        self.state.has_tag::<T>()
    }

    pub fn is_absorbed(&self) -> bool {
        self.state.is_absorbing()
    }
}
