//! Matcher for the pattern `A+B`: one or more `A`, then exactly one `B`.
//!
//! ```text
//!           'A'             'B'
//!   Start ─────▶ ALetter ─────▶ BLetter ──┐ end
//!     │          │   ▲            │  ▲    │
//!     │          └───┘ 'A'        │  └────┘
//!     │ end,        │ end,        │ any symbol
//!     │ other       │ other       │
//!     ▼             ▼             ▼
//!   ──────────────────── Sink ◀──┐ anything
//!                         └──────┘
//! ```
//!
//! Any symbol outside `{A, B}` routes to `Sink`, which absorbs everything
//! after it. Rejection is a normal transition, not an error.

use crate::automaton;
use crate::core::{Accepting, Automaton, Family, Input, Step, TransitionTo};
use crate::driver::run;

automaton! {
    /// States of the `A+B` matcher.
    pub automaton APlusB over char {
        initial: Start;
        /// Nothing consumed yet.
        Start -> StartNext [Sink, ALetter],
        /// One or more `A` consumed.
        ALetter -> ALetterNext [Sink, ALetter, BLetter],
        /// `A+B` consumed.
        BLetter -> BLetterNext [BLetter, Sink] tags [Accepting],
        /// Rejected.
        Sink -> SinkNext [Sink],
    }
}

impl Step<char> for Start {
    fn step(self, input: Input<&char>) -> StartNext {
        match input {
            Input::End => self.transition(Sink::default),
            Input::Symbol(&'A') => self.transition(ALetter::default),
            Input::Symbol(_) => self.transition(Sink::default),
        }
    }
}

impl Step<char> for ALetter {
    fn step(self, input: Input<&char>) -> ALetterNext {
        match input {
            Input::End => self.transition(Sink::default),
            Input::Symbol(&'A') => self.transition(ALetter::default),
            Input::Symbol(&'B') => self.transition(BLetter::default),
            Input::Symbol(_) => self.transition(Sink::default),
        }
    }
}

impl Step<char> for BLetter {
    fn step(self, input: Input<&char>) -> BLetterNext {
        match input {
            Input::End => self.transition(BLetter::default),
            Input::Symbol(_) => self.transition(Sink::default),
        }
    }
}

impl Step<char> for Sink {
    fn step(self, _input: Input<&char>) -> SinkNext {
        self.transition(Sink::default)
    }
}

/// Run the matcher over `input` and return the halting state.
pub fn matches(input: &str) -> APlusB {
    run(APlusB::initial(), input.chars())
}

/// Does `input` match `A+B`?
///
/// ```rust
/// use stepwise::matchers::a_plus_b::is_match;
///
/// assert!(is_match("AAB"));
/// assert!(!is_match("B"));
/// ```
pub fn is_match(input: &str) -> bool {
    matches(input).has_tag::<Accepting>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Successors, Transitions};

    fn assert_accepted(input: &str) {
        let state = matches(input);
        assert!(state.has_tag::<Accepting>(), "{input:?} ended in {state}");
        assert_ne!(state, APlusB::Sink(Sink));
    }

    fn assert_rejected(input: &str) {
        let state = matches(input);
        assert_eq!(state, APlusB::Sink(Sink), "{input:?}");
        assert!(!state.has_tag::<Accepting>());
    }

    #[test]
    fn regex_minimal_match() {
        assert_accepted("AB");
    }

    #[test]
    fn regex_match() {
        assert_accepted("AAAAAB");
    }

    #[test]
    fn regex_long_match() {
        assert_accepted("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAB");
    }

    #[test]
    fn regex_invalid_char() {
        assert_rejected("AAACAAB");
    }

    #[test]
    fn regex_trailing_chars() {
        assert_rejected("AAAAABB");
    }

    #[test]
    fn regex_empty_input() {
        assert_rejected("");
    }

    #[test]
    fn regex_missing_b() {
        assert_rejected("A");
        assert_rejected("AAAA");
    }

    #[test]
    fn regex_missing_a() {
        assert_rejected("B");
        assert_rejected("BA");
    }

    #[test]
    fn regex_is_case_sensitive() {
        assert_rejected("ab");
        assert_rejected("aB");
    }

    #[test]
    fn sink_absorbs_any_further_input() {
        for tail in ["", "A", "AB", "B", "xyz", "AAAAAB"] {
            assert_eq!(run(APlusB::Sink(Sink), tail.chars()), APlusB::Sink(Sink));
        }
    }

    #[test]
    fn accepting_state_only_survives_end_of_input() {
        assert_eq!(
            APlusB::BLetter(BLetter).step(Input::End),
            APlusB::BLetter(BLetter)
        );
        assert_eq!(
            APlusB::BLetter(BLetter).step(Input::Symbol(&'A')),
            APlusB::Sink(Sink)
        );
    }

    #[test]
    fn every_state_handles_end_of_input() {
        let after_end: Vec<&str> = [
            APlusB::Start(Start),
            APlusB::ALetter(ALetter),
            APlusB::BLetter(BLetter),
            APlusB::Sink(Sink),
        ]
        .into_iter()
        .map(|s| s.step(Input::End).name())
        .collect();

        assert_eq!(after_end, vec!["Sink", "Sink", "BLetter", "Sink"]);
    }

    #[test]
    fn declared_out_degrees() {
        assert_eq!(Start::successors().len(), 2);
        assert_eq!(ALetter::successors().len(), 3);
        assert_eq!(BLetter::successors().len(), 2);
        assert_eq!(SinkNext::VARIANTS, &["Sink"]);
        assert!(APlusB::Sink(Sink).is_absorbing());
        assert!(!APlusB::BLetter(BLetter).is_absorbing());
    }

    #[test]
    fn each_declared_successor_is_reachable() {
        let probes = [
            Input::End,
            Input::Symbol('A'),
            Input::Symbol('B'),
            Input::Symbol('C'),
        ];
        let states = [
            APlusB::Start(Start),
            APlusB::ALetter(ALetter),
            APlusB::BLetter(BLetter),
            APlusB::Sink(Sink),
        ];

        for state in states {
            let taken: Vec<&str> = probes
                .iter()
                .map(|probe| state.step(probe.as_ref()).name())
                .collect();
            for declared in state.successors() {
                assert!(
                    taken.contains(declared),
                    "{state} never transitions to {declared}"
                );
            }
        }
    }
}
