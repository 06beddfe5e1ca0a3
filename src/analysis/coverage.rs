//! Exhaustive exploration of an automaton over a probe alphabet.

use crate::analysis::violations::CoverageViolation;
use crate::core::{Automaton, Input};
use std::collections::VecDeque;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// One observed step.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<T> {
    pub from: &'static str,
    pub input: Input<T>,
    pub to: &'static str,
}

/// Result of [`explore`].
#[derive(Clone, Debug)]
pub struct Exploration<A: Automaton> {
    reachable: Vec<A>,
    edges: Vec<Edge<A::Symbol>>,
}

/// Explore from the automaton's initial state.
pub fn explore<A: Automaton>(alphabet: &[A::Symbol]) -> Exploration<A> {
    explore_from(A::initial(), alphabet)
}

/// Breadth-first exploration from `initial`.
///
/// Every reachable state is stepped on every symbol of `alphabet` and on end
/// of input. States entered through end of input are explored as well.
///
/// ```rust
/// use stepwise::analysis::explore;
/// use stepwise::matchers::a_plus_b::APlusB;
///
/// let exploration = explore::<APlusB>(&['A', 'B', 'C']);
/// assert!(exploration.dead_edges().is_empty());
/// assert!(exploration.validate().is_success());
/// ```
pub fn explore_from<A: Automaton>(initial: A, alphabet: &[A::Symbol]) -> Exploration<A> {
    let mut reachable = vec![initial.clone()];
    let mut queue = VecDeque::from([initial]);
    let mut edges = Vec::new();

    while let Some(state) = queue.pop_front() {
        let probes = alphabet
            .iter()
            .map(Input::Symbol)
            .chain(std::iter::once(Input::End));

        for probe in probes {
            let next = state.clone().step(probe);
            edges.push(Edge {
                from: state.name(),
                input: probe.cloned(),
                to: next.name(),
            });
            if !reachable.contains(&next) {
                reachable.push(next.clone());
                queue.push_back(next);
            }
        }
    }

    debug!(
        reachable = reachable.len(),
        edges = edges.len(),
        "exploration finished"
    );

    Exploration { reachable, edges }
}

impl<A: Automaton> Exploration<A> {
    /// Reachable states, in discovery order.
    pub fn reachable(&self) -> &[A] {
        &self.reachable
    }

    pub fn edges(&self) -> &[Edge<A::Symbol>] {
        &self.edges
    }

    pub fn reachable_names(&self) -> Vec<&'static str> {
        self.reachable.iter().map(|s| s.name()).collect()
    }

    /// States of the family never reached.
    pub fn unreachable_states(&self) -> Vec<&'static str> {
        let reached = self.reachable_names();
        A::STATES
            .iter()
            .copied()
            .filter(|name| !reached.contains(name))
            .collect()
    }

    /// Was `from -> to` observed for some probe?
    pub fn taken(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|e| e.from == from && e.to == to)
    }

    /// Inputs that drive `from -> to`.
    pub fn inputs_for(&self, from: &str, to: &str) -> Vec<&Input<A::Symbol>> {
        self.edges
            .iter()
            .filter(|e| e.from == from && e.to == to)
            .map(|e| &e.input)
            .collect()
    }

    /// Declared edges of every reachable state.
    pub fn declared_edges(&self) -> Vec<(&'static str, &'static str)> {
        self.reachable
            .iter()
            .flat_map(|s| s.successors().iter().map(move |to| (s.name(), *to)))
            .collect()
    }

    /// Declared edges no probe ever took.
    pub fn dead_edges(&self) -> Vec<(&'static str, &'static str)> {
        self.declared_edges()
            .into_iter()
            .filter(|(from, to)| !self.taken(from, to))
            .collect()
    }

    /// Check coverage, accumulating every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<CoverageViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<CoverageViolation>>> = Vec::new();

        for state in self.unreachable_states() {
            checks.push(Validation::fail(CoverageViolation::UnreachableState {
                state,
            }));
        }

        for (from, to) in self.dead_edges() {
            checks.push(Validation::fail(CoverageViolation::DeadEdge { from, to }));
        }

        if checks.is_empty() {
            checks.push(Validation::success(()));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
