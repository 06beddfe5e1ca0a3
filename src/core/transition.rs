//! Transition capability: the permitted successors of a state.
//!
//! Every state declares its successors as one closed enum, [`Transitions::Next`].
//! A state of out-degree N has an N-variant successor enum and N
//! [`TransitionTo`] impls, one per edge. Choosing a successor that was not
//! declared is a type error:
//!
//! ```compile_fail
//! use stepwise::core::TransitionTo;
//! use stepwise::matchers::a_plus_b::{ALetter, Sink, SinkNext};
//!
//! // Sink only declares itself as successor; there is no
//! // `TransitionTo<ALetter>` impl for it.
//! fn leave(sink: Sink) -> SinkNext {
//!     sink.transition(ALetter::default)
//! }
//! ```

use super::state::{Family, State};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One unit of input: a symbol, or the end of the input.
///
/// End of input is a regular member of every state's transition table. A run
/// feeds it exactly once, after the last symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Input<T> {
    Symbol(T),
    End,
}

impl<T> Input<T> {
    /// The symbol, if this is not the end of input.
    pub fn symbol(&self) -> Option<&T> {
        match self {
            Self::Symbol(symbol) => Some(symbol),
            Self::End => None,
        }
    }

    /// Is this the end of input?
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }

    /// Borrow the symbol.
    pub fn as_ref(&self) -> Input<&T> {
        match self {
            Self::Symbol(symbol) => Input::Symbol(symbol),
            Self::End => Input::End,
        }
    }
}

impl<T: Clone> Input<&T> {
    /// Clone the borrowed symbol.
    pub fn cloned(self) -> Input<T> {
        match self {
            Input::Symbol(symbol) => Input::Symbol(symbol.clone()),
            Input::End => Input::End,
        }
    }
}

/// Closed enum of the successors permitted out of one state.
pub trait Successors: Debug + Sized {
    /// Family every successor belongs to.
    type Family: Family;

    /// Names of the declared successors, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Name of the chosen successor.
    fn name(&self) -> &'static str;

    /// Widen the chosen successor into the family.
    fn widen(self) -> Self::Family;
}

/// Declares the successor enum of a state.
pub trait Transitions: State {
    type Next: Successors<Family = Self::Family>;

    /// Names of this state's declared successors.
    fn successors() -> &'static [&'static str] {
        <Self::Next as Successors>::VARIANTS
    }
}

/// One declared edge `Self -> T`.
///
/// Implemented once per permitted successor. [`TransitionTo::transition`] is
/// the only way the stepping code produces a successor, so the set of impls
/// is the transition graph.
pub trait TransitionTo<T: State>: Transitions {
    /// Place a successor instance into this state's successor enum.
    fn admit(next: T) -> Self::Next;

    /// Build the successor from `factory`.
    ///
    /// Only type-checks when `T` is a declared successor of `Self`.
    fn transition<F>(&self, factory: F) -> Self::Next
    where
        F: FnOnce() -> T,
    {
        Self::admit(factory())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    struct Off;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    struct On;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum Switch {
        Off(Off),
        On(On),
    }

    #[derive(Debug, PartialEq)]
    enum OffNext {
        On(On),
    }

    #[derive(Debug, PartialEq)]
    enum OnNext {
        Off(Off),
        On(On),
    }

    impl State for Off {
        type Family = Switch;
        const NAME: &'static str = "Off";

        fn into_family(self) -> Switch {
            Switch::Off(self)
        }

        fn carries(_tag: TypeId) -> bool {
            false
        }
    }

    impl State for On {
        type Family = Switch;
        const NAME: &'static str = "On";

        fn into_family(self) -> Switch {
            Switch::On(self)
        }

        fn carries(_tag: TypeId) -> bool {
            false
        }
    }

    impl Family for Switch {
        const STATES: &'static [&'static str] = &["Off", "On"];

        fn name(&self) -> &'static str {
            match self {
                Self::Off(_) => Off::NAME,
                Self::On(_) => On::NAME,
            }
        }

        fn successors(&self) -> &'static [&'static str] {
            match self {
                Self::Off(_) => Off::successors(),
                Self::On(_) => On::successors(),
            }
        }

        fn carries(&self, _tag: TypeId) -> bool {
            false
        }
    }

    impl Successors for OffNext {
        type Family = Switch;
        const VARIANTS: &'static [&'static str] = &["On"];

        fn name(&self) -> &'static str {
            match self {
                Self::On(_) => On::NAME,
            }
        }

        fn widen(self) -> Switch {
            match self {
                Self::On(s) => s.into_family(),
            }
        }
    }

    impl Successors for OnNext {
        type Family = Switch;
        const VARIANTS: &'static [&'static str] = &["Off", "On"];

        fn name(&self) -> &'static str {
            match self {
                Self::Off(_) => Off::NAME,
                Self::On(_) => On::NAME,
            }
        }

        fn widen(self) -> Switch {
            match self {
                Self::Off(s) => s.into_family(),
                Self::On(s) => s.into_family(),
            }
        }
    }

    impl Transitions for Off {
        type Next = OffNext;
    }

    impl Transitions for On {
        type Next = OnNext;
    }

    impl TransitionTo<On> for Off {
        fn admit(next: On) -> OffNext {
            OffNext::On(next)
        }
    }

    impl TransitionTo<Off> for On {
        fn admit(next: Off) -> OnNext {
            OnNext::Off(next)
        }
    }

    impl TransitionTo<On> for On {
        fn admit(next: On) -> OnNext {
            OnNext::On(next)
        }
    }

    #[test]
    fn transition_builds_declared_successor() {
        let next = Off.transition(|| On);
        assert_eq!(next, OffNext::On(On));
        assert_eq!(next.name(), "On");
    }

    #[test]
    fn factory_selects_between_several_successors() {
        assert_eq!(On.transition(|| Off), OnNext::Off(Off));
        assert_eq!(On.transition(|| On), OnNext::On(On));
    }

    #[test]
    fn widen_returns_family_variant() {
        assert_eq!(On.transition(|| Off).widen(), Switch::Off(Off));
    }

    #[test]
    fn successors_reflect_declaration() {
        assert_eq!(Off::successors(), &["On"]);
        assert_eq!(Switch::On(On).successors(), &["Off", "On"]);
        assert!(!Switch::On(On).is_absorbing());
    }

    #[test]
    fn input_accessors() {
        let symbol = Input::Symbol('x');
        assert_eq!(symbol.symbol(), Some(&'x'));
        assert!(!symbol.is_end());
        assert_eq!(symbol.as_ref().cloned(), symbol);

        let end: Input<char> = Input::End;
        assert!(end.is_end());
        assert_eq!(end.symbol(), None);
    }
}
