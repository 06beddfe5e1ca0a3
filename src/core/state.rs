//! State, family and tag capabilities.
//!
//! A *family* is the closed set of states of one automaton, expressed as a
//! Rust enum. Each concrete state type names its family through an associated
//! type, so a state belongs to exactly one family and the family enum can be
//! matched exhaustively.

use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::fmt::Debug;

/// Marker for tag types.
///
/// Tags classify states (accepting, rejecting, ...) without taking part in the
/// transition graph. They carry no behavior.
pub trait Tag: 'static {}

/// Tag carried by accepting states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Accepting;

impl Tag for Accepting {}

/// Attaches tag `T` to the state type implementing it.
///
/// This is the static half of the tag capability; the runtime half is
/// [`State::carries`], which must agree with the set of `Tagged` impls.
/// The [`automaton!`](crate::automaton) macro generates both. Hand-written
/// states should check every `Tagged` impl with [`assert_tagged`].
pub trait Tagged<T: Tag>: State {}

/// Panic unless `S` reports tag `T` at runtime as well as statically.
///
/// ```rust
/// use stepwise::core::{assert_tagged, Accepting};
/// use stepwise::matchers::a_plus_b::BLetter;
///
/// assert_tagged::<BLetter, Accepting>();
/// ```
pub fn assert_tagged<S, T>()
where
    S: Tagged<T>,
    T: Tag,
{
    assert!(
        S::carries(TypeId::of::<T>()),
        "{} implements Tagged<{}> but does not carry it",
        S::NAME,
        std::any::type_name::<T>()
    );
}

/// A concrete state type belonging to one automaton family.
///
/// States are immutable values. All behavior lives in their stepping function
/// (see [`Step`](crate::core::Step)).
pub trait State: Clone + Debug + Send + Sync + 'static {
    /// The closed family this state belongs to.
    type Family: Family;

    /// Name of the state, identical to its variant name in the family.
    const NAME: &'static str;

    /// Widen this state into its family.
    fn into_family(self) -> Self::Family;

    /// Runtime capability test: does this state type carry the tag `tag`?
    ///
    /// Must return `true` exactly for the tags of its `Tagged` impls.
    fn carries(tag: TypeId) -> bool;

    /// Typed form of [`State::carries`].
    fn has_tag<T: Tag>() -> bool {
        Self::carries(TypeId::of::<T>())
    }
}

/// The closed sum of all states of one automaton.
///
/// # Example
///
/// ```rust
/// use stepwise::core::{Accepting, Family, State};
/// use serde::{Deserialize, Serialize};
/// use std::any::TypeId;
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// struct Open;
///
/// #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open(Open),
/// }
///
/// impl State for Open {
///     type Family = Door;
///     const NAME: &'static str = "Open";
///
///     fn into_family(self) -> Door {
///         Door::Open(self)
///     }
///
///     fn carries(_tag: TypeId) -> bool {
///         false
///     }
/// }
///
/// impl Family for Door {
///     const STATES: &'static [&'static str] = &["Open"];
///
///     fn name(&self) -> &'static str {
///         "Open"
///     }
///
///     fn successors(&self) -> &'static [&'static str] {
///         &["Open"]
///     }
///
///     fn carries(&self, tag: TypeId) -> bool {
///         Open::carries(tag)
///     }
/// }
///
/// let door = Open.into_family();
/// assert!(door.is_absorbing());
/// assert!(!door.has_tag::<Accepting>());
/// ```
pub trait Family:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Names of every state in the family, in declaration order.
    const STATES: &'static [&'static str];

    /// Name of the current state.
    fn name(&self) -> &'static str;

    /// Names of the successors declared by the current state.
    fn successors(&self) -> &'static [&'static str];

    /// Runtime capability test on the current state's type.
    fn carries(&self, tag: TypeId) -> bool;

    /// Check whether the current state's type carries tag `T`.
    fn has_tag<T: Tag>(&self) -> bool {
        self.carries(TypeId::of::<T>())
    }

    /// A state is absorbing when its only declared successor is itself.
    fn is_absorbing(&self) -> bool {
        matches!(self.successors(), [only] if *only == self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    struct Idle;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    struct Done;

    #[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
    enum Job {
        Idle(Idle),
        Done(Done),
    }

    struct Archived;
    impl Tag for Archived {}

    impl State for Idle {
        type Family = Job;
        const NAME: &'static str = "Idle";

        fn into_family(self) -> Job {
            Job::Idle(self)
        }

        fn carries(_tag: TypeId) -> bool {
            false
        }
    }

    impl State for Done {
        type Family = Job;
        const NAME: &'static str = "Done";

        fn into_family(self) -> Job {
            Job::Done(self)
        }

        fn carries(tag: TypeId) -> bool {
            tag == TypeId::of::<Accepting>() || tag == TypeId::of::<Archived>()
        }
    }

    impl Tagged<Accepting> for Done {}
    impl Tagged<Archived> for Done {}

    impl Family for Job {
        const STATES: &'static [&'static str] = &["Idle", "Done"];

        fn name(&self) -> &'static str {
            match self {
                Self::Idle(_) => Idle::NAME,
                Self::Done(_) => Done::NAME,
            }
        }

        fn successors(&self) -> &'static [&'static str] {
            match self {
                Self::Idle(_) => &["Idle", "Done"],
                Self::Done(_) => &["Done"],
            }
        }

        fn carries(&self, tag: TypeId) -> bool {
            match self {
                Self::Idle(_) => Idle::carries(tag),
                Self::Done(_) => Done::carries(tag),
            }
        }
    }

    fn statically_accepting<S: Tagged<Accepting>>(_: &S) -> bool {
        S::has_tag::<Accepting>()
    }

    #[test]
    fn into_family_widens_to_matching_variant() {
        assert_eq!(Idle.into_family(), Job::Idle(Idle));
        assert_eq!(Done.into_family(), Job::Done(Done));
    }

    #[test]
    fn name_matches_state_constant() {
        assert_eq!(Job::Idle(Idle).name(), "Idle");
        assert_eq!(Job::Done(Done).name(), "Done");
        assert_eq!(Job::STATES, &["Idle", "Done"]);
    }

    #[test]
    fn untagged_state_carries_nothing() {
        assert!(!Idle::has_tag::<Accepting>());
        assert!(!Job::Idle(Idle).has_tag::<Accepting>());
    }

    #[test]
    fn state_may_carry_several_tags() {
        let done = Job::Done(Done);
        assert!(done.has_tag::<Accepting>());
        assert!(done.has_tag::<Archived>());
    }

    #[test]
    fn static_and_runtime_tags_agree() {
        assert!(statically_accepting(&Done));
        assert_tagged::<Done, Accepting>();
        assert_tagged::<Done, Archived>();
    }

    #[derive(Clone, Copy, PartialEq, Debug)]
    struct Forgetful;

    impl State for Forgetful {
        type Family = Job;
        const NAME: &'static str = "Forgetful";

        fn into_family(self) -> Job {
            Job::Idle(Idle)
        }

        fn carries(_tag: TypeId) -> bool {
            false
        }
    }

    impl Tagged<Accepting> for Forgetful {}

    #[test]
    #[should_panic(expected = "Forgetful implements Tagged")]
    fn tagged_impl_without_runtime_tag_is_caught() {
        assert_tagged::<Forgetful, Accepting>();
    }

    #[test]
    fn absorbing_requires_self_as_only_successor() {
        assert!(!Job::Idle(Idle).is_absorbing());
        assert!(Job::Done(Done).is_absorbing());
    }

    #[test]
    fn family_serializes_correctly() {
        let state = Job::Done(Done);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: Job = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
