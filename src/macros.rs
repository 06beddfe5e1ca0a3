//! Macros for declaring automata.

/// Declare an automaton: its family, state types, successor enums, edges
/// and tags, in one place.
///
/// Each line `State -> StateNext [A, B, ...]` declares a unit state type
/// `State`, a successor enum `StateNext` with one variant per listed
/// successor, and one [`TransitionTo`](crate::core::TransitionTo) impl per
/// edge. An optional `tags [..]` list attaches [`Tag`](crate::core::Tag)s.
///
/// The stepping logic is written by hand: every state must implement
/// [`Step`](crate::core::Step) over the declared symbol type, otherwise the
/// generated [`Automaton`](crate::core::Automaton) impl does not compile.
/// Generated types derive `serde::Serialize` and `serde::Deserialize`, so
/// the calling crate needs `serde` with the `derive` feature.
///
/// # Example
///
/// ```
/// use stepwise::automaton;
/// use stepwise::core::{Accepting, Automaton, Family, Input, Step, TransitionTo};
/// use stepwise::driver::run;
///
/// automaton! {
///     pub automaton Parity over bool {
///         initial: Even;
///         Even -> EvenNext [Even, Odd] tags [Accepting],
///         Odd -> OddNext [Even, Odd],
///     }
/// }
///
/// impl Step<bool> for Even {
///     fn step(self, input: Input<&bool>) -> EvenNext {
///         match input {
///             Input::Symbol(true) => self.transition(Odd::default),
///             _ => self.transition(Even::default),
///         }
///     }
/// }
///
/// impl Step<bool> for Odd {
///     fn step(self, input: Input<&bool>) -> OddNext {
///         match input {
///             Input::Symbol(true) => self.transition(Even::default),
///             _ => self.transition(Odd::default),
///         }
///     }
/// }
///
/// let state = run(Parity::initial(), [true, false, true]);
/// assert!(state.has_tag::<Accepting>());
/// ```
#[macro_export]
macro_rules! automaton {
    (
        $(#[$meta:meta])*
        $vis:vis automaton $family:ident over $symbol:ty {
            initial: $initial:ident;
            $(
                $(#[$state_meta:meta])*
                $state:ident -> $next:ident [$($succ:ident),+ $(,)?]
                $(tags [$($tag:ty),+ $(,)?])?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $family {
            $($state($state)),+
        }

        impl $crate::core::Family for $family {
            const STATES: &'static [&'static str] = &[$(stringify!($state)),+];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$state(_) => <$state as $crate::core::State>::NAME),+
                }
            }

            fn successors(&self) -> &'static [&'static str] {
                match self {
                    $(Self::$state(_) => <$next as $crate::core::Successors>::VARIANTS),+
                }
            }

            fn carries(&self, tag: ::std::any::TypeId) -> bool {
                match self {
                    $(Self::$state(_) => <$state as $crate::core::State>::carries(tag)),+
                }
            }
        }

        impl $crate::core::Automaton for $family {
            type Symbol = $symbol;

            fn initial() -> Self {
                $family::$initial($initial)
            }

            fn step(self, input: $crate::core::Input<&$symbol>) -> Self {
                match self {
                    $(Self::$state(state) => $crate::core::Successors::widen(
                        <$state as $crate::core::Step<$symbol>>::step(state, input),
                    )),+
                }
            }
        }

        impl ::std::fmt::Display for $family {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::core::Family::name(self))
            }
        }

        $(
            $(#[$state_meta])*
            #[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, serde::Serialize, serde::Deserialize)]
            $vis struct $state;

            #[derive(Clone, Copy, PartialEq, Eq, Debug)]
            $vis enum $next {
                $($succ($succ)),+
            }

            impl $crate::core::State for $state {
                type Family = $family;
                const NAME: &'static str = stringify!($state);

                fn into_family(self) -> $family {
                    $family::$state(self)
                }

                fn carries(tag: ::std::any::TypeId) -> bool {
                    [$($(::std::any::TypeId::of::<$tag>()),+)?].contains(&tag)
                }
            }

            impl ::std::convert::From<$state> for $family {
                fn from(state: $state) -> Self {
                    $family::$state(state)
                }
            }

            impl $crate::core::Transitions for $state {
                type Next = $next;
            }

            impl $crate::core::Successors for $next {
                type Family = $family;
                const VARIANTS: &'static [&'static str] = &[$(stringify!($succ)),+];

                fn name(&self) -> &'static str {
                    match self {
                        $(Self::$succ(_) => <$succ as $crate::core::State>::NAME),+
                    }
                }

                fn widen(self) -> $family {
                    match self {
                        $(Self::$succ(state) => <$succ as $crate::core::State>::into_family(state)),+
                    }
                }
            }

            $(
                impl $crate::core::TransitionTo<$succ> for $state {
                    fn admit(next: $succ) -> $next {
                        $next::$succ(next)
                    }
                }
            )+

            $($(
                impl $crate::core::Tagged<$tag> for $state {}
            )+)?
        )+
    };
}
