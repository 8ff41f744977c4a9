//! The closed error-union macro.
//!
//! One assembly's failure channel is the set of every error type its parts
//! can produce. [`error_union!`](macro@crate::error_union) spells that set
//! out as an enum at the call site, so the union is closed by construction:
//! no catch-all variant exists, and coverage is checked by the compiler.

/// Define the closed failure union for one assembly.
///
/// Generates, for `enum Name { Variant(LeafType), .. }`:
///
/// - the enum itself (`Debug`, `Clone`, `PartialEq`; each leaf type must
///   provide those three plus `Display` and `std::error::Error`);
/// - `From<LeafType>` per variant, so part errors convert via `?`/`Into`;
/// - `From<Infallible>`, so parts built with
///   [`always`](crate::always) participate without a dedicated variant;
/// - `Display` and `std::error::Error` delegating to the leaf (the leaf's
///   `Display` is its description tag, and `source()` exposes it);
/// - `dispatch(self, handler) -> R`, which routes the error to the handler
///   for its concrete type. The bounds demand a
///   [`Handle`](crate::Handle) impl for **every** variant type, so an
///   uncovered error type is a compile error, never a runtime fallback.
///
/// Listing the same leaf type under two variants is rejected (conflicting
/// `From` impls): the union is a set, not a list.
///
/// ```
/// use piecemeal_kernel::toy::{IntNegativeError, StringEmptyError};
///
/// piecemeal_kernel::error_union! {
///     /// Everything that can abort a badge build.
///     pub enum BadgeError {
///         StringEmpty(StringEmptyError),
///         IntNegative(IntNegativeError),
///     }
/// }
///
/// let error = BadgeError::from(StringEmptyError);
/// assert_eq!(error.to_string(), "string is empty");
///
/// let label = error.dispatch(piecemeal_kernel::overload!(
///     |_e: IntNegativeError| "negative",
///     |_e: StringEmptyError| "empty",
/// ));
/// assert_eq!(label, "empty");
/// ```
#[macro_export]
macro_rules! error_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident($leaf:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $($variant($leaf),)+
        }

        $(
            impl ::core::convert::From<$leaf> for $name {
                fn from(error: $leaf) -> Self {
                    Self::$variant(error)
                }
            }
        )+

        impl ::core::convert::From<::core::convert::Infallible> for $name {
            fn from(never: ::core::convert::Infallible) -> Self {
                match never {}
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self {
                    $(Self::$variant(error) => ::core::fmt::Display::fmt(error, f),)+
                }
            }
        }

        impl ::std::error::Error for $name {
            fn source(&self) -> ::core::option::Option<&(dyn ::std::error::Error + 'static)> {
                match self {
                    $(
                        Self::$variant(error) => ::core::option::Option::Some(
                            error as &(dyn ::std::error::Error + 'static),
                        ),
                    )+
                }
            }
        }

        impl $name {
            /// Route this error to the handler for its concrete type.
            ///
            /// Requires one `Handle` impl per variant type; leaving a
            /// variant uncovered does not compile.
            $vis fn dispatch<Handler, R>(self, handler: Handler) -> R
            where
                Handler: $($crate::Handle<$leaf, R> +)+ Sized,
            {
                match self {
                    $(
                        Self::$variant(error) =>
                            $crate::Handle::<$leaf, R>::handle(handler, error),
                    )+
                }
            }
        }
    };
}
