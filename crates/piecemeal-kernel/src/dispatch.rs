//! Closed-set, type-routed error dispatch.
//!
//! A failure coming out of an assembly is one value from a closed set of
//! error types with no shared supertype. [`Handle`] is the seam for one
//! handler of one such type; [`overload!`](macro@crate::overload) composes
//! several single-type handlers into one value that implements `Handle` for
//! each of them.
//!
//! Routing is by type identity, never by position: the union's
//! `dispatch` method (generated by [`error_union!`](macro@crate::error_union))
//! demands a `Handle` impl per variant, so an error type with no matching
//! handler fails to compile rather than falling through to a catch-all.

/// A handler for exactly one error type.
///
/// `R` is the dispatch outcome; every handler participating in one dispatch
/// must agree on it, just as the success and failure arms of a factory must
/// return the same type.
///
/// Any `FnOnce(E) -> R` is a handler for `E` via the blanket impl, so a
/// single closure can be passed directly where only one error type is in
/// play.
pub trait Handle<E, R> {
    /// Consume the handler and the error, producing the dispatch outcome.
    fn handle(self, error: E) -> R;
}

impl<E, R, Func> Handle<E, R> for Func
where
    Func: FnOnce(E) -> R,
{
    fn handle(self, error: E) -> R {
        self(error)
    }
}

/// Compose single-error-type closures into one handler value.
///
/// Each closure must ascribe its parameter type; the composed value
/// implements [`Handle`] for exactly those types. Declaration order is
/// irrelevant — routing is by the ascribed type — and listing the same type
/// twice is an overlapping-impl compile error, not a tie-break.
///
/// ```
/// use piecemeal_kernel::toy::{IntNegativeError, StringEmptyError, WidgetError};
///
/// let error = WidgetError::from(IntNegativeError(-42));
/// let seen = error.dispatch(piecemeal_kernel::overload!(
///     |e: StringEmptyError| format!("empty: {e}"),
///     |e: IntNegativeError| format!("negative: {e}"),
/// ));
/// assert_eq!(seen, "negative: int is negative: -42");
/// ```
#[macro_export]
macro_rules! overload {
    (|$a0:ident: $t0:ty| $b0:expr $(,)?) => {{
        struct Overload<F0>(F0);
        impl<R, F0> $crate::Handle<$t0, R> for Overload<F0>
        where
            F0: ::core::ops::FnOnce($t0) -> R,
        {
            fn handle(self, error: $t0) -> R {
                (self.0)(error)
            }
        }
        Overload(|$a0: $t0| $b0)
    }};
    (|$a0:ident: $t0:ty| $b0:expr, |$a1:ident: $t1:ty| $b1:expr $(,)?) => {{
        struct Overload<F0, F1>(F0, F1);
        impl<R, F0, F1> $crate::Handle<$t0, R> for Overload<F0, F1>
        where
            F0: ::core::ops::FnOnce($t0) -> R,
        {
            fn handle(self, error: $t0) -> R {
                (self.0)(error)
            }
        }
        impl<R, F0, F1> $crate::Handle<$t1, R> for Overload<F0, F1>
        where
            F1: ::core::ops::FnOnce($t1) -> R,
        {
            fn handle(self, error: $t1) -> R {
                (self.1)(error)
            }
        }
        Overload(|$a0: $t0| $b0, |$a1: $t1| $b1)
    }};
    (
        |$a0:ident: $t0:ty| $b0:expr,
        |$a1:ident: $t1:ty| $b1:expr,
        |$a2:ident: $t2:ty| $b2:expr $(,)?
    ) => {{
        struct Overload<F0, F1, F2>(F0, F1, F2);
        impl<R, F0, F1, F2> $crate::Handle<$t0, R> for Overload<F0, F1, F2>
        where
            F0: ::core::ops::FnOnce($t0) -> R,
        {
            fn handle(self, error: $t0) -> R {
                (self.0)(error)
            }
        }
        impl<R, F0, F1, F2> $crate::Handle<$t1, R> for Overload<F0, F1, F2>
        where
            F1: ::core::ops::FnOnce($t1) -> R,
        {
            fn handle(self, error: $t1) -> R {
                (self.1)(error)
            }
        }
        impl<R, F0, F1, F2> $crate::Handle<$t2, R> for Overload<F0, F1, F2>
        where
            F2: ::core::ops::FnOnce($t2) -> R,
        {
            fn handle(self, error: $t2) -> R {
                (self.2)(error)
            }
        }
        Overload(
            |$a0: $t0| $b0,
            |$a1: $t1| $b1,
            |$a2: $t2| $b2,
        )
    }};
    (
        |$a0:ident: $t0:ty| $b0:expr,
        |$a1:ident: $t1:ty| $b1:expr,
        |$a2:ident: $t2:ty| $b2:expr,
        |$a3:ident: $t3:ty| $b3:expr $(,)?
    ) => {{
        struct Overload<F0, F1, F2, F3>(F0, F1, F2, F3);
        impl<R, F0, F1, F2, F3> $crate::Handle<$t0, R> for Overload<F0, F1, F2, F3>
        where
            F0: ::core::ops::FnOnce($t0) -> R,
        {
            fn handle(self, error: $t0) -> R {
                (self.0)(error)
            }
        }
        impl<R, F0, F1, F2, F3> $crate::Handle<$t1, R> for Overload<F0, F1, F2, F3>
        where
            F1: ::core::ops::FnOnce($t1) -> R,
        {
            fn handle(self, error: $t1) -> R {
                (self.1)(error)
            }
        }
        impl<R, F0, F1, F2, F3> $crate::Handle<$t2, R> for Overload<F0, F1, F2, F3>
        where
            F2: ::core::ops::FnOnce($t2) -> R,
        {
            fn handle(self, error: $t2) -> R {
                (self.2)(error)
            }
        }
        impl<R, F0, F1, F2, F3> $crate::Handle<$t3, R> for Overload<F0, F1, F2, F3>
        where
            F3: ::core::ops::FnOnce($t3) -> R,
        {
            fn handle(self, error: $t3) -> R {
                (self.3)(error)
            }
        }
        Overload(
            |$a0: $t0| $b0,
            |$a1: $t1| $b1,
            |$a2: $t2| $b2,
            |$a3: $t3| $b3,
        )
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toy::{IntNegativeError, StringEmptyError, WidgetError};

    #[test]
    fn closure_is_a_single_type_handler() {
        let h = |e: IntNegativeError| e.0;
        assert_eq!(h.handle(IntNegativeError(-3)), -3);
    }

    #[test]
    fn overload_routes_by_type() {
        let composed = crate::overload!(
            |_e: StringEmptyError| "empty",
            |_e: IntNegativeError| "negative",
        );
        assert_eq!(
            Handle::<IntNegativeError, _>::handle(composed, IntNegativeError(-1)),
            "negative"
        );
    }

    #[test]
    fn dispatch_is_indifferent_to_handler_order() {
        let forward = WidgetError::from(StringEmptyError).dispatch(crate::overload!(
            |_e: StringEmptyError| "empty",
            |_e: IntNegativeError| "negative",
        ));
        let reversed = WidgetError::from(StringEmptyError).dispatch(crate::overload!(
            |_e: IntNegativeError| "negative",
            |_e: StringEmptyError| "empty",
        ));
        assert_eq!(forward, "empty");
        assert_eq!(forward, reversed);
    }

    #[test]
    fn handlers_can_capture_environment() {
        use std::cell::RefCell;

        let log = RefCell::new(Vec::new());
        let log_ref = &log;
        let outcome = WidgetError::from(IntNegativeError(-7)).dispatch(crate::overload!(
            |e: StringEmptyError| {
                log_ref.borrow_mut().push(e.to_string());
                0
            },
            |e: IntNegativeError| {
                log_ref.borrow_mut().push(e.to_string());
                e.0
            },
        ));
        assert_eq!(outcome, -7);
        assert_eq!(log.into_inner(), vec!["int is negative: -7".to_string()]);
    }
}
