//! The per-type validation protocol.
//!
//! A [`Factory`] owns the raw candidate arguments for one part and decides,
//! exactly once, between two outcomes:
//!
//! - `Err(error)` — the arguments violate the part's construction
//!   invariants. The error is one of the part's declared variants, and no
//!   thunk (and no argument bundle) has been created.
//! - `Ok(builder)` — every check passed; the builder is a deferred
//!   constructor guaranteed to produce an invariant-satisfying value when
//!   materialized.
//!
//! Validation runs to completion before anything is bound: the `Err` path
//! must be reachable without the real constructor, or its arguments, ever
//! being touched.
//!
//! A participating type keeps its real constructor private and defines its
//! factory in the same module, so the factory is the only door into the
//! type. See [`crate::toy::Widget`] for the full pattern.

use crate::builder::{Construct, Thunk, thunk};
use core::convert::Infallible;
use piecemeal_args::Invoke;

/// Validation of one part's raw arguments into a deferred constructor.
///
/// Consuming `self` mirrors the rest of the kernel: a factory is invoked at
/// most once, and its arguments move into either the error or the builder.
pub trait Factory {
    /// The part type this factory builds.
    type Output;

    /// The closed set of ways validation can fail. Use
    /// [`Infallible`](core::convert::Infallible) when there are none.
    type Error;

    /// The deferred constructor produced on success.
    type Builder: Construct<Output = Self::Output>;

    /// Run every check against the raw arguments, then either report the
    /// first violated invariant or bind the real constructor call.
    fn validate(self) -> Result<Self::Builder, Self::Error>;
}

/// The trivial factory: a part with no failure modes.
///
/// Wraps a plain constructor call so that infallible parts slot into the
/// same coordinator as fallible ones. Its error type is
/// [`Infallible`], which converts into any union generated by
/// [`error_union!`](macro@crate::error_union).
#[derive(Debug)]
pub struct Always<Ctor, Args> {
    builder: Thunk<Ctor, Args>,
}

/// Build an [`Always`] factory from a constructor callback and its
/// argument tuple.
///
/// ```
/// use piecemeal_kernel::{Construct, Factory, always};
///
/// let part = always(|a: i32, b: i32| (a, b), (5, 6));
/// let built = part.validate().unwrap().materialize();
/// assert_eq!(built, (5, 6));
/// ```
pub fn always<Ctor, Args>(ctor: Ctor, args: Args) -> Always<Ctor, Args>
where
    Ctor: Invoke<Args>,
{
    Always {
        builder: thunk(ctor, args),
    }
}

impl<Ctor, Args> Factory for Always<Ctor, Args>
where
    Ctor: Invoke<Args>,
{
    type Output = Ctor::Output;
    type Error = Infallible;
    type Builder = Thunk<Ctor, Args>;

    fn validate(self) -> Result<Self::Builder, Self::Error> {
        Ok(self.builder)
    }
}

/// A factory written inline as a closure.
///
/// The closure performs the validation and returns either a typed error or
/// a deferred constructor. This is the workhorse for call sites that need a
/// one-off factory — and for tests, which use the closure to thread
/// side-effect counters through validation and construction.
#[derive(Debug)]
pub struct FromFn<Func> {
    func: Func,
}

/// Wrap a `FnOnce() -> Result<impl Construct, E>` closure as a [`Factory`].
///
/// ```
/// use piecemeal_kernel::{Construct, Factory, from_fn, thunk};
///
/// let part = from_fn(|| {
///     let n = -3;
///     if n < 0 {
///         return Err("negative");
///     }
///     Ok(thunk(|n: i32| n * 2, (n,)))
/// });
/// assert_eq!(part.validate().err(), Some("negative"));
/// ```
pub fn from_fn<Func, Builder, Error>(func: Func) -> FromFn<Func>
where
    Func: FnOnce() -> Result<Builder, Error>,
    Builder: Construct,
{
    FromFn { func }
}

impl<Func, Builder, Error> Factory for FromFn<Func>
where
    Func: FnOnce() -> Result<Builder, Error>,
    Builder: Construct,
{
    type Output = Builder::Output;
    type Error = Error;
    type Builder = Builder;

    fn validate(self) -> Result<Self::Builder, Self::Error> {
        (self.func)()
    }
}
