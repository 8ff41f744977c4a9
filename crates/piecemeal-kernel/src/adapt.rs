//! Result-shape adapters over [`assemble`].
//!
//! Thin wrappers that differ only in what happens to the coordinator's final
//! signal: hand the deferred constructor to a continuation, materialize into
//! an `Option` after a failure callback, or materialize into a plain
//! `Result`. Short-circuiting and commit-or-nothing are inherited unchanged
//! from the coordinator.

use crate::assemble::{Compound, PartList, assemble};
use crate::builder::{BuilderList, Construct};
use piecemeal_args::Invoke;

/// Plain-continuation form: pass the un-materialized [`Compound`] or the
/// union error straight to the caller's callbacks.
///
/// Both continuations must return the same type, mirroring the two arms of
/// a factory.
pub fn assemble_with<Error, Ctor, Parts, Done, Fail, R>(
    ctor: Ctor,
    parts: Parts,
    on_success: Done,
    on_fail: Fail,
) -> R
where
    Parts: PartList<Error>,
    Ctor: Invoke<<Parts::Builders as BuilderList>::Outputs>,
    Done: FnOnce(Compound<Ctor, Parts::Builders>) -> R,
    Fail: FnOnce(Error) -> R,
{
    match assemble(ctor, parts) {
        Ok(compound) => on_success(compound),
        Err(error) => on_fail(error),
    }
}

/// Optional form: materialize on success; on failure, feed the error to the
/// single failure callback and yield `None`.
pub fn assemble_optional<Error, Ctor, Parts, Out, Fail>(
    ctor: Ctor,
    parts: Parts,
    on_fail: Fail,
) -> Option<Out>
where
    Parts: PartList<Error>,
    Ctor: Invoke<<Parts::Builders as BuilderList>::Outputs, Output = Out>,
    Fail: FnOnce(Error),
{
    match assemble(ctor, parts) {
        Ok(compound) => Some(compound.materialize()),
        Err(error) => {
            on_fail(error);
            None
        }
    }
}

/// Tagged-union form: materialize on success and let the caller branch on
/// the `Result` whenever it likes.
pub fn assemble_value<Error, Ctor, Parts, Out>(ctor: Ctor, parts: Parts) -> Result<Out, Error>
where
    Parts: PartList<Error>,
    Ctor: Invoke<<Parts::Builders as BuilderList>::Outputs, Output = Out>,
{
    assemble(ctor, parts).map(Compound::materialize)
}
