//! # Piecemeal kernel
//!
//! Commit-or-nothing construction of compound values: each part is validated
//! eagerly by its own factory, the first failure aborts the whole build with
//! that part's typed error, and nothing is actually constructed until the
//! caller materializes the assembled result.
//!
//! ## Architecture
//!
//! ```text
//! Bundle<Args>          ← ordered, single-use constructor arguments
//!     │
//! Thunk / Construct     ← a validated, not-yet-run constructor call
//!     │
//! Factory               ← per-type validation: Err(typed) | Ok(builder)
//!     │
//! PartList / assemble   ← validate parts in order, short-circuit on Err
//!     │
//! Compound              ← one deferred constructor for the whole aggregate
//!     │
//! error_union! / Handle ← closed-set, type-routed failure dispatch
//! ```
//!
//! A part that fails validation produces exactly one error value, typed as
//! one of its declared variants; parts after it are never attempted. A part
//! that validates produces a [`Thunk`](builder::Thunk) — ownership of its
//! constructor arguments plus the construction callback — which runs only if
//! every sibling also validated and the caller commits.

pub mod adapt;
pub mod assemble;
pub mod builder;
pub mod dispatch;
mod error_union;
pub mod factory;
pub mod report;
pub mod toy;

pub use adapt::{assemble_optional, assemble_value, assemble_with};
pub use assemble::{Compound, PartList, assemble};
pub use builder::{BuilderList, Construct, Thunk, thunk};
pub use dispatch::Handle;
pub use factory::{Always, Factory, FromFn, always, from_fn};
pub use piecemeal_args::{Bundle, Invoke, pack};
pub use report::FailureReport;
