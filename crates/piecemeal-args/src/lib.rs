//! # Piecemeal args
//!
//! The leaf primitive of the piecemeal workspace: an ordered, opaque bundle
//! of constructor arguments, plus the tuple-application seam used to spend
//! it on exactly one call.
//!
//! A [`Bundle`] captures the arguments for a future constructor call without
//! copying them: owned elements are moved in, borrowed elements are held as
//! references. [`Bundle::unpack`] consumes the bundle and applies a callback
//! to the contents in insertion order. Because `unpack` takes the bundle by
//! value, a bundle can be spent at most once — the invariant is enforced by
//! move semantics, not a runtime check.
//!
//! This crate has no failure semantics and no dependencies. Everything that
//! can go wrong with an argument bundle goes wrong at compile time.

pub mod bundle;
pub mod invoke;

pub use bundle::{Bundle, pack};
pub use invoke::Invoke;
