//! Toy components for conformance testing.
//!
//! Small concrete types that exercise the whole pipeline the way a real
//! consumer would, used by the unit tests, the integration suite, and the
//! doc examples:
//!
//! - **Widget**: a part that can fail validation two ways. Its real
//!   constructor is private; the factory is the only door in, so every
//!   `Widget` in existence satisfies "text non-empty, count non-negative".
//! - **Pair**: a part with no failure modes, built through the trivial
//!   [`always`] factory.
//!
//! The error values are plain data: immutable, comparable, serializable.
//! Their `Display` impls are the human-readable description tags generic
//! handlers print.

use crate::builder::{Thunk, thunk};
use crate::factory::{Always, Factory, always};
use serde::{Deserialize, Serialize};

/// Validation rejected an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("string is empty")]
pub struct StringEmptyError;

/// Validation rejected a negative int (carries the offending value).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("int is negative: {0}")]
pub struct IntNegativeError(pub i32);

crate::error_union! {
    /// Every way `Widget` validation can fail.
    pub enum WidgetError {
        StringEmpty(StringEmptyError),
        IntNegative(IntNegativeError),
    }
}

/// A part whose invariants are "text is non-empty, count is non-negative".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    text: String,
    count: i32,
}

impl Widget {
    /// The real constructor. Private: only reachable through a validated
    /// builder, so it never sees arguments that violate the invariants.
    fn new(text: String, count: i32) -> Self {
        Self { text, count }
    }

    /// The factory for `Widget`, taking the raw candidate arguments.
    pub fn factory(text: String, count: i32) -> WidgetFactory {
        WidgetFactory { text, count }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn count(&self) -> i32 {
        self.count
    }
}

/// Raw candidate arguments for one `Widget`, awaiting validation.
#[derive(Debug)]
pub struct WidgetFactory {
    text: String,
    count: i32,
}

impl Factory for WidgetFactory {
    type Output = Widget;
    type Error = WidgetError;
    type Builder = Thunk<fn(String, i32) -> Widget, (String, i32)>;

    fn validate(self) -> Result<Self::Builder, Self::Error> {
        // Every check runs against the raw arguments before anything is
        // bound; the failure paths construct no thunk and no bundle.
        if self.text.is_empty() {
            return Err(StringEmptyError.into());
        }
        if self.count < 0 {
            return Err(IntNegativeError(self.count).into());
        }
        Ok(thunk(
            Widget::new as fn(String, i32) -> Widget,
            (self.text, self.count),
        ))
    }
}

/// A part that cannot fail: two ints, no invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub a: i32,
    pub b: i32,
}

impl Pair {
    /// Trivial factory: always succeeds, construction still deferred.
    pub fn factory(a: i32, b: i32) -> Always<fn(i32, i32) -> Pair, (i32, i32)> {
        fn build(a: i32, b: i32) -> Pair {
            Pair { a, b }
        }
        always(build as fn(i32, i32) -> Pair, (a, b))
    }
}
