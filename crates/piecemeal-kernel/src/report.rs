//! Failure reports as plain values.
//!
//! The kernel never logs; when a caller wants to persist or display what
//! went wrong, it snapshots the error into a [`FailureReport`] and does
//! whatever it likes with the value. The report is pure data — rendered
//! description plus the `source()` chain — and serializes with serde.

use serde::{Deserialize, Serialize};
use std::error::Error;

/// A serializable snapshot of one assembly failure.
///
/// Works over any `std::error::Error`, so it covers the generated unions,
/// their leaf errors, and anything a caller wraps them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    /// The rendered description of the error itself.
    pub description: String,

    /// Rendered descriptions of the `source()` chain, nearest cause first.
    pub chain: Vec<String>,
}

impl FailureReport {
    /// Snapshot `error` and its cause chain.
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        let description = error.to_string();
        let mut chain = Vec::new();
        let mut cause = error.source();
        while let Some(current) = cause {
            chain.push(current.to_string());
            cause = current.source();
        }
        Self { description, chain }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toy::{IntNegativeError, StringEmptyError, WidgetError};

    #[test]
    fn leaf_error_has_no_chain() {
        let report = FailureReport::from_error(&StringEmptyError);
        assert_eq!(report.description, "string is empty");
        assert!(report.chain.is_empty());
    }

    #[test]
    fn union_error_chains_to_its_leaf() {
        let report = FailureReport::from_error(&WidgetError::from(IntNegativeError(-42)));
        assert_eq!(report.description, "int is negative: -42");
        assert_eq!(report.chain, vec!["int is negative: -42".to_string()]);
    }

    #[test]
    fn report_serializes_as_plain_data() {
        let report = FailureReport::from_error(&StringEmptyError);
        insta::assert_json_snapshot!(report, @r#"
        {
          "description": "string is empty",
          "chain": []
        }
        "#);
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = FailureReport::from_error(&WidgetError::from(StringEmptyError));
        let json = serde_json::to_string(&report).unwrap();
        let back: FailureReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
