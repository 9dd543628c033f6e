//! One-shot validation of a CDF table.
//!
//! Runs exactly once, before a table is accepted into a
//! [`Predictor`](crate::Predictor). After that, nothing re-checks the
//! invariants; the hot path trusts them.
//!
//! Per-key scan, `previous` starting at `0.0`:
//! - ascending is checked before range, so a leading negative threshold
//!   reports as [`ValidationError::NonAscending`];
//! - the final threshold must equal `1.0` *exactly* — this is an
//!   input-authoring contract, not a sampled value, so no tolerance applies.
//!
//! First failure wins. Tables iterate in `BTreeMap` key order, so which
//! failure is reported is deterministic.

use std::fmt::Display;

use crate::cdf::CdfTable;

/// Why a candidate table was rejected.
///
/// All variants are construction-time failures: malformed input is an
/// authoring bug, not a transient condition, so none of these is retried.
/// The offending key is captured as a `String` so the error is
/// self-describing without borrowing the table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The table has no keys at all.
    #[error("probability table must not be empty")]
    EmptyTable,

    /// A key maps to a CDF with zero entries.
    #[error("cdf for key `{key}` must not be empty")]
    EmptyCdf {
        /// The key with the empty CDF.
        key: String,
    },

    /// A threshold failed to increase over its predecessor.
    #[error(
        "cdf for key `{key}` must be strictly ascending: \
         entry {index} has cumulative {cumulative} after {previous}"
    )]
    NonAscending {
        /// The key with the malformed CDF.
        key: String,
        /// Index of the offending entry.
        index: usize,
        /// The offending threshold.
        cumulative: f64,
        /// The threshold it failed to exceed.
        previous: f64,
    },

    /// A threshold was outside `(0, 1]` (or not finite).
    #[error(
        "cumulative for key `{key}` at entry {index} \
         must be greater than zero and at most one, got {cumulative}"
    )]
    OutOfRange {
        /// The key with the malformed CDF.
        key: String,
        /// Index of the offending entry.
        index: usize,
        /// The offending threshold.
        cumulative: f64,
    },

    /// The last threshold was not exactly `1.0`.
    #[error("final cumulative for key `{key}` must be exactly one, got {last}")]
    FinalNotOne {
        /// The key with the malformed CDF.
        key: String,
        /// The final threshold observed.
        last: f64,
    },
}

/// Check a whole table for well-formedness.
///
/// Pure: no side effects beyond the result, and the same table always yields
/// the same answer.
pub fn validate_table<K, L>(table: &CdfTable<K, L>) -> Result<(), ValidationError>
where
    K: Display,
{
    if table.is_empty() {
        return Err(ValidationError::EmptyTable);
    }
    for (key, cdf) in table {
        if cdf.is_empty() {
            return Err(ValidationError::EmptyCdf {
                key: key.to_string(),
            });
        }
        let mut previous = 0.0;
        for (index, entry) in cdf.entries().iter().enumerate() {
            let cumulative = entry.cumulative;
            // NaN fails here too: `NaN <= previous` is false, and both range
            // comparisons below are false, so it lands in OutOfRange.
            if cumulative <= previous {
                return Err(ValidationError::NonAscending {
                    key: key.to_string(),
                    index,
                    cumulative,
                    previous,
                });
            }
            if !(cumulative > 0.0 && cumulative <= 1.0) {
                return Err(ValidationError::OutOfRange {
                    key: key.to_string(),
                    index,
                    cumulative,
                });
            }
            previous = cumulative;
        }
        if previous != 1.0 {
            return Err(ValidationError::FinalNotOne {
                key: key.to_string(),
                last: previous,
            });
        }
    }
    Ok(())
}
