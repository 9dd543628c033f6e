//! `nextword`: weighted-random successor prediction over validated
//! cumulative-distribution tables.
//!
//! You have a table mapping each context key to the labels that may follow
//! it, weighted by a strictly ascending cumulative distribution function
//! (CDF) ending at exactly `1.0`. [`Predictor`] validates the whole table
//! once at construction, then answers `predict(key)` by drawing one uniform
//! value in `[0, 1)` from an injected random source and resolving it with a
//! binary search over the key's CDF.
//!
//! ```rust
//! use nextword::{Cdf, CdfTable, Predictor};
//!
//! let mut table = CdfTable::new();
//! // 10% cat, 40% dog (0.5 - 0.1), 50% lizard (1.0 - 0.5).
//! table.insert(
//!     "the",
//!     Cdf::from_pairs([("cat", 0.1), ("dog", 0.5), ("lizard", 1.0)]),
//! );
//! table.insert("cat", Cdf::from_pairs([("sat", 0.6), ("ate", 1.0)]));
//!
//! let mut predictor = Predictor::with_seed(table, 42).unwrap();
//! let next = predictor.predict(&"the").unwrap();
//! assert!(["cat", "dog", "lizard"].contains(next));
//! ```
//!
//! **Goals:**
//! - **Fail fast**: a malformed table is rejected wholesale at construction
//!   ([`ValidationError`]); nothing re-checks invariants afterwards.
//! - **O(log n) draws**: selection is a binary search for the leftmost
//!   threshold `>=` the drawn value, boundary-inclusive on the upper side.
//! - **Deterministic when you want it**: the random source is injected
//!   ([`Predictor::new`]) or seeded ([`Predictor::with_seed`]), never an
//!   ambient default, so tests can replay exact draw sequences.
//! - **Opaque labels and keys**: both are generics; keys need `Ord` (table
//!   lookup) and `Display` (error messages), labels need nothing on the hot
//!   path.
//!
//! **Concurrency:** the table is immutable after construction and safe to
//! read from anywhere ([`Predictor::table`]). The RNG is the only mutable
//! state, so `predict` takes `&mut self`; share a predictor behind a mutex
//! or build one per thread. Fixed-seed reproducibility is defined for a
//! single sequential caller.
//!
//! **Non-goals:** no persistence format, no concurrent-writer support, no
//! adaptive or learned probabilities, no numeric type beyond `f64`.

#![forbid(unsafe_code)]

mod cdf;
pub use cdf::*;

mod validate;
pub use validate::*;

mod select;
pub use select::*;

mod predictor;
pub use predictor::*;
