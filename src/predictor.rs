//! Successor prediction over a validated CDF table.
//!
//! [`Predictor`] owns the table and the injected random source. The table is
//! validated once, at construction; `predict` is lookup, one uniform draw,
//! binary-search select. No validation and no allocation on the hot path.
//!
//! The random source is the only stateful piece, which is why `predict`
//! takes `&mut self`. Reproducibility under a fixed seed is defined for one
//! sequential caller; to share a predictor across threads, wrap it in a
//! mutex or build one per thread.

use std::fmt::Display;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cdf::CdfTable;
use crate::select::{select, CorruptCdf};
use crate::validate::{validate_table, ValidationError};

/// Why a prediction failed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    /// The key has no CDF in the table. Recoverable: ask for a key that
    /// exists.
    #[error("no cdf for key `{key}`")]
    UnknownKey {
        /// The key that was looked up.
        key: String,
    },

    /// The stored CDF could not resolve the draw. Unreachable for a table
    /// this predictor validated; fatal if observed.
    #[error(transparent)]
    Corrupt(#[from] CorruptCdf),
}

/// Weighted-random successor predictor.
///
/// Generic over the context-key type `K`, the label type `L`, and the random
/// source `R` (any [`Rng`]; injected so tests can pass deterministic
/// sequences and callers own the sharing policy).
#[derive(Debug, Clone)]
pub struct Predictor<K, L, R = StdRng> {
    table: CdfTable<K, L>,
    rng: R,
}

impl<K, L, R> Predictor<K, L, R>
where
    K: Ord + Display,
    R: Rng,
{
    /// Validate `table` and build a predictor around it.
    ///
    /// Fails fast on the first malformed entry; on failure no predictor
    /// exists, so an unvalidated table can never be sampled. The whole
    /// candidate table is rejected — there is no partial acceptance.
    pub fn new(table: CdfTable<K, L>, rng: R) -> Result<Self, ValidationError> {
        validate_table(&table)?;
        Ok(Self { table, rng })
    }

    /// Draw a successor label for `key`.
    ///
    /// One uniform draw in `[0, 1)` from the injected source, resolved
    /// against the key's CDF in O(log n).
    pub fn predict(&mut self, key: &K) -> Result<&L, PredictError> {
        let Some(cdf) = self.table.get(key) else {
            return Err(PredictError::UnknownKey {
                key: key.to_string(),
            });
        };
        let draw: f64 = self.rng.random();
        Ok(select(cdf, draw)?)
    }

    /// Read access to the validated table.
    pub fn table(&self) -> &CdfTable<K, L> {
        &self.table
    }
}

impl<K, L> Predictor<K, L, StdRng>
where
    K: Ord + Display,
{
    /// Build a predictor with a seeded [`StdRng`] (reproducible).
    pub fn with_seed(table: CdfTable<K, L>, seed: u64) -> Result<Self, ValidationError> {
        Self::new(table, StdRng::seed_from_u64(seed))
    }
}
