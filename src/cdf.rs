//! Data model: cumulative distributions over successor labels.
//!
//! A [`Cdf`] is an ordered list of `(label, cumulative)` pairs for one context
//! key. The cumulative value is the probability in `(0, 1]` that this label
//! *or any preceding label* is chosen, so a well-formed CDF is strictly
//! ascending and ends at exactly `1.0`. A [`CdfTable`] maps each context key
//! to its CDF.
//!
//! Nothing here checks well-formedness; that is [`validate_table`]'s job and
//! it runs once, at [`Predictor`] construction.
//!
//! [`validate_table`]: crate::validate_table
//! [`Predictor`]: crate::Predictor

use std::collections::BTreeMap;

/// One step of a cumulative distribution: a label and the probability that
/// this label or any preceding label is selected.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CdfEntry<L> {
    /// The successor label this entry selects.
    pub label: L,
    /// Cumulative probability threshold in `(0, 1]`.
    pub cumulative: f64,
}

impl<L> CdfEntry<L> {
    /// Create an entry. No range checking happens here.
    pub fn new(label: L, cumulative: f64) -> Self {
        Self { label, cumulative }
    }
}

/// Ordered cumulative distribution over successor labels for one context key.
///
/// Example: `[(cat, 0.1), (dog, 0.5), (lizard, 1.0)]` means a 10% chance of
/// `cat`, 40% of `dog` (`0.5 - 0.1`), and 50% of `lizard` (`1.0 - 0.5`).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cdf<L> {
    entries: Vec<CdfEntry<L>>,
}

/// Mapping from context key to its successor CDF.
///
/// `BTreeMap` so iteration (and therefore validation failure order) is
/// deterministic.
pub type CdfTable<K, L> = BTreeMap<K, Cdf<L>>;

/// Error from [`Cdf::from_weights`].
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum WeightError {
    /// No weights were supplied.
    #[error("weights must not be empty")]
    Empty,
    /// A weight was zero, negative, or not finite.
    #[error("weight at index {index} must be positive and finite, got {weight}")]
    NonPositive {
        /// Position of the offending weight.
        index: usize,
        /// The offending weight value.
        weight: f64,
    },
    /// A weight was so small relative to the total that its cumulative
    /// threshold failed to advance in `f64`.
    #[error(
        "weight at index {index} is too small relative to the total \
         to advance the cdf, got {weight}"
    )]
    TooSmall {
        /// Position of the offending weight.
        index: usize,
        /// The offending weight value.
        weight: f64,
    },
}

impl<L> Cdf<L> {
    /// Build a CDF from already-cumulative entries, in order.
    ///
    /// The entries are taken as-is; whether they form a valid CDF is decided
    /// later by table validation.
    pub fn new(entries: Vec<CdfEntry<L>>) -> Self {
        Self { entries }
    }

    /// Build a CDF from `(label, cumulative)` pairs, in order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(label, cumulative)| CdfEntry::new(label, cumulative))
                .collect(),
        }
    }

    /// Build a CDF from `(label, weight)` pairs with positive finite weights.
    ///
    /// Weights are normalized to cumulative thresholds, and the final
    /// threshold is pinned to exactly `1.0` so the result meets the
    /// exact-equality requirement on the last entry regardless of rounding in
    /// the running sum. Anything this returns `Ok` for passes table
    /// validation.
    ///
    /// A weight below `f64` resolution relative to the total (for example
    /// `1e-300` next to `1.0`) cannot advance its cumulative threshold and
    /// fails with [`WeightError::TooSmall`] here, at the authoring seam,
    /// rather than as a non-ascending validation failure later.
    pub fn from_weights<I>(weights: I) -> Result<Self, WeightError>
    where
        I: IntoIterator<Item = (L, f64)>,
    {
        let pairs: Vec<(L, f64)> = weights.into_iter().collect();
        if pairs.is_empty() {
            return Err(WeightError::Empty);
        }
        for (index, (_, weight)) in pairs.iter().enumerate() {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(WeightError::NonPositive {
                    index,
                    weight: *weight,
                });
            }
        }

        let total: f64 = pairs.iter().map(|(_, w)| w).sum();
        let n = pairs.len();
        let mut entries = Vec::with_capacity(n);
        let mut running = 0.0;
        let mut previous = 0.0;
        for (i, (label, weight)) in pairs.into_iter().enumerate() {
            running += weight;
            let cumulative = if i == n - 1 { 1.0 } else { running / total };
            // Every entry must strictly advance the CDF. The pinned final 1.0
            // is covered too: if rounding already drove an earlier threshold
            // to 1.0, the last weight fails here instead of producing a
            // non-ascending table.
            if cumulative <= previous {
                return Err(WeightError::TooSmall { index: i, weight });
            }
            previous = cumulative;
            entries.push(CdfEntry::new(label, cumulative));
        }
        Ok(Self { entries })
    }

    /// The entries in threshold order.
    pub fn entries(&self) -> &[CdfEntry<L>] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the CDF has no entries (never true for a validated CDF).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_preserves_order() {
        let cdf = Cdf::from_pairs([("cat", 0.1), ("dog", 0.5), ("lizard", 1.0)]);
        let labels: Vec<_> = cdf.entries().iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["cat", "dog", "lizard"]);
        assert_eq!(cdf.len(), 3);
    }

    #[test]
    fn from_weights_normalizes_to_cumulative() {
        // Weights 1:4:5 are the worked example's 10%/40%/50% split.
        let cdf = Cdf::from_weights([("cat", 1.0), ("dog", 4.0), ("lizard", 5.0)]).unwrap();
        let cums: Vec<_> = cdf.entries().iter().map(|e| e.cumulative).collect();
        assert!((cums[0] - 0.1).abs() < 1e-12);
        assert!((cums[1] - 0.5).abs() < 1e-12);
        assert_eq!(cums[2], 1.0);
    }

    #[test]
    fn from_weights_pins_final_threshold_to_one() {
        // Sums like 0.1 * 3 do not hit 1.0 bitwise without the pin.
        let cdf = Cdf::from_weights([("a", 0.1), ("b", 0.1), ("c", 0.1)]).unwrap();
        assert_eq!(cdf.entries().last().unwrap().cumulative, 1.0);
    }

    #[test]
    fn from_weights_rejects_empty() {
        let r = Cdf::<&str>::from_weights([]);
        assert_eq!(r.unwrap_err(), WeightError::Empty);
    }

    #[test]
    fn from_weights_rejects_weight_below_f64_resolution() {
        // 1e-300 next to 1.0 cannot advance the cumulative: the ratio rounds
        // to 1.0 twice. This must fail here, not surface later as a
        // non-ascending table.
        let r = Cdf::from_weights([("a", 1.0), ("b", 1e-300)]);
        assert_eq!(
            r.unwrap_err(),
            WeightError::TooSmall {
                index: 1,
                weight: 1e-300,
            }
        );
    }

    #[test]
    fn from_weights_rejects_vanishing_middle_weight() {
        let r = Cdf::from_weights([("a", 1.0), ("b", 1e-300), ("c", 1.0)]);
        assert!(matches!(r, Err(WeightError::TooSmall { index: 1, .. })));
    }

    #[test]
    fn tiny_leading_weight_is_still_representable() {
        // Order matters: 1e-300 / 1.0 is a representable threshold when
        // nothing precedes it.
        let cdf = Cdf::from_weights([("a", 1e-300), ("b", 1.0)]).unwrap();
        let cums: Vec<_> = cdf.entries().iter().map(|e| e.cumulative).collect();
        assert!(cums[0] > 0.0 && cums[0] < 1.0);
        assert_eq!(cums[1], 1.0);
    }

    #[test]
    fn from_weights_rejects_bad_weights() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let r = Cdf::from_weights([("a", 2.0), ("b", bad)]);
            match r {
                Err(WeightError::NonPositive { index, .. }) => assert_eq!(index, 1),
                other => panic!("expected NonPositive, got {other:?}"),
            }
        }
    }
}
