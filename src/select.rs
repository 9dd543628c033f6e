//! Weighted selection over one CDF.
//!
//! The draw resolves with a binary search for the leftmost entry whose
//! threshold is `>= draw`, so selection is O(log n) comparisons. The boundary
//! is inclusive on the upper side: `draw == cumulative` selects that entry,
//! at every boundary including the first entry's threshold and the final
//! `1.0`.

use crate::cdf::Cdf;

/// The CDF had no entry at or above the drawn value.
///
/// Unreachable for a validated CDF with `draw < 1.0`: the final threshold is
/// exactly `1.0`, so some entry always qualifies. Seeing this error means
/// validation was bypassed or validated state was mutated afterwards; treat
/// it as a fatal internal-invariant violation, not a condition to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("cdf has no entry at or above the drawn value; it was never validated or was mutated")]
pub struct CorruptCdf;

/// Select the label for `draw` in `[0, 1)`: the leftmost entry with
/// `cumulative >= draw`.
///
/// `draw` is supplied by the caller rather than generated here, so the
/// algorithm is independent of any random source and testable with literal
/// inputs.
pub fn select<L>(cdf: &Cdf<L>, draw: f64) -> Result<&L, CorruptCdf> {
    // Entries with cumulative < draw form the left partition; its length is
    // the leftmost index with cumulative >= draw.
    let idx = cdf.entries().partition_point(|e| e.cumulative < draw);
    cdf.entries().get(idx).map(|e| &e.label).ok_or(CorruptCdf)
}

/// Linear-scan reference implementation of [`select`].
///
/// Same contract, O(n). Not part of the public API surface: it exists so the
/// equivalence law in the test suite and the selection bench have an
/// independent oracle to compare against.
#[doc(hidden)]
pub fn select_linear<L>(cdf: &Cdf<L>, draw: f64) -> Result<&L, CorruptCdf> {
    cdf.entries()
        .iter()
        .find(|e| e.cumulative >= draw)
        .map(|e| &e.label)
        .ok_or(CorruptCdf)
}
