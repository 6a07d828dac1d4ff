//! Order statistics over pixel intensity samples
//!
//! Explicit pure functions standing in for the usual numeric-array
//! one-liners, so the binarizer's thresholds have no hidden vectorized
//! state behind them.

/// Linear-interpolated percentile of a sample
///
/// Matches the conventional definition used by numeric libraries: the
/// rank `pct / 100 * (n - 1)` is split into its floor and ceiling
/// neighbors in the sorted sample and interpolated between them.
/// `pct` is clamped to `[0, 100]`. Returns `None` for an empty sample.
pub fn percentile(values: &[u8], pct: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted: Vec<u8> = values.to_vec();
    sorted.sort_unstable();

    let pct = pct.clamp(0.0, 100.0);
    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lower_index = rank.floor() as usize;
    let upper_index = rank.ceil() as usize;

    let lower = f64::from(sorted.get(lower_index).copied()?);
    let upper = f64::from(sorted.get(upper_index).copied()?);
    let fraction = rank - rank.floor();

    Some((upper - lower).mul_add(fraction, lower))
}

/// Minimum and maximum of a sample in one pass
///
/// Returns `None` for an empty sample.
pub fn min_max(values: &[u8]) -> Option<(u8, u8)> {
    values.iter().fold(None, |range, &value| match range {
        None => Some((value, value)),
        Some((min, max)) => Some((min.min(value), max.max(value))),
    })
}
