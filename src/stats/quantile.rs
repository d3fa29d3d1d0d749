//! Linear-interpolation quantile computation
//!
//! Computes percentile cutoffs over raw `f64` samples using the
//! linear-interpolation definition: for `n` sorted values and quantile `q`,
//! the cutoff sits at fractional rank `h = (n - 1) * q` and interpolates
//! between the neighboring order statistics.

/// Computes the `q`-quantile of `values` by linear interpolation.
///
/// # Preconditions
/// `values` must be non-empty and `q` must lie in `[0.0, 1.0]`. NaN samples
/// are a precondition violation.
#[must_use]
pub fn quantile(values: &[f64], q: f64) -> f64 {
    debug_assert!(!values.is_empty());
    debug_assert!((0.0..=1.0).contains(&q));

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let rank = (sorted.len() - 1) as f64 * q;
    let lower = rank.floor() as usize;
    let fraction = rank - rank.floor();

    if fraction == 0.0 {
        sorted[lower]
    } else {
        sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower])
    }
}
