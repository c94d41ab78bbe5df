//! Equal-population binning of ranked values.

/// Stable ascending 1-based rank of every value, indexed like `values`.
///
/// Equal values keep their input order: whichever appears first gets the lower rank.
#[must_use]
pub fn stable_ranks<T: Ord>(values: &[T]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].cmp(&values[b]));

    let mut ranks = vec![0; values.len()];
    for (position, index) in order.into_iter().enumerate() {
        ranks[index] = position + 1;
    }

    ranks
}

/// Bin label in `0..bins` of the 1-based `rank` out of `count` ranks.
///
/// The ranks `1..=count` are cut at the `bins`-quantiles, interpolating linearly between ranks.
/// Rank `r` lands in the first bin `k` (1-based) whose upper edge `1 + k * (count - 1) / bins`
/// is at or above it, so the lowest rank is always in bin 0 and the highest in bin `bins - 1`.
#[must_use]
pub const fn bin_label(rank: usize, count: usize, bins: usize) -> usize {
    let span = count.saturating_sub(1);
    if span == 0 {
        return 0;
    }

    let k = (bins * (rank - 1)).div_ceil(span);
    if k == 0 { 0 } else { k - 1 }
}

/// Bin label of every value, indexed like `values`.
#[must_use]
pub fn labels<T: Ord>(values: &[T], bins: usize) -> Vec<usize> {
    let count = values.len();
    stable_ranks(values).into_iter().map(|rank| bin_label(rank, count, bins)).collect()
}
