//! Frequency helpers shared by the reporters.

use std::collections::BTreeMap;

/// Count occurrences of each value.
///
/// Result is ordered by descending count; equal counts keep ascending key
/// order, so the first entry is the mode with the smallest key.
pub fn value_counts<K, I>(values: I) -> Vec<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: BTreeMap<K, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut out: Vec<(K, usize)> = counts.into_iter().collect();
    // stable sort: ties stay in key order
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// Most frequent value together with its count, `None` on empty input.
pub fn mode<K, I>(values: I) -> Option<(K, usize)>
where
    K: Ord,
    I: IntoIterator<Item = K>,
{
    value_counts(values).into_iter().next()
}
