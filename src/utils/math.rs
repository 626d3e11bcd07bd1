/// Gains at or below this are treated as zero when choosing splits.
pub const GAIN_EPSILON: f64 = 1e-12;

/// Index of the largest value, lowest index on ties. Empty input yields 0.
pub fn max_index(values: &[f64]) -> usize {
    let mut best = 0;
    let mut best_value = f64::NEG_INFINITY;
    for (i, &v) in values.iter().enumerate() {
        if v > best_value {
            best = i;
            best_value = v;
        }
    }
    best
}

/// Same as [`max_index`] over integer counts.
pub fn max_count_index(counts: &[usize]) -> usize {
    let mut best = 0;
    for (i, &c) in counts.iter().enumerate() {
        if c > counts[best] {
            best = i;
        }
    }
    best
}

/// Shannon entropy in bits of a histogram, with `0 * log2(0) = 0`.
pub fn entropy(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Gain ratio of splitting `parent` into `children`, each a class histogram.
/// Zero when the split information is zero.
pub fn gain_ratio(parent: &[usize], children: &[Vec<usize>]) -> f64 {
    let total: usize = parent.iter().sum();
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    let mut remainder = 0.0;
    let mut split_info = 0.0;
    for child in children {
        let size: usize = child.iter().sum();
        if size == 0 {
            continue;
        }
        let weight = size as f64 / total;
        remainder += weight * entropy(child);
        split_info -= weight * weight.log2();
    }

    if split_info <= 0.0 {
        return 0.0;
    }
    let gain = entropy(parent) - remainder;
    if gain <= GAIN_EPSILON {
        return 0.0;
    }
    gain / split_info
}
