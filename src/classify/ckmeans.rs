//! Optimal one-dimensional k-means (ckmeans) by dynamic programming.
//!
//! Runs of equal values are collapsed into weighted points first, so a cluster
//! boundary can never fall between two equal values.

use std::ops::Range;

use super::Clusterer;

/// Minimal within-cluster sum of squares partition (Wang & Song).
/// O(k * n^2) in the number of distinct values, which is fine for a few hundred areas.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ckmeans;

impl Clusterer for Ckmeans {
    fn cluster(&self, sorted: &[f64], k: usize) -> Vec<Range<usize>> {
        let (values, starts) = collapse_runs(sorted);
        let n = values.len();
        let k = k.min(n);
        if k == 0 { return Vec::new() }

        let sums = PrefixSums::new(&values);

        // cost[c][i]: best cost of splitting groups 0..=i into c + 1 clusters.
        // first[c][i]: first group of the last cluster in that split.
        let mut cost = vec![vec![f64::INFINITY; n]; k];
        let mut first = vec![vec![0usize; n]; k];

        for i in 0..n {
            cost[0][i] = sums.ssq(0, i);
        }

        for c in 1..k {
            for i in c..n {
                for j in (c..=i).rev() {
                    let candidate = cost[c - 1][j - 1] + sums.ssq(j, i);
                    if candidate < cost[c][i] {
                        cost[c][i] = candidate;
                        first[c][i] = j;
                    }
                }
            }
        }

        // Walk the back-pointers from the last group.
        let mut groups = vec![0..0; k];
        let mut right = n - 1;
        for c in (0..k).rev() {
            let left = first[c][right];
            groups[c] = left..right + 1;
            if c > 0 { right = left - 1 }
        }

        groups.into_iter()
            .map(|g| starts[g.start]..starts.get(g.end).copied().unwrap_or(sorted.len()))
            .collect()
    }
}

/// Collapse equal neighbors into (value, multiplicity) plus the start index of each run.
fn collapse_runs(sorted: &[f64]) -> (Vec<(f64, f64)>, Vec<usize>) {
    let mut values: Vec<(f64, f64)> = Vec::new();
    let mut starts = Vec::new();
    for (i, &v) in sorted.iter().enumerate() {
        match values.last_mut() {
            Some((last, weight)) if *last == v => *weight += 1.0,
            _ => {
                values.push((v, 1.0));
                starts.push(i);
            }
        }
    }
    (values, starts)
}

/// Cumulative weight, weighted sum and weighted sum of squares, shifted by the
/// median value to keep the subtraction in `ssq` well conditioned.
struct PrefixSums {
    weights: Vec<f64>,
    sums: Vec<f64>,
    squares: Vec<f64>,
}

impl PrefixSums {
    fn new(values: &[(f64, f64)]) -> Self {
        let shift = values.get(values.len() / 2).map(|&(v, _)| v).unwrap_or(0.0);

        let mut weights = Vec::with_capacity(values.len() + 1);
        let mut sums = Vec::with_capacity(values.len() + 1);
        let mut squares = Vec::with_capacity(values.len() + 1);
        weights.push(0.0);
        sums.push(0.0);
        squares.push(0.0);

        for (i, &(v, w)) in values.iter().enumerate() {
            let x = v - shift;
            weights.push(weights[i] + w);
            sums.push(sums[i] + w * x);
            squares.push(squares[i] + w * x * x);
        }

        Self { weights, sums, squares }
    }

    /// Within-cluster sum of squares for groups `j..=i`.
    #[inline]
    fn ssq(&self, j: usize, i: usize) -> f64 {
        let w = self.weights[i + 1] - self.weights[j];
        let s = self.sums[i + 1] - self.sums[j];
        let q = self.squares[i + 1] - self.squares[j];
        (q - s * s / w).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters(sorted: &[f64], k: usize) -> Vec<Vec<f64>> {
        Ckmeans.cluster(sorted, k).into_iter()
            .map(|range| sorted[range].to_vec())
            .collect()
    }

    #[test]
    fn separates_obvious_groups() {
        let data = [1.0, 2.0, 3.0, 10.0, 11.0, 12.0, 50.0];
        assert_eq!(clusters(&data, 3), vec![
            vec![1.0, 2.0, 3.0],
            vec![10.0, 11.0, 12.0],
            vec![50.0],
        ]);
    }

    #[test]
    fn isolates_outlier() {
        assert_eq!(clusters(&[10.0, 20.0, 90.0], 2), vec![vec![10.0, 20.0], vec![90.0]]);
        assert_eq!(clusters(&[10.0, 20.0, 90.0], 3), vec![vec![10.0], vec![20.0], vec![90.0]]);
    }

    #[test]
    fn never_splits_equal_values() {
        let data = [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 9.0];
        let result = clusters(&data, 3);
        assert_eq!(result, vec![vec![1.0, 1.0, 1.0, 1.0], vec![2.0, 2.0], vec![9.0]]);
    }

    #[test]
    fn single_cluster_covers_everything() {
        let data = [4.0, 5.0, 6.0];
        assert_eq!(Ckmeans.cluster(&data, 1), vec![0..3]);
    }

    #[test]
    fn ranges_are_contiguous_and_cover_input() {
        let data = [0.5, 0.7, 3.2, 3.3, 3.9, 7.0, 7.5, 8.0, 20.0, 21.0, 22.0];
        let ranges = Ckmeans.cluster(&data, 4);
        assert_eq!(ranges.len(), 4);
        assert_eq!(ranges[0].start, 0);
        assert_eq!(ranges[3].end, data.len());
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(!pair[0].is_empty());
        }
    }

    #[test]
    fn empty_input_yields_no_clusters() {
        assert!(Ckmeans.cluster(&[], 3).is_empty());
    }
}
