//! Natural-breaks classification of an attribute's values.

mod breaks;
mod ckmeans;

use std::ops::Range;

use tracing::warn;

use crate::error::{ChoroplethError, Result};

pub use breaks::ClassBreaks;
pub use ckmeans::Ckmeans;

/// Strategy that partitions sorted values into contiguous ordered clusters.
pub trait Clusterer {
    /// Split `sorted` (ascending, finite, with at least `k` distinct values) into
    /// `k` non-empty, contiguous index ranges covering the whole slice.
    fn cluster(&self, sorted: &[f64], k: usize) -> Vec<Range<usize>>;
}

/// Result of classifying one attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    breaks: ClassBreaks,
    requested: usize,
}

impl Classification {
    #[inline] pub fn breaks(&self) -> &ClassBreaks { &self.breaks }

    #[inline] pub fn class_count(&self) -> usize { self.breaks.class_count() }

    /// Class count the caller asked for.
    #[inline] pub fn requested(&self) -> usize { self.requested }

    /// The requested count, if it had to be reduced for lack of distinct values.
    pub fn adjusted_from(&self) -> Option<usize> {
        (self.requested != self.class_count()).then_some(self.requested)
    }

    /// Class index for a value; `None` for NaN.
    #[inline] pub fn assign(&self, value: f64) -> Option<usize> { self.breaks.assign(value) }
}

/// Classify with the default ckmeans strategy.
pub fn classify(values: &[f64], class_count: usize) -> Result<Classification> {
    classify_with(&Ckmeans, values, class_count)
}

/// Classify `values` into `class_count` natural-breaks classes.
///
/// Non-finite values are ignored. When there are fewer distinct values than
/// classes, the class count drops to the number of distinct values and the
/// result reports the adjustment. No usable values at all is an error.
pub fn classify_with(strategy: &dyn Clusterer, values: &[f64], class_count: usize) -> Result<Classification> {
    if class_count == 0 {
        return Err(ChoroplethError::Configuration("class count must be at least 1".into()));
    }

    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f64::total_cmp);

    let distinct = count_distinct(&sorted);
    if distinct == 0 {
        return Err(ChoroplethError::InsufficientData { requested: class_count, available: 0 });
    }

    let k = if distinct < class_count {
        warn!(requested = class_count, available = distinct, "reducing class count to the number of distinct values");
        distinct
    } else {
        class_count
    };

    let clusters = strategy.cluster(&sorted, k);
    check_clusters(&clusters, sorted.len(), k)?;

    // Lower edge of every class but the first.
    let thresholds = clusters.iter()
        .skip(1)
        .map(|range| sorted[range.start])
        .collect();

    Ok(Classification { breaks: ClassBreaks::new(thresholds)?, requested: class_count })
}

fn count_distinct(sorted: &[f64]) -> usize {
    if sorted.is_empty() { return 0 }
    1 + sorted.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Reject strategy output that is not a contiguous cover of the input.
fn check_clusters(clusters: &[Range<usize>], len: usize, k: usize) -> Result<()> {
    let contiguous = clusters.len() == k
        && clusters.first().is_some_and(|r| r.start == 0)
        && clusters.last().is_some_and(|r| r.end == len)
        && clusters.iter().all(|r| r.start < r.end)
        && clusters.windows(2).all(|w| w[0].end == w[1].start);

    if contiguous { Ok(()) } else {
        Err(ChoroplethError::Configuration(format!(
            "clustering strategy returned {} clusters that do not partition {len} values into {k} classes",
            clusters.len(),
        )))
    }
}
