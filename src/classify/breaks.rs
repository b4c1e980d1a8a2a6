use serde::Serialize;

use crate::error::{ChoroplethError, Result};

/// Ordered class thresholds: `k - 1` strictly ascending values defining `k` classes.
/// Each threshold is the lower edge of the class above it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClassBreaks(Vec<f64>);

impl ClassBreaks {
    /// Validate and wrap thresholds. They must be finite and strictly ascending.
    pub fn new(thresholds: Vec<f64>) -> Result<Self> {
        if let Some(bad) = thresholds.iter().find(|t| !t.is_finite()) {
            return Err(ChoroplethError::Configuration(format!("class break {bad} is not finite")));
        }
        if let Some(pair) = thresholds.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ChoroplethError::Configuration(format!(
                "class breaks must be strictly ascending, found {} then {}", pair[0], pair[1]
            )));
        }
        Ok(Self(thresholds))
    }

    #[inline] pub fn thresholds(&self) -> &[f64] { &self.0 }

    #[inline] pub fn len(&self) -> usize { self.0.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Number of classes described, always `len() + 1`.
    #[inline] pub fn class_count(&self) -> usize { self.0.len() + 1 }

    /// Class index in `[0, class_count)` for `value`.
    /// Values below the first break are class 0, values at or above the last break
    /// are the top class. NaN has no class.
    pub fn assign(&self, value: f64) -> Option<usize> {
        if value.is_nan() { return None }
        Some(self.0.partition_point(|&threshold| threshold <= value))
    }
}
