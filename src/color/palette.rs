use serde::Serialize;

use crate::error::{ChoroplethError, Result};
use super::Rgb;

/// Five-class sequential purple ramp, light to dark.
pub(crate) const PURPLES: [Rgb; 5] = [
    Rgb::new(0xf2, 0xf0, 0xf7),
    Rgb::new(0xcb, 0xc9, 0xe2),
    Rgb::new(0x9e, 0x9a, 0xc8),
    Rgb::new(0x75, 0x6b, 0xb1),
    Rgb::new(0x54, 0x27, 0x8f),
];

/// Fill for areas without a value.
pub(crate) const UNKNOWN: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);

/// Ordered list of class colors, lowest class first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette(Vec<Rgb>);

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() {
            return Err(ChoroplethError::Configuration("palette must contain at least one color".into()));
        }
        Ok(Self(colors))
    }

    /// Light-to-dark purple ramp used for the indicator map.
    pub fn purples() -> Self { Self(PURPLES.to_vec()) }

    #[inline] pub fn colors(&self) -> &[Rgb] { &self.0 }

    #[inline] pub fn len(&self) -> usize { self.0.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[inline] pub fn contains(&self, color: &Rgb) -> bool { self.0.contains(color) }

    /// Pick `k` colors spread evenly over the ramp, keeping both ends.
    /// Used when classification yields fewer classes than the palette has colors.
    pub fn resample(&self, k: usize) -> Result<Self> {
        let n = self.0.len();
        if k == 0 || k > n {
            return Err(ChoroplethError::Configuration(format!(
                "cannot take {k} colors from a palette of {n}"
            )));
        }
        if k == n { return Ok(self.clone()) }
        if k == 1 { return Ok(Self(vec![self.0[n - 1]])) }

        let step = (n - 1) as f64 / (k - 1) as f64;
        Ok(Self((0..k).map(|i| self.0[(i as f64 * step).round() as usize]).collect()))
    }
}

impl Default for Palette {
    fn default() -> Self { Self::purples() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resample_keeps_ends() {
        let palette = Palette::purples();
        let three = palette.resample(3).unwrap();
        assert_eq!(three.colors(), &[PURPLES[0], PURPLES[2], PURPLES[4]]);

        let two = palette.resample(2).unwrap();
        assert_eq!(two.colors(), &[PURPLES[0], PURPLES[4]]);
    }

    #[test]
    fn resample_single_class_uses_darkest() {
        assert_eq!(Palette::purples().resample(1).unwrap().colors(), &[PURPLES[4]]);
    }

    #[test]
    fn resample_full_length_is_identity() {
        let palette = Palette::purples();
        assert_eq!(palette.resample(5).unwrap(), palette);
    }

    #[test]
    fn resample_rejects_out_of_range() {
        assert!(Palette::purples().resample(0).is_err());
        assert!(Palette::purples().resample(6).is_err());
    }

    #[test]
    fn unknown_is_not_a_ramp_color() {
        assert!(!Palette::purples().contains(&UNKNOWN));
    }
}
