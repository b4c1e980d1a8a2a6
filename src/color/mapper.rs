use crate::{
    classify::ClassBreaks,
    error::{ChoroplethError, Result},
};
use super::{Palette, Rgb};

/// Threshold scale from attribute values to palette colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorMapper {
    breaks: ClassBreaks,
    palette: Palette,
    unknown: Rgb,
}

impl ColorMapper {
    /// Requires one more color than there are breaks, and an unknown color that
    /// is not also a class color.
    pub fn new(breaks: ClassBreaks, palette: Palette, unknown: Rgb) -> Result<Self> {
        if palette.len() != breaks.len() + 1 {
            return Err(ChoroplethError::Configuration(format!(
                "{} breaks need {} colors, palette has {}",
                breaks.len(), breaks.len() + 1, palette.len(),
            )));
        }
        if palette.contains(&unknown) {
            return Err(ChoroplethError::Configuration(format!(
                "unknown color {unknown} is also a class color"
            )));
        }
        Ok(Self { breaks, palette, unknown })
    }

    #[inline] pub fn breaks(&self) -> &ClassBreaks { &self.breaks }

    #[inline] pub fn palette(&self) -> &Palette { &self.palette }

    #[inline] pub fn unknown(&self) -> Rgb { self.unknown }

    /// Class index for a value, `None` when the value is missing.
    pub fn class_of(&self, value: Option<f64>) -> Option<usize> {
        value.and_then(|v| self.breaks.assign(v))
    }

    /// Fill color for a value. Missing values get the unknown color.
    pub fn color(&self, value: Option<f64>) -> Rgb {
        match self.class_of(value) {
            None => self.unknown,
            Some(class) => self.palette.colors()[class],
        }
    }
}
