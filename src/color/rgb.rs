use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ChoroplethError;

/// Simple RGB color, written as CSS hex (`#rrggbb`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }
}

impl fmt::Display for Rgb {
    /// Format as CSS: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ChoroplethError;

    /// Parse `#rrggbb` or the short `#rgb` form (`#ccc` == `#cccccc`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChoroplethError::Configuration(format!("invalid color {s:?}, expected #rrggbb or #rgb"));

        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) { return Err(invalid()) }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = ChoroplethError;

    fn try_from(value: String) -> Result<Self, Self::Error> { value.parse() }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self { color.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!("#54278f".parse::<Rgb>().unwrap(), Rgb::new(0x54, 0x27, 0x8f));
        assert_eq!("#ccc".parse::<Rgb>().unwrap(), Rgb::new(0xcc, 0xcc, 0xcc));
        assert_eq!(" #F2F0F7 ".parse::<Rgb>().unwrap(), Rgb::new(0xf2, 0xf0, 0xf7));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["54278f", "#54278", "#gggggg", "", "#"] {
            assert!(bad.parse::<Rgb>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn displays_as_lowercase_hex() {
        assert_eq!(Rgb::new(242, 240, 247).to_string(), "#f2f0f7");
    }

    #[test]
    fn serde_uses_hex_strings() {
        let color: Rgb = serde_json::from_str(r##""#9e9ac8""##).unwrap();
        assert_eq!(color, Rgb::new(0x9e, 0x9a, 0xc8));
        assert_eq!(serde_json::to_string(&color).unwrap(), r##""#9e9ac8""##);
    }
}
