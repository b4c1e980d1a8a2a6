use ahash::AHashMap;

use crate::{
    attribute::AttributeName,
    error::{ChoroplethError, Result},
};

/// One row of the indicator table: a neighborhood name plus raw text fields.
///
/// Fields stay unparsed until the join so that malformed cells can be reported
/// per attribute instead of failing the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    key: String,
    fields: AHashMap<String, String>,
}

impl Record {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into(), fields: AHashMap::new() }
    }

    /// Builder form of `insert`.
    pub fn with_field(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.insert(name, raw);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.fields.insert(name.into(), raw.into());
    }

    /// Key as it appears in the table.
    #[inline] pub fn key(&self) -> &str { &self.key }

    /// Key used for matching against feature keys (uppercased).
    pub fn join_key(&self) -> String { self.key.to_uppercase() }

    #[inline] pub fn raw(&self, name: &str) -> Option<&str> { self.fields.get(name).map(String::as_str) }

    /// Parsed value of an attribute. Absent fields fail like empty ones.
    pub fn value(&self, attr: &AttributeName) -> Result<f64> {
        parse_value(self.raw(attr.as_str()).unwrap_or(""))
    }
}

/// Parse a decimal cell. Blank, malformed and non-finite text is an error.
pub fn parse_value(raw: &str) -> Result<f64> {
    let parse_error = || ChoroplethError::Parse { raw: raw.to_string() };
    let value: f64 = raw.trim().parse().map_err(|_| parse_error())?;
    if value.is_finite() { Ok(value) } else { Err(parse_error()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimals() {
        assert_eq!(parse_value("12.5"), Ok(12.5));
        assert_eq!(parse_value(" 7 "), Ok(7.0));
        assert_eq!(parse_value("0"), Ok(0.0));
        assert_eq!(parse_value("-3.25e1"), Ok(-32.5));
    }

    #[test]
    fn rejects_blank_and_malformed() {
        for raw in ["", "   ", "n/a", "12.5%", "NaN", "inf"] {
            assert_eq!(parse_value(raw), Err(ChoroplethError::Parse { raw: raw.into() }), "{raw:?}");
        }
    }

    #[test]
    fn join_key_is_uppercase() {
        assert_eq!(Record::new("Hyde Park").join_key(), "HYDE PARK");
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let record = Record::new("Loop").with_field("PovertyRate", "11.2");
        assert_eq!(record.value(&AttributeName::new("PovertyRate")), Ok(11.2));
        assert!(record.value(&AttributeName::new("UnemploymentRate")).is_err());
    }
}
