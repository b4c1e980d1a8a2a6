use std::{fmt, sync::{Arc, LazyLock}};

use regex::Regex;
use serde::{Serialize, Serializer};

/// Lower-to-upper camel-case boundary.
static CAMEL: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").ok());

/// Name of a selectable indicator column, e.g. "PovertyRate".
/// Cheap to clone; the text is shared.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeName(Arc<str>);

impl AttributeName {
    pub(crate) fn new(name: &str) -> Self { Self(Arc::from(name)) }

    #[inline] pub fn as_str(&self) -> &str { &self.0 }

    /// Human-readable form with a space at every lower-to-upper camel-case boundary.
    /// "PerceivedNeighborhoodViolenceRate" -> "Perceived Neighborhood Violence Rate"
    pub fn display_name(&self) -> String {
        match CAMEL.as_ref() {
            Some(re) => re.replace_all(&self.0, "$1 $2").into_owned(),
            None => self.0.to_string(),
        }
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.pad(&self.0) }
}

impl Serialize for AttributeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl AsRef<str> for AttributeName {
    fn as_ref(&self) -> &str { &self.0 }
}

impl PartialEq<str> for AttributeName {
    fn eq(&self, other: &str) -> bool { &*self.0 == other }
}

impl PartialEq<&str> for AttributeName {
    fn eq(&self, other: &&str) -> bool { &*self.0 == *other }
}
