use ahash::AHashSet;

use crate::error::{ChoroplethError, Result};
use super::AttributeName;

/// Indicators shipped with the Chicago community-area dataset, in menu order.
pub(crate) const CHICAGO_ATTRIBUTES: [&str; 11] = [
    "UnemploymentRate",
    "HighSchoolGraduation",
    "PovertyRate",
    "PerceivedNeighborhoodViolenceRate",
    "EaseOfWalkingToTransitStopRate",
    "PerceivedNeighborhoodCleanlinessRate",
    "FoodInsecurityRate",
    "OverallHealthStatusRate",
    "PrimaryCareProviderRate",
    "RoutineCheckupRate",
    "ReceivedNeededCareRate",
];

/// Fixed, ordered list of selectable attributes. The first entry is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeCatalog {
    names: Vec<AttributeName>,
}

impl AttributeCatalog {
    /// Build a catalog from names in menu order.
    /// Fails on an empty list, blank names or duplicates.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = AHashSet::new();
        let mut out = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(ChoroplethError::Configuration("attribute names must not be blank".into()));
            }
            if !seen.insert(name.to_string()) {
                return Err(ChoroplethError::Configuration(format!("duplicate attribute {name:?}")));
            }
            out.push(AttributeName::new(name));
        }
        if out.is_empty() {
            return Err(ChoroplethError::Configuration("attribute catalog is empty".into()));
        }
        Ok(Self { names: out })
    }

    /// The eleven Chicago health and socioeconomic indicators.
    pub fn chicago() -> Self {
        Self { names: CHICAGO_ATTRIBUTES.iter().map(|name| AttributeName::new(name)).collect() }
    }

    /// Look up a catalog entry by exact (case-sensitive) name.
    pub fn get(&self, name: &str) -> Option<&AttributeName> {
        self.names.iter().find(|attr| *attr == name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|attr| *attr == name)
    }

    #[inline] pub fn contains(&self, name: &str) -> bool { self.position(name).is_some() }

    /// Default expressed attribute.
    #[inline] pub fn first(&self) -> &AttributeName { &self.names[0] }

    #[inline] pub fn len(&self) -> usize { self.names.len() }

    /// Always false; a catalog holds at least one attribute.
    #[inline] pub fn is_empty(&self) -> bool { self.names.is_empty() }

    #[inline] pub fn names(&self) -> &[AttributeName] { &self.names }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeName> { self.names.iter() }
}

impl Default for AttributeCatalog {
    fn default() -> Self { Self::chicago() }
}

impl<'a> IntoIterator for &'a AttributeCatalog {
    type Item = &'a AttributeName;
    type IntoIter = std::slice::Iter<'a, AttributeName>;

    fn into_iter(self) -> Self::IntoIter { self.names.iter() }
}
