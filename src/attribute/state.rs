use tracing::debug;

use crate::error::{ChoroplethError, Result};
use super::{AttributeCatalog, AttributeName};

/// The attribute catalog together with the currently expressed attribute.
///
/// `set_expressed` is the only way to change the selection; everything that
/// colors or orders features reads it through `expressed`.
#[derive(Debug, Clone)]
pub struct AttributeState {
    catalog: AttributeCatalog,
    expressed: usize, // index into catalog
}

impl AttributeState {
    /// Start with the catalog's first attribute expressed.
    pub fn new(catalog: AttributeCatalog) -> Self {
        Self { catalog, expressed: 0 }
    }

    #[inline] pub fn catalog(&self) -> &AttributeCatalog { &self.catalog }

    #[inline] pub fn expressed(&self) -> &AttributeName { &self.catalog.names()[self.expressed] }

    /// Select a new expressed attribute by name.
    /// Unknown names are rejected and leave the selection unchanged.
    pub fn set_expressed(&mut self, name: &str) -> Result<&AttributeName> {
        let index = self.catalog.position(name)
            .ok_or_else(|| ChoroplethError::UnknownAttribute(name.to_string()))?;
        debug!(from = %self.expressed(), to = name, "expressed attribute changed");
        self.expressed = index;
        Ok(self.expressed())
    }
}

impl Default for AttributeState {
    fn default() -> Self { Self::new(AttributeCatalog::chicago()) }
}
