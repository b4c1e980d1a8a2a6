//! Error taxonomy for the choropleth core.

/// Errors raised by the join, classification and color mapping steps.
///
/// I/O and configuration loading wrap these in `anyhow::Error` with context.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChoroplethError {
    /// A raw field could not be read as a finite number.
    #[error("cannot parse {raw:?} as a number")]
    Parse { raw: String },

    /// Fewer usable values than requested classes.
    #[error("{available} distinct values available, {requested} classes requested")]
    InsufficientData { requested: usize, available: usize },

    /// Selection of a name that is not in the catalog.
    #[error("unknown attribute {0:?}")]
    UnknownAttribute(String),

    /// Palette, class count or catalog do not fit together.
    #[error("configuration error: {0}")]
    Configuration(String),
}

pub type Result<T, E = ChoroplethError> = std::result::Result<T, E>;
