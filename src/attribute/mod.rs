mod catalog;
mod name;
mod state;

pub use catalog::AttributeCatalog;
pub(crate) use catalog::CHICAGO_ATTRIBUTES;
pub use name::AttributeName;
pub use state::AttributeState;
