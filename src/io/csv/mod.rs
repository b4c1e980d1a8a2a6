//! CSV reading of the indicator table.

mod read;

pub use read::*;
