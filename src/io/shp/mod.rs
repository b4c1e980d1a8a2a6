//! ESRI shapefile reading of neighborhood boundaries.

mod polygon;
mod read;

pub use read::*;
