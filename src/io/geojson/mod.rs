//! GeoJSON reading of neighborhood boundaries and writing of colored scenes.

mod read;
mod write;

pub use read::*;
pub use write::*;
