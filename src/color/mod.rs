//! Colors, sequential palettes and the value-to-color threshold mapper.

mod mapper;
mod palette;
mod rgb;

pub use mapper::ColorMapper;
pub use palette::Palette;
pub(crate) use palette::{PURPLES, UNKNOWN};
pub use rgb::Rgb;
