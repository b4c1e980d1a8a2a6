//! Presentation-ready summaries of the current classification: the ranked bar
//! chart and the hover label.

mod chart;
mod label;

pub use chart::{Bar, Chart};
pub use label::{chart_title, format_value, Label};
