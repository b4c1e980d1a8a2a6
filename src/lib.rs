#![doc = "choromap: natural-breaks choropleth data for neighborhood indicator maps"]
mod attribute;
mod classify;
mod color;
mod config;
mod error;
mod map;
mod session;
mod view;

pub mod io;

#[doc(inline)]
pub use attribute::{AttributeCatalog, AttributeName, AttributeState};

#[doc(inline)]
pub use classify::{classify, classify_with, Ckmeans, ClassBreaks, Classification, Clusterer};

#[doc(inline)]
pub use color::{ColorMapper, Palette, Rgb};

#[doc(inline)]
pub use config::{Style, StyleConfig};

#[doc(inline)]
pub use error::ChoroplethError;

#[doc(inline)]
pub use map::{parse_value, DatasetJoiner, Feature, JoinReport, Record};

#[doc(inline)]
pub use session::{Choropleth, RenderSink, Scene};

#[doc(inline)]
pub use view::{chart_title, format_value, Bar, Chart, Label};
