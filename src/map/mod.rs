mod feature;
mod join;
mod record;

pub use feature::Feature;
pub use join::{DatasetJoiner, JoinReport};
pub use record::{parse_value, Record};
