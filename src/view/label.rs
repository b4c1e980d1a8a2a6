use serde::Serialize;

use crate::{attribute::AttributeName, map::Feature};

/// Text shown when hovering a neighborhood or its bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub value: String,     // "12.35%" or "No data"
    pub attribute: String, // expressed attribute
    pub name: String,      // neighborhood key
}

impl Label {
    pub fn new(feature: &Feature, attribute: &AttributeName) -> Self {
        Self {
            value: format_value(feature.value(attribute)),
            attribute: attribute.to_string(),
            name: feature.key().to_string(),
        }
    }
}

/// Indicator values are percentages: two decimals and a percent sign.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}%"),
        _ => "No data".to_string(),
    }
}

/// "UnemploymentRate" -> "Unemployment Rate in each Neighborhood"
pub fn chart_title(attribute: &AttributeName) -> String {
    format!("{} in each Neighborhood", attribute.display_name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{attribute::AttributeCatalog, map::{DatasetJoiner, Record}};

    #[test]
    fn formats_percentages() {
        assert_eq!(format_value(Some(12.345)), "12.35%");
        assert_eq!(format_value(Some(0.0)), "0.00%");
        assert_eq!(format_value(None), "No data");
        assert_eq!(format_value(Some(f64::NAN)), "No data");
    }

    #[test]
    fn title_splits_attribute_name() {
        let catalog = AttributeCatalog::chicago();
        assert_eq!(chart_title(catalog.first()), "Unemployment Rate in each Neighborhood");
    }

    #[test]
    fn label_reads_joined_value() {
        let catalog = AttributeCatalog::new(["PovertyRate"]).unwrap();
        let records = [Record::new("Lincoln Park").with_field("PovertyRate", "8.1")];
        let (features, _) = DatasetJoiner::new(&catalog).join(vec![Feature::new("LINCOLN PARK")], &records);

        let label = Label::new(&features[0], catalog.first());
        assert_eq!(label, Label {
            value: "8.10%".into(),
            attribute: "PovertyRate".into(),
            name: "LINCOLN PARK".into(),
        });
    }
}
