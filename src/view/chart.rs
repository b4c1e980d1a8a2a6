use std::cmp::Ordering;

use serde::Serialize;

use crate::{
    attribute::AttributeName,
    color::{ColorMapper, Rgb},
    map::Feature,
};
use super::chart_title;

/// One bar of the coordinated chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub key: String,
    pub value: Option<f64>,
    pub class: Option<usize>,
    pub fill: Rgb,
    /// Bar height as a fraction of the chart's value axis, in [0, 1].
    pub height: f64,
}

/// Bars for every feature, tallest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub attribute: AttributeName,
    pub axis_max: f64,
    pub bars: Vec<Bar>,
}

impl Chart {
    /// Rank features by the expressed value, descending. Missing values go last;
    /// ties keep key order so the ranking is stable across redraws.
    pub fn build(features: &[Feature], attribute: &AttributeName, mapper: &ColorMapper, axis_max: f64) -> Self {
        let mut bars: Vec<Bar> = features.iter()
            .map(|feature| {
                let value = feature.value(attribute);
                Bar {
                    key: feature.key().to_string(),
                    value,
                    class: mapper.class_of(value),
                    fill: mapper.color(value),
                    height: value.map(|v| (v / axis_max).clamp(0.0, 1.0)).unwrap_or(0.0),
                }
            })
            .collect();

        bars.sort_by(|a, b| descending(a.value, b.value).then_with(|| a.key.cmp(&b.key)));

        Self { title: chart_title(attribute), attribute: attribute.clone(), axis_max, bars }
    }

    /// Position of a neighborhood in the ranking.
    pub fn rank_of(&self, key: &str) -> Option<usize> {
        self.bars.iter().position(|bar| bar.key == key)
    }
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
