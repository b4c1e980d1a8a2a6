use ahash::AHashMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::attribute::AttributeCatalog;
use super::{Feature, Record};

/// Outcome of a join, kept so callers can act on gaps in either dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct JoinReport {
    /// Features that received values from at least one record.
    pub matched: usize,
    /// Feature keys with no record; all their attributes are missing.
    pub unmatched_features: Vec<String>,
    /// Record keys (as written in the table) with no feature.
    pub unmatched_records: Vec<String>,
    /// Normalized keys carried by more than one record. The last record wins.
    pub duplicate_keys: Vec<String>,
    /// Attribute cells on matched records that could not be parsed.
    pub unparsed_values: usize,
}

impl JoinReport {
    /// True when every feature and record found a partner exactly once.
    pub fn is_clean(&self) -> bool {
        self.unmatched_features.is_empty() && self.unmatched_records.is_empty() && self.duplicate_keys.is_empty()
    }
}

/// Copies catalog attributes from table records onto spatial features.
#[derive(Debug, Clone, Copy)]
pub struct DatasetJoiner<'a> {
    catalog: &'a AttributeCatalog,
}

impl<'a> DatasetJoiner<'a> {
    pub fn new(catalog: &'a AttributeCatalog) -> Self { Self { catalog } }

    /// Join `records` into `features` by name.
    ///
    /// Record keys are uppercased and compared verbatim with feature keys. Every
    /// feature ends up with an entry for every catalog attribute; unmatched
    /// features and unparseable cells hold `None`. When several records share a
    /// key, each overwrites the previous one in table order.
    pub fn join(&self, mut features: Vec<Feature>, records: &[Record]) -> (Vec<Feature>, JoinReport) {
        let mut report = JoinReport::default();

        for feature in features.iter_mut() {
            for attr in self.catalog {
                feature.set(attr, None);
            }
        }

        let mut matched = vec![false; features.len()];
        let mut key_counts: AHashMap<String, usize> = AHashMap::new();

        for record in records {
            let key = record.join_key();
            let mut hit = false;

            for (index, feature) in features.iter_mut().enumerate() {
                if feature.key() != key { continue }
                hit = true;
                matched[index] = true;

                for attr in self.catalog {
                    let value = match record.value(attr) {
                        Ok(value) => Some(value),
                        Err(err) => {
                            debug!(key = %record.key(), attribute = %attr, %err, "treating value as missing");
                            report.unparsed_values += 1;
                            None
                        }
                    };
                    feature.set(attr, value);
                }
            }

            if !hit { report.unmatched_records.push(record.key().to_string()) }
            *key_counts.entry(key).or_default() += 1;
        }

        report.matched = matched.iter().filter(|&&m| m).count();
        report.unmatched_features = features.iter().zip(&matched)
            .filter(|(_, m)| !**m)
            .map(|(feature, _)| feature.key().to_string())
            .collect();
        report.duplicate_keys = key_counts.into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(key, _)| key)
            .collect();
        report.duplicate_keys.sort();

        for key in &report.unmatched_features {
            warn!(feature = %key, "no record for feature; all attributes missing");
        }
        for key in &report.unmatched_records {
            warn!(record = %key, "record matches no feature");
        }
        for key in &report.duplicate_keys {
            warn!(key = %key, "several records share this key; the last one wins");
        }
        info!(
            features = features.len(),
            records = records.len(),
            matched = report.matched,
            "joined records to features",
        );

        (features, report)
    }
}
