// file: src/filter/mod.rs
// description: filter engine narrowing the full record set to a working view

use crate::models::{FilterCriteria, IncidentRecord};
use serde::Serialize;
use std::collections::BTreeSet;

/// Order-preserving conjunctive filter. Pure and idempotent.
pub fn apply(records: &[IncidentRecord], criteria: &FilterCriteria) -> Vec<IncidentRecord> {
    if criteria.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Distinct selector values, each sorted ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub countries: Vec<String>,
    pub years: Vec<i32>,
    pub attack_types: Vec<String>,
    pub industries: Vec<String>,
}

impl FilterOptions {
    /// Built from the full record set so selectors never disappear as the
    /// view narrows.
    pub fn from_records(records: &[IncidentRecord]) -> Self {
        let mut countries = BTreeSet::new();
        let mut years = BTreeSet::new();
        let mut attack_types = BTreeSet::new();
        let mut industries = BTreeSet::new();

        for record in records {
            countries.insert(record.country.as_str());
            years.insert(record.year);
            attack_types.insert(record.attack_type.as_str());
            industries.insert(record.target_industry.as_str());
        }

        Self {
            countries: countries.into_iter().map(str::to_string).collect(),
            years: years.into_iter().collect(),
            attack_types: attack_types.into_iter().map(str::to_string).collect(),
            industries: industries.into_iter().map(str::to_string).collect(),
        }
    }
}
