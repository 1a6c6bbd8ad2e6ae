// file: src/analysis/aggregator.rs
// description: grouped summaries feeding the dashboard charts
// reference: single-pass keyed grouping materialized in display order

use crate::models::{IncidentRecord, LabeledValue};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub const TOP_COUNTRIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearlyTrend {
    pub year: i32,
    pub count: usize,
    pub loss: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryRank {
    pub country: String,
    pub attacks: usize,
    pub loss: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryRank {
    pub industry: String,
    pub count: usize,
}

/// Ascending by year.
pub fn yearly_trend(records: &[IncidentRecord]) -> Vec<YearlyTrend> {
    let mut years: BTreeMap<i32, YearlyTrend> = BTreeMap::new();

    for record in records {
        let entry = years.entry(record.year).or_insert(YearlyTrend {
            year: record.year,
            count: 0,
            loss: 0.0,
        });
        entry.count += 1;
        entry.loss += record.financial_loss;
    }

    years.into_values().collect()
}

/// First-seen order of attack types.
pub fn attack_type_distribution(records: &[IncidentRecord]) -> Vec<CategoryShare> {
    let mut groups = Grouping::new();
    for record in records {
        groups.entry(&record.attack_type, |name| CategoryShare {
            name: name.to_string(),
            count: 0,
        })
        .count += 1;
    }
    groups.into_vec()
}

/// Descending by attack count, ties kept in first-seen order, top ten only.
pub fn country_ranking(records: &[IncidentRecord]) -> Vec<CountryRank> {
    let mut groups = Grouping::new();
    for record in records {
        let entry = groups.entry(&record.country, |country| CountryRank {
            country: country.to_string(),
            attacks: 0,
            loss: 0.0,
        });
        entry.attacks += 1;
        entry.loss += record.financial_loss;
    }

    let mut ranked = groups.into_vec();
    // sort_by is stable, which keeps first-seen order among equal counts
    ranked.sort_by(|a, b| b.attacks.cmp(&a.attacks));
    ranked.truncate(TOP_COUNTRIES);
    ranked
}

/// Descending by count, ties kept in first-seen order.
pub fn industry_ranking(records: &[IncidentRecord]) -> Vec<IndustryRank> {
    let mut groups = Grouping::new();
    for record in records {
        groups.entry(&record.target_industry, |industry| IndustryRank {
            industry: industry.to_string(),
            count: 0,
        })
        .count += 1;
    }

    let mut ranked = groups.into_vec();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// All four chart datasets for one record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCharts {
    pub yearly_trend: Vec<YearlyTrend>,
    pub attack_types: Vec<CategoryShare>,
    pub top_countries: Vec<CountryRank>,
    pub industries: Vec<IndustryRank>,
}

impl DashboardCharts {
    pub fn from_records(records: &[IncidentRecord]) -> Self {
        Self {
            yearly_trend: yearly_trend(records),
            attack_types: attack_type_distribution(records),
            top_countries: country_ranking(records),
            industries: industry_ranking(records),
        }
    }

    pub fn yearly_series(&self) -> Vec<LabeledValue> {
        self.yearly_trend
            .iter()
            .map(|y| LabeledValue::new(y.year.to_string(), y.count as f64))
            .collect()
    }

    pub fn attack_type_series(&self) -> Vec<LabeledValue> {
        self.attack_types
            .iter()
            .map(|c| LabeledValue::new(c.name.clone(), c.count as f64))
            .collect()
    }

    pub fn country_series(&self) -> Vec<LabeledValue> {
        self.top_countries
            .iter()
            .map(|c| LabeledValue::new(c.country.clone(), c.attacks as f64))
            .collect()
    }

    pub fn industry_series(&self) -> Vec<LabeledValue> {
        self.industries
            .iter()
            .map(|i| LabeledValue::new(i.industry.clone(), i.count as f64))
            .collect()
    }
}

/// Key-to-slot index over a vector that remembers insertion order.
struct Grouping<T> {
    index: HashMap<String, usize>,
    groups: Vec<T>,
}

impl<T> Grouping<T> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }

    fn entry(&mut self, key: &str, init: impl FnOnce(&str) -> T) -> &mut T {
        let slot = match self.index.get(key) {
            Some(&slot) => slot,
            None => {
                self.groups.push(init(key));
                self.index.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        &mut self.groups[slot]
    }

    fn into_vec(self) -> Vec<T> {
        self.groups
    }
}
