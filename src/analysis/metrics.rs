// file: src/analysis/metrics.rs
// description: scalar rollups shown on the metric cards

use crate::models::IncidentRecord;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub total_incidents: usize,
    pub total_financial_loss: f64,
    pub total_affected_users: u64,
    /// Zero for an empty set.
    pub average_resolution_time: f64,
}

impl DashboardMetrics {
    pub fn from_records(records: &[IncidentRecord]) -> Self {
        let total_incidents = records.len();
        let total_financial_loss = records.iter().map(|r| r.financial_loss).sum::<f64>();
        let total_affected_users = records
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.affected_users));

        let average_resolution_time = if total_incidents == 0 {
            0.0
        } else {
            records.iter().map(|r| r.resolution_time).sum::<f64>() / total_incidents as f64
        };

        Self {
            total_incidents,
            total_financial_loss,
            total_affected_users,
            average_resolution_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;
    use crate::models::{FilterCriteria, IncidentBuilder};
    use crate::parser::TableParser;
    use pretty_assertions::assert_eq;

    fn record(attack: &str, loss: f64, users: u64, hours: f64) -> IncidentRecord {
        IncidentBuilder::new()
            .country("USA")
            .year(2022)
            .attack_type(attack)
            .target_industry("Finance")
            .financial_loss(loss)
            .affected_users(users)
            .attack_source("Hacker Group")
            .security_vulnerability("Social Engineering")
            .defense_mechanism("Firewall")
            .resolution_time(hours)
            .build()
            .unwrap()
    }

    #[test]
    fn test_rollups() {
        let records = vec![
            record("Phishing", 1.5, 1000, 12.0),
            record("Ransomware", 2.5, 500, 20.0),
        ];

        assert_eq!(
            DashboardMetrics::from_records(&records),
            DashboardMetrics {
                total_incidents: 2,
                total_financial_loss: 4.0,
                total_affected_users: 1500,
                average_resolution_time: 16.0,
            }
        );
    }

    #[test]
    fn test_empty_set_is_all_zero() {
        let metrics = DashboardMetrics::from_records(&[]);

        assert_eq!(metrics, DashboardMetrics::default());
        assert!(!metrics.average_resolution_time.is_nan());
    }

    #[test]
    fn test_rollups_from_table_text() {
        let content = "\
| Country | Year | Attack Type | Target Industry | Financial Loss (in Million $) | Number of Affected Users | Attack Source | Security Vulnerability Type | Defense Mechanism Used | Incident Resolution Time (in Hours) |
|---|---|---|---|---|---|---|---|---|---|
| USA | 2022 | Phishing | Finance | 1.5 | 1000 | Hacker Group | Social Engineering | Firewall | 12 |
| USA | 2022 | Ransomware | Finance | 2.5 | 500 | Nation-state | Zero-day | AI-based Detection | 20 |";

        let records = TableParser::new().parse(content);
        let view = filter::apply(&records, &FilterCriteria::default());

        assert_eq!(
            DashboardMetrics::from_records(&view),
            DashboardMetrics {
                total_incidents: 2,
                total_financial_loss: 4.0,
                total_affected_users: 1500,
                average_resolution_time: 16.0,
            }
        );
    }
}
