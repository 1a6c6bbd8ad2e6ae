// file: src/models/incident.rs
// description: Incident record representing one observed cyber attack
// reference: Threat intelligence incident tracking

use serde::{Deserialize, Serialize};

/// Number of data columns every table row must provide.
pub const COLUMN_COUNT: usize = 10;

/// One row of the threat dataset. Records are either complete or never built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentRecord {
    pub country: String,
    pub year: i32,
    pub attack_type: String,
    pub target_industry: String,
    /// Millions of currency units.
    pub financial_loss: f64,
    pub affected_users: u64,
    pub attack_source: String,
    pub security_vulnerability: String,
    pub defense_mechanism: String,
    /// Hours.
    pub resolution_time: f64,
}

pub struct IncidentBuilder {
    country: Option<String>,
    year: Option<i32>,
    attack_type: Option<String>,
    target_industry: Option<String>,
    financial_loss: Option<f64>,
    affected_users: Option<u64>,
    attack_source: Option<String>,
    security_vulnerability: Option<String>,
    defense_mechanism: Option<String>,
    resolution_time: Option<f64>,
}

impl IncidentBuilder {
    pub fn new() -> Self {
        Self {
            country: None,
            year: None,
            attack_type: None,
            target_industry: None,
            financial_loss: None,
            affected_users: None,
            attack_source: None,
            security_vulnerability: None,
            defense_mechanism: None,
            resolution_time: None,
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn attack_type(mut self, attack_type: impl Into<String>) -> Self {
        self.attack_type = Some(attack_type.into());
        self
    }

    pub fn target_industry(mut self, industry: impl Into<String>) -> Self {
        self.target_industry = Some(industry.into());
        self
    }

    pub fn financial_loss(mut self, loss: f64) -> Self {
        self.financial_loss = Some(loss);
        self
    }

    pub fn affected_users(mut self, users: u64) -> Self {
        self.affected_users = Some(users);
        self
    }

    pub fn attack_source(mut self, source: impl Into<String>) -> Self {
        self.attack_source = Some(source.into());
        self
    }

    pub fn security_vulnerability(mut self, vulnerability: impl Into<String>) -> Self {
        self.security_vulnerability = Some(vulnerability.into());
        self
    }

    pub fn defense_mechanism(mut self, defense: impl Into<String>) -> Self {
        self.defense_mechanism = Some(defense.into());
        self
    }

    pub fn resolution_time(mut self, hours: f64) -> Self {
        self.resolution_time = Some(hours);
        self
    }

    /// Returns `None` unless all ten fields were supplied.
    pub fn build(self) -> Option<IncidentRecord> {
        Some(IncidentRecord {
            country: self.country?,
            year: self.year?,
            attack_type: self.attack_type?,
            target_industry: self.target_industry?,
            financial_loss: self.financial_loss?,
            affected_users: self.affected_users?,
            attack_source: self.attack_source?,
            security_vulnerability: self.security_vulnerability?,
            defense_mechanism: self.defense_mechanism?,
            resolution_time: self.resolution_time?,
        })
    }
}

impl Default for IncidentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incident_builder() {
        let incident = IncidentBuilder::new()
            .country("USA")
            .year(2022)
            .attack_type("Phishing")
            .target_industry("Banking")
            .financial_loss(1.5)
            .affected_users(1000)
            .attack_source("Hacker Group")
            .security_vulnerability("Social Engineering")
            .defense_mechanism("Firewall")
            .resolution_time(12.0)
            .build();

        assert!(incident.is_some());
        let incident = incident.unwrap();
        assert_eq!(incident.country, "USA");
        assert_eq!(incident.affected_users, 1000);
    }

    #[test]
    fn test_incomplete_builder_yields_nothing() {
        let incident = IncidentBuilder::new().country("USA").year(2022).build();
        assert!(incident.is_none());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let incident = IncidentBuilder::new()
            .country("India")
            .year(2019)
            .attack_type("DDoS")
            .target_industry("Retail")
            .financial_loss(0.5)
            .affected_users(10)
            .attack_source("Nation-state")
            .security_vulnerability("Unpatched Software")
            .defense_mechanism("VPN")
            .resolution_time(3.0)
            .build()
            .unwrap();

        let json = serde_json::to_value(&incident).unwrap();
        assert_eq!(json["attackType"], "DDoS");
        assert_eq!(json["financialLoss"], 0.5);
        assert_eq!(json["resolutionTime"], 3.0);
    }
}
