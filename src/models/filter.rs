// file: src/models/filter.rs
// description: optional equality predicates narrowing the record set
// reference: dashboard filter selectors

use crate::error::{DashboardError, Result};
use crate::models::IncidentRecord;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Selector value that clears a single criterion.
pub const ALL: &str = "all";

lazy_static! {
    // Start of each `key=` in a line of assignments. Values may contain spaces.
    static ref ASSIGNMENT_KEY: Regex = Regex::new(
        r"(?:^|\s)[A-Za-z_]+\s*="
    ).expect("ASSIGNMENT_KEY regex is valid");
}

/// Conjunctive equality constraints. An absent field imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attack_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds criteria from raw selector values, treating `all` as unset.
    pub fn from_selections(
        country: Option<&str>,
        year: Option<&str>,
        attack_type: Option<&str>,
        industry: Option<&str>,
    ) -> Result<Self> {
        let year = match selection(year) {
            Some(raw) => Some(raw.parse::<i32>().map_err(|_| {
                DashboardError::Validation(format!("year must be an integer, got '{}'", raw))
            })?),
            None => None,
        };

        Ok(Self {
            country: selection(country).map(str::to_string),
            year,
            attack_type: selection(attack_type).map(str::to_string),
            industry: selection(industry).map(str::to_string),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.country.is_none()
            && self.year.is_none()
            && self.attack_type.is_none()
            && self.industry.is_none()
    }

    /// Case-sensitive equality on every present field.
    pub fn matches(&self, record: &IncidentRecord) -> bool {
        self.country.as_ref().is_none_or(|c| *c == record.country)
            && self.year.is_none_or(|y| y == record.year)
            && self
                .attack_type
                .as_ref()
                .is_none_or(|a| *a == record.attack_type)
            && self
                .industry
                .as_ref()
                .is_none_or(|i| *i == record.target_industry)
    }

    /// Applies one `key=value` assignment, as typed into the chat prompt.
    pub fn assign(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            DashboardError::Validation(format!("expected key=value, got '{}'", assignment))
        })?;
        let value = value.trim();

        match key.trim() {
            "country" => self.country = selection(Some(value)).map(str::to_string),
            "year" => {
                self.year = Self::from_selections(None, Some(value), None, None)?.year;
            }
            "attack_type" | "attackType" | "type" => {
                self.attack_type = selection(Some(value)).map(str::to_string)
            }
            "industry" => self.industry = selection(Some(value)).map(str::to_string),
            other => {
                return Err(DashboardError::Validation(format!(
                    "unknown filter '{}' (use country, year, attack_type or industry)",
                    other
                )));
            }
        }

        Ok(())
    }

    /// Builds fresh criteria from a line such as
    /// `country=United States attack_type=SQL Injection`. A value runs until
    /// the next `key=`, so it may contain spaces. An empty line clears every
    /// criterion.
    pub fn parse_assignments(line: &str) -> Result<Self> {
        let line = line.trim();
        let mut criteria = Self::default();
        if line.is_empty() {
            return Ok(criteria);
        }

        let starts: Vec<usize> = ASSIGNMENT_KEY.find_iter(line).map(|m| m.start()).collect();
        if starts.first() != Some(&0) {
            let stray = &line[..starts.first().copied().unwrap_or(line.len())];
            return Err(DashboardError::Validation(format!(
                "expected key=value, got '{}'",
                stray.trim()
            )));
        }

        for (i, &start) in starts.iter().enumerate() {
            let end = starts.get(i + 1).copied().unwrap_or(line.len());
            criteria.assign(&line[start..end])?;
        }

        Ok(criteria)
    }

    pub fn describe(&self) -> String {
        if self.is_empty() {
            return "no filters".to_string();
        }

        let mut parts = Vec::new();
        if let Some(country) = &self.country {
            parts.push(format!("country={}", country));
        }
        if let Some(year) = self.year {
            parts.push(format!("year={}", year));
        }
        if let Some(attack_type) = &self.attack_type {
            parts.push(format!("attack_type={}", attack_type));
        }
        if let Some(industry) = &self.industry {
            parts.push(format!("industry={}", industry));
        }
        parts.join(", ")
    }
}

fn selection(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty() && *v != ALL)
}
