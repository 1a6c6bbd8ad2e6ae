// file: src/exporter/json.rs
// description: json snapshot export of the current dashboard view

use crate::analysis::{DashboardCharts, DashboardMetrics};
use crate::error::Result;
use crate::models::FilterCriteria;
use crate::session::DashboardSession;
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub exported_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_sha256: Option<String>,
    pub total_records: usize,
    pub filters: FilterCriteria,
    pub metrics: DashboardMetrics,
    pub charts: DashboardCharts,
}

impl DashboardSnapshot {
    pub fn capture(session: &DashboardSession) -> Self {
        Self {
            exported_at: Utc::now().to_rfc3339(),
            source: session.source().map(|s| s.location.clone()),
            source_sha256: session.source().map(|s| s.digest.clone()),
            total_records: session.records().len(),
            filters: session.criteria().clone(),
            metrics: session.metrics(),
            charts: session.charts(),
        }
    }
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    /// Writes `dashboard-<timestamp>.json` and returns its path.
    pub fn export(&self, session: &DashboardSession, pretty: bool) -> Result<PathBuf> {
        let snapshot = DashboardSnapshot::capture(session);
        let body = if pretty {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };

        let file_name = format!("dashboard-{}.json", Utc::now().format("%Y%m%dT%H%M%S%3f"));
        let path = self.output_dir.join(file_name);
        fs::write(&path, body)?;

        info!(
            "Exported snapshot of {} filtered records to {}",
            snapshot.metrics.total_incidents,
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::OllamaClient;
    use crate::models::IncidentBuilder;
    use tempfile::tempdir;

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("nested"));
        assert!(exporter.is_ok());
    }

    #[test]
    fn test_export_writes_filtered_snapshot() {
        let records = vec![
            IncidentBuilder::new()
                .country("USA")
                .year(2022)
                .attack_type("Phishing")
                .target_industry("Finance")
                .financial_loss(1.5)
                .affected_users(1000)
                .attack_source("Hacker Group")
                .security_vulnerability("Social Engineering")
                .defense_mechanism("Firewall")
                .resolution_time(12.0)
                .build()
                .unwrap(),
        ];
        let mut session = DashboardSession::with_records(OllamaClient::default(), records);
        session.set_filters(FilterCriteria {
            country: Some("USA".to_string()),
            ..FilterCriteria::default()
        });

        let dir = tempdir().unwrap();
        let path = JsonExporter::new(dir.path())
            .unwrap()
            .export(&session, true)
            .unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(json["totalRecords"], 1);
        assert_eq!(json["filters"]["country"], "USA");
        assert_eq!(json["metrics"]["totalAffectedUsers"], 1000);
        assert_eq!(json["charts"]["yearlyTrend"][0]["year"], 2022);
        assert!(json.get("source").is_none());
    }
}
