// file: src/parser/loader.rs
// description: loads the threat table from a local file or an http(s) url
// reference: https://docs.rs/reqwest

use crate::error::{DashboardError, Result};
use crate::models::IncidentRecord;
use crate::parser::table::{ParseReport, TableParser};
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub location: String,
    pub digest: String,
    pub records: Vec<IncidentRecord>,
    pub report: ParseReport,
}

pub struct DatasetLoader {
    client: reqwest::Client,
    parser: TableParser,
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            parser: TableParser::new(),
        }
    }

    /// Reads and parses the whole source. Unreadable or blank sources fail
    /// with a single `Load` error and no records.
    pub async fn load(&self, location: &str) -> Result<LoadedDataset> {
        let content = if is_remote(location) {
            self.fetch(location).await?
        } else {
            tokio::fs::read_to_string(Path::new(location))
                .await
                .map_err(|e| DashboardError::load(location, e.to_string()))?
        };

        if content.trim().is_empty() {
            return Err(DashboardError::load(location, "source is empty"));
        }

        let parsed = self.parser.parse_with_report(&content);
        if parsed.report.skipped() > 0 {
            warn!(
                "Skipped {} malformed rows in {}",
                parsed.report.skipped(),
                location
            );
        }
        info!("Loaded {} cyber threat records", parsed.records.len());

        Ok(LoadedDataset {
            location: location.to_string(),
            digest: format!("{:x}", Sha256::digest(content.as_bytes())),
            records: parsed.records,
            report: parsed.report,
        })
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DashboardError::load(url, e.to_string()))?;

        if !response.status().is_success() {
            return Err(DashboardError::load(
                url,
                format!("server responded with status {}", response.status()),
            ));
        }

        response
            .text()
            .await
            .map_err(|e| DashboardError::load(url, e.to_string()))
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}
