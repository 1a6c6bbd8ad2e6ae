// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{DashboardError, Result};
use crate::inference::{DEFAULT_ENDPOINT, DEFAULT_MODEL, MAX_SAMPLE_RECORDS};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub data: DataConfig,
    pub inference: InferenceConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// File path or http(s) URL of the pipe-delimited table.
    pub source: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InferenceConfig {
    pub endpoint: String,
    pub model: String,
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    pub output_dir: PathBuf,
}

fn default_sample_size() -> usize {
    MAX_SAMPLE_RECORDS
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("THREAT_DASHBOARD")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| DashboardError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| DashboardError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            data: DataConfig {
                source: "data/cyber-threats.md".to_string(),
            },
            inference: InferenceConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                model: DEFAULT_MODEL.to_string(),
                sample_size: MAX_SAMPLE_RECORDS,
            },
            export: ExportConfig {
                output_dir: PathBuf::from("./exports"),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_source(&self.data.source)
            .map_err(|e| DashboardError::Config(e.to_string()))?;
        Validator::validate_url(&self.inference.endpoint)
            .map_err(|e| DashboardError::Config(e.to_string()))?;
        Validator::validate_sample_size(self.inference.sample_size)
            .map_err(|e| DashboardError::Config(e.to_string()))?;

        if self.inference.model.trim().is_empty() {
            return Err(DashboardError::Config(
                "inference.model must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
