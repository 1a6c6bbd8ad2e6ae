// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod analysis;
pub mod config;
pub mod error;
pub mod exporter;
pub mod filter;
pub mod inference;
pub mod models;
pub mod parser;
pub mod render;
pub mod session;
pub mod utils;

pub use analysis::{DashboardCharts, DashboardMetrics};
pub use config::{Config, DataConfig, ExportConfig, InferenceConfig};
pub use error::{DashboardError, Result};
pub use exporter::{DashboardSnapshot, JsonExporter};
pub use filter::FilterOptions;
pub use inference::{OllamaClient, PromptBuilder};
pub use models::{
    AssistantReply, ChartKind, ChatMessage, FilterCriteria, IncidentRecord, LabeledValue,
    Visualization,
};
pub use parser::{DatasetLoader, LoadedDataset, ParseReport, TableParser};
pub use session::DashboardSession;
pub use utils::Validator;
