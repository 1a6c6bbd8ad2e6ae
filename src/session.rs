// file: src/session.rs
// description: single owner of the record set, filters, transcript and model client
// reference: application state coordination

use crate::analysis::{DashboardCharts, DashboardMetrics};
use crate::error::{DashboardError, Result};
use crate::filter::{self, FilterOptions};
use crate::inference::OllamaClient;
use crate::models::{AssistantReply, ChatMessage, FilterCriteria, IncidentRecord};
use crate::parser::{DatasetLoader, LoadedDataset, ParseReport};
use tracing::{info, warn};

/// Dashboard state. The full set is replaced only by a load; the filtered view
/// is recomputed in full whenever the criteria change.
pub struct DashboardSession {
    records: Vec<IncidentRecord>,
    filtered: Vec<IncidentRecord>,
    criteria: FilterCriteria,
    transcript: Vec<ChatMessage>,
    assistant: OllamaClient,
    source: Option<SourceInfo>,
}

#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub location: String,
    pub digest: String,
    pub report: ParseReport,
}

impl DashboardSession {
    pub fn new(assistant: OllamaClient) -> Self {
        Self {
            records: Vec::new(),
            filtered: Vec::new(),
            criteria: FilterCriteria::default(),
            transcript: Vec::new(),
            assistant,
            source: None,
        }
    }

    pub fn with_records(assistant: OllamaClient, records: Vec<IncidentRecord>) -> Self {
        let mut session = Self::new(assistant);
        session.install(records);
        session
    }

    /// On failure the working set is left empty and the error is returned once.
    pub async fn load(&mut self, loader: &DatasetLoader, location: &str) -> Result<usize> {
        match loader.load(location).await {
            Ok(dataset) => Ok(self.install_dataset(dataset)),
            Err(e) => {
                warn!("Failed to load data: {}", e);
                self.install(Vec::new());
                self.source = None;
                Err(e)
            }
        }
    }

    pub fn install_dataset(&mut self, dataset: LoadedDataset) -> usize {
        let LoadedDataset {
            location,
            digest,
            records,
            report,
        } = dataset;

        self.source = Some(SourceInfo {
            location,
            digest,
            report,
        });
        self.install(records);
        self.records.len()
    }

    fn install(&mut self, records: Vec<IncidentRecord>) {
        self.records = records;
        self.filtered = filter::apply(&self.records, &self.criteria);
    }

    pub fn records(&self) -> &[IncidentRecord] {
        &self.records
    }

    pub fn filtered(&self) -> &[IncidentRecord] {
        &self.filtered
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn source(&self) -> Option<&SourceInfo> {
        self.source.as_ref()
    }

    /// Replaces the criteria wholesale.
    pub fn set_filters(&mut self, criteria: FilterCriteria) -> usize {
        self.criteria = criteria;
        self.filtered = filter::apply(&self.records, &self.criteria);
        info!(
            "Filters ({}) matched {} of {} records",
            self.criteria.describe(),
            self.filtered.len(),
            self.records.len()
        );
        self.filtered.len()
    }

    pub fn reset_filters(&mut self) -> usize {
        self.set_filters(FilterCriteria::default())
    }

    pub fn filter_options(&self) -> FilterOptions {
        FilterOptions::from_records(&self.records)
    }

    pub fn metrics(&self) -> DashboardMetrics {
        DashboardMetrics::from_records(&self.filtered)
    }

    pub fn charts(&self) -> DashboardCharts {
        DashboardCharts::from_records(&self.filtered)
    }

    pub fn endpoint(&self) -> &str {
        self.assistant.endpoint()
    }

    pub fn set_endpoint(&mut self, endpoint: &str) {
        self.assistant.set_endpoint(endpoint);
        info!("Inference endpoint set to {}", self.assistant.endpoint());
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Sends one question about the filtered view. `&mut self` keeps at most
    /// one question in flight; a failed question stays in the transcript
    /// without an answer.
    pub async fn ask(&mut self, question: &str) -> Result<AssistantReply> {
        let question = question.trim();
        if question.is_empty() {
            return Err(DashboardError::Validation("question is empty".to_string()));
        }

        self.transcript.push(ChatMessage::user(question));

        let reply = self.assistant.ask(question, &self.filtered).await?;
        self.transcript.push(ChatMessage::assistant(&reply));
        Ok(reply)
    }
}
