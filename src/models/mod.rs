// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod chat;
pub mod filter;
pub mod incident;
pub mod visualization;

pub use chat::{AssistantReply, ChatMessage, Role};
pub use filter::FilterCriteria;
pub use incident::{COLUMN_COUNT, IncidentBuilder, IncidentRecord};
pub use visualization::{ChartKind, ChartPayload, LabeledValue, Visualization};
