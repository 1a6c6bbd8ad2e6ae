// file: src/inference/mod.rs
// description: bridge to the local text-generation service
// reference: internal module structure

pub mod client;
pub mod prompt;
pub mod response;

pub use client::{DEFAULT_ENDPOINT, DEFAULT_MODEL, OllamaClient};
pub use prompt::{MAX_SAMPLE_RECORDS, PromptBuilder, dataset_context};
pub use response::parse_reply;
