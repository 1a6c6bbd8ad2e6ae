// file: src/utils/validation.rs
// description: data validation utilities and helpers
// reference: input validation patterns

use crate::error::{DashboardError, Result};
use crate::inference::MAX_SAMPLE_RECORDS;

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"))
            .ok_or_else(|| DashboardError::Validation(format!("Invalid URL format: {}", url)))?;

        if rest.trim_matches('/').is_empty() {
            return Err(DashboardError::Validation(format!(
                "URL has no host: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_source(location: &str) -> Result<()> {
        if location.trim().is_empty() {
            return Err(DashboardError::Validation(
                "Data source must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_sample_size(size: usize) -> Result<()> {
        if size == 0 {
            return Err(DashboardError::Validation(
                "Sample size must be greater than 0".to_string(),
            ));
        }

        if size > MAX_SAMPLE_RECORDS {
            return Err(DashboardError::Validation(format!(
                "Sample size too large (max {})",
                MAX_SAMPLE_RECORDS
            )));
        }

        Ok(())
    }

    /// Shortens `text` to at most `max_chars` characters, marking the cut
    /// with a trailing ellipsis that counts toward the width.
    pub fn truncate_text(text: &str, max_chars: usize) -> String {
        if max_chars == 0 {
            return String::new();
        }
        if text.chars().count() <= max_chars {
            return text.to_string();
        }

        let mut cut: String = text.chars().take(max_chars - 1).collect();
        cut.push('…');
        cut
    }
}
