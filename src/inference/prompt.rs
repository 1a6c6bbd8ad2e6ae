// file: src/inference/prompt.rs
// description: prompt construction for data questions sent to the local model

use crate::error::Result;
use crate::models::IncidentRecord;
use std::collections::HashSet;

/// Hard cap on records embedded in a single prompt.
pub const MAX_SAMPLE_RECORDS: usize = 50;

const RESPONSE_LAYOUT: &str = "Respond using exactly this layout:\n\
## Summary\n\
<two or three sentences answering the question>\n\
## Key Findings\n\
- <finding backed by numbers from the data>\n\
## Recommendations\n\
- <defensive recommendation>\n\
\n\
If a chart helps, finish with one JSON object on its own line and nothing after it:\n\
{\"type\": \"bar|line|pie|radar|table\", \"title\": \"<chart title>\", \"data\": [{\"label\": \"<category>\", \"value\": <number>}]}\n\
Values must be plain numbers. Do not wrap the JSON in prose.";

pub struct PromptBuilder {
    sample_size: usize,
}

impl PromptBuilder {
    pub fn new(sample_size: usize) -> Self {
        Self {
            sample_size: sample_size.clamp(1, MAX_SAMPLE_RECORDS),
        }
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn build(&self, question: &str, records: &[IncidentRecord]) -> Result<String> {
        let sample = &records[..records.len().min(self.sample_size)];
        let sample_json = serde_json::to_string(sample)?;

        Ok(format!(
            "You are a cyber threat intelligence analyst.\n\n\
{context}\n\n\
Sample records ({shown} of {total}, JSON):\n{sample_json}\n\n\
User question: {question}\n\n\
Provide a detailed analysis based on the cyber threat data.\n{RESPONSE_LAYOUT}",
            context = dataset_context(records),
            shown = sample.len(),
            total = records.len(),
            question = question.trim(),
        ))
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new(MAX_SAMPLE_RECORDS)
    }
}

/// One-paragraph overview of the whole working set.
pub fn dataset_context(records: &[IncidentRecord]) -> String {
    format!(
        "Dataset context: This dataset contains {} cyber security incidents across countries like {}. \
Attack types include {}. Industries affected: {}.",
        records.len(),
        distinct(records.iter().map(|r| r.country.as_str())),
        distinct(records.iter().map(|r| r.attack_type.as_str())),
        distinct(records.iter().map(|r| r.target_industry.as_str())),
    )
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> String {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IncidentBuilder;

    fn record(country: &str, attack: &str) -> IncidentRecord {
        IncidentBuilder::new()
            .country(country)
            .year(2021)
            .attack_type(attack)
            .target_industry("Healthcare")
            .financial_loss(2.0)
            .affected_users(20)
            .attack_source("Insider")
            .security_vulnerability("Weak Passwords")
            .defense_mechanism("Encryption")
            .resolution_time(6.0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_sample_is_bounded() {
        let records: Vec<_> = (0..120).map(|i| record(&format!("C{}", i), "Malware")).collect();
        let prompt = PromptBuilder::default().build("Which country?", &records).unwrap();

        assert!(prompt.contains("Sample records (50 of 120, JSON)"));
        assert!(prompt.contains("\"country\":\"C49\""));
        assert!(!prompt.contains("\"country\":\"C50\""));
    }

    #[test]
    fn test_sample_size_clamped() {
        assert_eq!(PromptBuilder::new(500).sample_size(), MAX_SAMPLE_RECORDS);
        assert_eq!(PromptBuilder::new(0).sample_size(), 1);
    }

    #[test]
    fn test_prompt_carries_question_and_layout() {
        let records = vec![record("USA", "Phishing"), record("UK", "Phishing")];
        let prompt = PromptBuilder::new(10)
            .build("  What is the most common attack?  ", &records)
            .unwrap();

        assert!(prompt.contains("User question: What is the most common attack?\n"));
        assert!(prompt.contains("## Key Findings"));
        assert!(prompt.contains("\"type\""));
        assert!(prompt.contains("\"data\""));
    }

    #[test]
    fn test_context_lists_distinct_values_in_first_seen_order() {
        let records = vec![
            record("USA", "Phishing"),
            record("UK", "DDoS"),
            record("USA", "Phishing"),
        ];
        let context = dataset_context(&records);

        assert!(context.contains("contains 3 cyber security incidents"));
        assert!(context.contains("countries like USA, UK."));
        assert!(context.contains("Attack types include Phishing, DDoS."));
    }

    #[test]
    fn test_empty_working_set() {
        let prompt = PromptBuilder::default().build("Anything?", &[]).unwrap();
        assert!(prompt.contains("Sample records (0 of 0, JSON):\n[]"));
    }
}
