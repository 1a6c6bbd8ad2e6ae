// file: src/inference/response.rs
// description: splits model output into display text and an optional chart
// reference: https://docs.rs/regex

use crate::models::{AssistantReply, Visualization};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    // Outermost object mentioning both keys in either order, spanning lines.
    pub static ref VISUALIZATION_JSON: Regex = Regex::new(
        r#"(?s)\{.*(?:"type".*"data"|"data".*"type").*\}"#
    ).expect("VISUALIZATION_JSON regex is valid");

    // Fence opener directly before the payload.
    static ref FENCE_OPEN: Regex = Regex::new(
        r"```[a-zA-Z]*\s*$"
    ).expect("FENCE_OPEN regex is valid");

    // Fence closer directly after the payload.
    static ref FENCE_CLOSE: Regex = Regex::new(
        r"^\s*```"
    ).expect("FENCE_CLOSE regex is valid");
}

/// Falls back to the full raw text whenever the payload is missing or does
/// not decode into a known chart.
pub fn parse_reply(raw: &str) -> AssistantReply {
    let Some(found) = VISUALIZATION_JSON.find(raw) else {
        return plain(raw);
    };

    match serde_json::from_str::<Visualization>(found.as_str()) {
        Ok(visualization) => {
            let text = cut_payload(&raw[..found.start()], &raw[found.end()..]);

            AssistantReply {
                text,
                visualization: Some(visualization),
            }
        }
        Err(e) => {
            debug!("Ignoring undecodable visualization payload: {}", e);
            plain(raw)
        }
    }
}

/// Joins the text around the payload, dropping the code fence that wrapped it
/// if there was one. Fences elsewhere in the reply are left alone.
fn cut_payload(before: &str, after: &str) -> String {
    let (before, after) = match (FENCE_OPEN.find(before), FENCE_CLOSE.find(after)) {
        (Some(open), Some(close)) => (&before[..open.start()], &after[close.end()..]),
        _ => (before, after),
    };

    let mut text = String::with_capacity(before.len() + after.len());
    text.push_str(before);
    text.push_str(after);
    text.trim().to_string()
}

fn plain(raw: &str) -> AssistantReply {
    AssistantReply {
        text: raw.to_string(),
        visualization: None,
    }
}
