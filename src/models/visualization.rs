// file: src/models/visualization.rs
// description: chart payloads decoded from assistant responses
// reference: https://serde.rs/enum-representations.html

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Table,
    Bar,
    Line,
    Pie,
    Radar,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Table => "table",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Radar => "radar",
        }
    }
}

/// A single `{label, value}` point handed to the chart renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    #[serde(alias = "name")]
    pub label: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub data: Vec<LabeledValue>,
}

/// Chart requested by the assistant, tagged by its `"type"` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Visualization {
    Table(ChartPayload),
    Bar(ChartPayload),
    Line(ChartPayload),
    Pie(ChartPayload),
    Radar(ChartPayload),
}

impl Visualization {
    pub fn kind(&self) -> ChartKind {
        match self {
            Visualization::Table(_) => ChartKind::Table,
            Visualization::Bar(_) => ChartKind::Bar,
            Visualization::Line(_) => ChartKind::Line,
            Visualization::Pie(_) => ChartKind::Pie,
            Visualization::Radar(_) => ChartKind::Radar,
        }
    }

    pub fn payload(&self) -> &ChartPayload {
        match self {
            Visualization::Table(p)
            | Visualization::Bar(p)
            | Visualization::Line(p)
            | Visualization::Pie(p)
            | Visualization::Radar(p) => p,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.payload().title.as_deref()
    }

    pub fn data(&self) -> &[LabeledValue] {
        &self.payload().data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_tagged_payload() {
        let json = r#"{"type":"pie","title":"Share","data":[{"label":"a","value":2},{"name":"b","value":3.5}]}"#;
        let viz: Visualization = serde_json::from_str(json).unwrap();

        assert_eq!(viz.kind(), ChartKind::Pie);
        assert_eq!(viz.title(), Some("Share"));
        assert_eq!(
            viz.data(),
            &[LabeledValue::new("a", 2.0), LabeledValue::new("b", 3.5)]
        );
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let json = r#"{"type":"scatter","data":[]}"#;
        assert!(serde_json::from_str::<Visualization>(json).is_err());
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let json = r#"{"type":"bar","data":[{"label":"a","value":"lots"}]}"#;
        assert!(serde_json::from_str::<Visualization>(json).is_err());
    }
}
