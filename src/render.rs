// file: src/render.rs
// description: terminal rendering of metric cards, charts and assistant replies

use crate::analysis::{DashboardCharts, DashboardMetrics};
use crate::filter::FilterOptions;
use crate::models::{AssistantReply, ChatMessage, LabeledValue, Role, Visualization};
use crate::utils::Validator;
use crate::utils::format::{hours, millions, thousands};
use colored::*;

const BAR_WIDTH: usize = 40;
const LABEL_WIDTH: usize = 22;

pub fn metrics(metrics: &DashboardMetrics) -> String {
    let cards = [
        (
            "Total Incidents",
            thousands(metrics.total_incidents as u64),
            "Recorded cyber attacks",
        ),
        (
            "Financial Impact",
            millions(metrics.total_financial_loss),
            "Total losses",
        ),
        (
            "Users Affected",
            thousands(metrics.total_affected_users),
            "Across all incidents",
        ),
        (
            "Avg Resolution",
            hours(metrics.average_resolution_time),
            "Time to resolve",
        ),
    ];

    cards
        .iter()
        .map(|(title, value, description)| {
            format!(
                "{:<18} {:>16}  {}",
                title.bold(),
                value.cyan().bold(),
                description.dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn charts(charts: &DashboardCharts) -> String {
    [
        chart("Attack Trends Over Time", &charts.yearly_series()),
        chart("Attack Types Distribution", &charts.attack_type_series()),
        chart("Top Countries by Attacks", &charts.country_series()),
        chart("Industries Under Attack", &charts.industry_series()),
    ]
    .join("\n\n")
}

/// Horizontal bars scaled to the largest value.
pub fn chart(title: &str, series: &[LabeledValue]) -> String {
    let mut out = format!("{}\n", title.bold().underline());
    if series.is_empty() {
        out.push_str(&"  (no data)".dimmed().to_string());
        return out;
    }

    let max = series.iter().map(|p| p.value).fold(0.0_f64, f64::max);
    for point in series {
        let width = if max > 0.0 {
            ((point.value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "  {:<LABEL_WIDTH$} {} {}\n",
            truncate_label(&point.label),
            "█".repeat(width).green(),
            trim_number(point.value)
        ));
    }
    out.trim_end().to_string()
}

pub fn options(options: &FilterOptions) -> String {
    let years: Vec<String> = options.years.iter().map(i32::to_string).collect();
    [
        ("Countries", options.countries.join(", ")),
        ("Years", years.join(", ")),
        ("Attack Types", options.attack_types.join(", ")),
        ("Industries", options.industries.join(", ")),
    ]
    .iter()
    .map(|(label, values)| format!("{:<14} {}", label.bold(), values))
    .collect::<Vec<_>>()
    .join("\n")
}

pub fn reply(reply: &AssistantReply) -> String {
    let mut out = format!("{}\n{}", "AI Assistant".bold().magenta(), reply.text);
    if let Some(visualization) = &reply.visualization {
        out.push_str("\n\n");
        out.push_str(&self::visualization(visualization));
    }
    out
}

pub fn visualization(visualization: &Visualization) -> String {
    let title = format!(
        "{} [{}]",
        visualization.title().unwrap_or("Chart"),
        visualization.kind().as_str()
    );
    chart(&title, visualization.data())
}

pub fn transcript(messages: &[ChatMessage]) -> String {
    if messages.is_empty() {
        return "No questions asked yet.".dimmed().to_string();
    }

    messages
        .iter()
        .map(|message| {
            let speaker = match message.role {
                Role::User => "You".bold().blue(),
                Role::Assistant => "AI Assistant".bold().magenta(),
            };
            format!(
                "{} {}\n{}",
                speaker,
                message.created_at.format("%H:%M:%S").to_string().dimmed(),
                message.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn truncate_label(label: &str) -> String {
    Validator::truncate_text(label, LABEL_WIDTH)
}

fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChartPayload;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_chart_scales_to_largest_value() {
        plain();
        let rendered = chart(
            "Top",
            &[LabeledValue::new("USA", 4.0), LabeledValue::new("UK", 2.0)],
        );
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Top");
        assert_eq!(lines[1].matches('█').count(), BAR_WIDTH);
        assert_eq!(lines[2].matches('█').count(), BAR_WIDTH / 2);
        assert!(lines[2].ends_with(" 2"));
    }

    #[test]
    fn test_empty_chart() {
        plain();
        assert!(chart("Empty", &[]).contains("(no data)"));
    }

    #[test]
    fn test_metric_cards() {
        plain();
        let rendered = metrics(&DashboardMetrics {
            total_incidents: 2,
            total_financial_loss: 4.0,
            total_affected_users: 1500,
            average_resolution_time: 16.0,
        });

        assert!(rendered.contains("$4.00M"));
        assert!(rendered.contains("1,500"));
        assert!(rendered.contains("16.0h"));
    }

    #[test]
    fn test_reply_with_visualization() {
        plain();
        let rendered = reply(&AssistantReply {
            text: "Phishing dominates.".to_string(),
            visualization: Some(Visualization::Radar(ChartPayload {
                title: Some("Vectors".to_string()),
                data: vec![LabeledValue::new("Phishing", 3.5)],
            })),
        });

        assert!(rendered.contains("Phishing dominates."));
        assert!(rendered.contains("Vectors [radar]"));
        assert!(rendered.contains("3.50"));
    }

    #[test]
    fn test_long_labels_truncated() {
        assert_eq!(truncate_label("Short"), "Short");
        assert_eq!(
            truncate_label("An extremely long industry label").chars().count(),
            LABEL_WIDTH
        );
    }
}
