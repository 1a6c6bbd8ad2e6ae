// file: src/analysis/mod.rs
// description: aggregation module exports
// reference: internal module structure

pub mod aggregator;
pub mod metrics;

pub use aggregator::{
    CategoryShare, CountryRank, DashboardCharts, IndustryRank, TOP_COUNTRIES, YearlyTrend,
    attack_type_distribution, country_ranking, industry_ranking, yearly_trend,
};
pub use metrics::DashboardMetrics;
