// file: src/exporter/mod.rs
// description: dashboard export module exports
// reference: internal module structure

pub mod json;

pub use json::{DashboardSnapshot, JsonExporter};
