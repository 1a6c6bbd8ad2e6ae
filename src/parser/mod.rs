// file: src/parser/mod.rs
// description: dataset loading and table parsing module exports
// reference: internal module structure

pub mod loader;
pub mod table;

pub use loader::{DatasetLoader, LoadedDataset};
pub use table::{ParseReport, ParsedTable, TableParser};
