//! In-memory university catalog: search, comparison, and CSV ingestion.

mod catalog;
mod compare;

pub mod domain;
pub mod import;
pub mod seed;

pub use catalog::{CatalogError, UniversityCatalog};
pub use compare::{ComparisonEntry, ComparisonView};
pub use domain::{
    Funding, InstructionLanguage, SearchFilter, SortKey, University, UniversityId,
};
pub use import::{load_catalog, ImportError};
