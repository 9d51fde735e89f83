//! Core data model and cents-safe consolidation.
//!
//! This module provides the record/document types shared by every feature
//! and the consolidator that folds them into a per-competence summary.

mod consolidate;
mod error;
mod types;

pub use consolidate::*;
pub use error::*;
pub use types::*;
