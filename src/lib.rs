//! Structural template extraction for reference test specs.
//!
//! Given the source text of a known-good spec file, the analyzer splits it
//! into named, brace-delimited step blocks, classifies each block into a
//! closed category set, and groups the blocks into precondition /
//! test-step / validation buckets so a downstream generator can clone a
//! proven structure instead of assembling test code from raw data.

pub mod analyzer;
pub mod cache;
pub mod registry;
pub mod templates;

pub use cache::SpecAnalyzer;
pub use registry::{default_registry, ReferenceRegistry};
