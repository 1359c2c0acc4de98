//! predstat common types and errors.
//!
//! This crate provides foundational types shared across the predstat crates:
//! - The unified error type and `Result` alias
//! - Metric identifiers used by configuration and reports
//! - Positive-class label rules
//! - Report schema versioning

pub mod error;
pub mod label;
pub mod metric;
pub mod schema;

pub use error::{Error, Result};
pub use label::PositiveLabel;
pub use metric::MetricKind;
pub use schema::SCHEMA_VERSION;
