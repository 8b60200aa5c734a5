//! # Core Types
//!
//! Shared vocabulary of the derived-metrics workspace: the tabular input
//! (`Dataset`, `Row`, `Cell`), the chart shapes that select an analysis, and the
//! `MetricsReport` every analysis produces.
//!
//! This crate has no knowledge of how metrics are computed or dispatched.

pub mod enums;
pub mod error;
pub mod keys;
pub mod numeric;
pub mod report;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{ChartShape, TemporalBehavior, Trend};
pub use error::CoreError;
pub use report::{MetricValue, MetricsBuilder, MetricsReport};
pub use structs::{Cell, Dataset, Observation, Row};
