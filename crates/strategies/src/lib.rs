//! # Analysis Strategies
//!
//! This crate contains the chart-shape specific metric logic. It defines a
//! universal `Analyzer` trait and provides one implementation per `ChartShape`.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** Analyzers have no knowledge of I/O, configuration, or how the
//!   observations were extracted. They depend only on `core-types`.
//! - **Shape Agnostic Engine:** The `analytics` engine dispatches through the
//!   `AnalyzerRegistry` without knowing any analyzer's internals.
//! - **Extensibility:** Adding an analysis means implementing `Analyzer` and
//!   registering it for a `ChartShape`.
//!
//! ## Public API
//!
//! - `Analyzer`: The trait all strategies implement.
//! - `AnalyzerRegistry` / `create_analyzer`: Map a `ChartShape` to its strategy.
//! - The concrete analyzers (e.g., `RankingAnalyzer`).

pub mod direct_comparison;
pub mod factory;
pub mod grouped_comparison;
pub mod ranking;
pub mod temporal;
mod util;

pub use direct_comparison::DirectComparisonAnalyzer;
pub use factory::{create_analyzer, AnalyzerRegistry};
pub use grouped_comparison::GroupedComparisonAnalyzer;
pub use ranking::RankingAnalyzer;
pub use temporal::TemporalAnalyzer;

pub use core_types::ChartShape;

use core_types::{MetricsReport, Observation};

/// The core trait that all analysis strategies implement.
///
/// Analyzers are stateless: `analyze` takes `&self`, never mutates its input, and
/// returns a fresh report. The `Send + Sync` bounds let one registry serve
/// concurrent callers.
pub trait Analyzer: Send + Sync {
    /// A short name used in logs.
    fn name(&self) -> &'static str;

    /// Computes the shape-specific metrics for a set of observations.
    ///
    /// # Arguments
    ///
    /// * `observations` - The label/value pairs in their original row order.
    /// * `population_total` - The true total of the filtered universe, when known.
    ///   Strategies that measure concentration must divide by it instead of the
    ///   sum of `observations`.
    ///
    /// # Returns
    ///
    /// A report holding only the metrics that are defined for the input. An
    /// empty slice yields an empty report.
    fn analyze(&self, observations: &[Observation], population_total: Option<f64>) -> MetricsReport;
}
