//! # Analytics Engine
//!
//! This crate turns a raw tabular query result into a set of derived metrics
//! (concentration, gaps, multiples, trend, growth, volatility) keyed to the chart
//! shape the result will be rendered as.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O, no configuration. It depends only on `core-types`
//!   and `strategies`.
//! - **Stateless Calculation:** `AnalyticsEngine` reads its inputs and returns a
//!   fresh `MetricsReport`. Calls share nothing and may run in parallel.
//! - **Registry Dispatch:** Baseline statistics are always computed; the
//!   shape-specific metrics come from the `Analyzer` registered for the shape.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: Baseline statistics and analyzer dispatch.
//! - `AnalysisRequest`: A bundled set of engine inputs.
//! - `AnalyticsError`: Precondition violations returned by the engine.

pub mod engine;
pub mod error;
pub mod request;

pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use request::AnalysisRequest;
