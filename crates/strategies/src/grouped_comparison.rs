use crate::direct_comparison::DirectComparisonAnalyzer;
use crate::Analyzer;
use core_types::{MetricsReport, Observation};

/// Metrics for grouped or stacked bar charts.
///
/// Currently a direct comparison over the group labels. The per-category split
/// inside each group is not visible here, so within-group structure is lost.
/// A group x category cross-tabulation would replace this analyzer without
/// touching the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedComparisonAnalyzer {
    inner: DirectComparisonAnalyzer,
}

impl GroupedComparisonAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Analyzer for GroupedComparisonAnalyzer {
    fn name(&self) -> &'static str {
        "grouped_comparison"
    }

    fn analyze(&self, observations: &[Observation], population_total: Option<f64>) -> MetricsReport {
        tracing::trace!("GroupedComparison: delegating to direct comparison over group labels");
        self.inner.analyze(observations, population_total)
    }
}
