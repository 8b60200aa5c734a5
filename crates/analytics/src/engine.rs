use crate::error::AnalyticsError;
use crate::request::AnalysisRequest;
use core_types::keys;
use core_types::numeric::{mean, median, sum};
use core_types::{ChartShape, Dataset, MetricsBuilder, MetricsReport, Observation};
use strategies::AnalyzerRegistry;

/// A stateless calculator for deriving metrics from a tabular query result.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {
    registry: AnalyzerRegistry,
}

impl AnalyticsEngine {
    /// Creates an engine with the built-in analyzer for every chart shape.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine that dispatches through a custom registry.
    pub fn with_registry(registry: AnalyzerRegistry) -> Self {
        Self { registry }
    }

    /// The main entry point for calculating metrics.
    ///
    /// # Arguments
    ///
    /// * `dataset` - The query result. It is read, never modified.
    /// * `label_column` - Column holding each row's category or date.
    /// * `value_column` - Column holding each row's numeric value.
    /// * `chart_tag` - The chart the result will be rendered as. Selects the analyzer.
    /// * `population_total` - The true total of the filtered universe, if known.
    ///
    /// # Returns
    ///
    /// Baseline statistics merged with the metrics of the analyzer registered
    /// for the chart shape. Unknown tags yield baseline statistics only. An
    /// `AnalyticsError` is returned only when the inputs violate a precondition.
    pub fn calculate(
        &self,
        dataset: &Dataset,
        label_column: &str,
        value_column: &str,
        chart_tag: &str,
        population_total: Option<f64>,
    ) -> Result<MetricsReport, AnalyticsError> {
        // --- 1. Validation ---
        if let Some(total) = population_total {
            if !total.is_finite() || total < 0.0 {
                return Err(AnalyticsError::InvalidPopulationTotal(total));
            }
        }
        let observations = dataset.observations(label_column, value_column)?;

        // --- 2. Baseline ---
        let mut report = Self::baseline(chart_tag, &observations);

        // --- 3. Shape-specific metrics ---
        let Some(shape) = ChartShape::from_tag(chart_tag) else {
            tracing::debug!("Unknown chart tag '{}'; returning baseline statistics only", chart_tag);
            return Ok(report);
        };
        match self.registry.get(shape) {
            Some(analyzer) => {
                tracing::debug!(
                    "Dispatching {} rows tagged '{}' to the {} analyzer",
                    observations.len(),
                    chart_tag,
                    analyzer.name()
                );
                report.merge(analyzer.analyze(&observations, population_total));
            }
            None => {
                tracing::debug!("No analyzer registered for shape {}", shape);
            }
        }

        Ok(report)
    }

    /// Runs `calculate` for a bundled request.
    pub fn run(&self, request: &AnalysisRequest) -> Result<MetricsReport, AnalyticsError> {
        self.calculate(
            &request.dataset,
            &request.label_column,
            &request.value_column,
            &request.chart_tag,
            request.population_total,
        )
    }

    /// Shape-independent statistics: row count, sum, mean and median, plus the chart tag.
    fn baseline(chart_tag: &str, observations: &[Observation]) -> MetricsReport {
        let values: Vec<f64> = observations.iter().map(|o| o.value).collect();

        let mut metrics = MetricsBuilder::new();
        metrics
            .text(keys::CHART_TYPE, chart_tag)
            .count(keys::ROW_COUNT, values.len())
            .number(keys::SUM, sum(&values))
            .number_opt(keys::MEAN, mean(&values))
            .number_opt(keys::MEDIAN, median(&values));
        metrics.build()
    }
}
