use core_types::Dataset;
use serde::{Deserialize, Serialize};

/// Everything the engine needs for one analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// The tabular result to analyze.
    pub dataset: Dataset,
    /// Column holding the category or date of each row.
    pub label_column: String,
    /// Column holding the numeric value of each row.
    pub value_column: String,
    /// The chart tag the result will be rendered as (e.g. `horizontal_bar`, `line`).
    pub chart_tag: String,
    /// Sum of the value column over the whole filtered universe, when the dataset is
    /// only its top N rows.
    #[serde(default)]
    pub population_total: Option<f64>,
}

impl AnalysisRequest {
    pub fn new(
        dataset: Dataset,
        label_column: impl Into<String>,
        value_column: impl Into<String>,
        chart_tag: impl Into<String>,
    ) -> Self {
        Self {
            dataset,
            label_column: label_column.into(),
            value_column: value_column.into(),
            chart_tag: chart_tag.into(),
            population_total: None,
        }
    }

    pub fn with_population_total(mut self, total: f64) -> Self {
        self.population_total = Some(total);
        self
    }
}
