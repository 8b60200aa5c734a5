use crate::numeric::round_to;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single derived metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Count(usize),
    Number(f64),
    Text(String),
    Labels(Vec<String>),
}

impl MetricValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetricValue::Number(value) => Some(*value),
            MetricValue::Count(count) => Some(*count as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetricValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_labels(&self) -> Option<&[String]> {
        match self {
            MetricValue::Labels(labels) => Some(labels),
            _ => None,
        }
    }
}

/// The flat metric-name to value mapping produced by one analysis.
///
/// A key is present only when its metric is defined for the input; consumers
/// must read an absent key as "not applicable", never as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsReport {
    metrics: BTreeMap<String, MetricValue>,
}

impl MetricsReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&MetricValue> {
        self.metrics.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.metrics.contains_key(key)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(MetricValue::as_number)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(MetricValue::as_text)
    }

    pub fn labels(&self, key: &str) -> Option<&[String]> {
        self.get(key).and_then(MetricValue::as_labels)
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricValue)> {
        self.metrics.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Merges `other` into this report. Keys from `other` win on collision.
    pub fn merge(&mut self, other: MetricsReport) {
        self.metrics.extend(other.metrics);
    }
}

/// Collects metrics, inserting a key only once its value is known to be defined.
///
/// Numeric setters silently drop NaN and infinities, and the `*_opt` setters
/// drop `None`, so an undefined denominator never surfaces as a key.
#[derive(Debug, Default)]
pub struct MetricsBuilder {
    metrics: BTreeMap<String, MetricValue>,
}

impl MetricsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(&mut self, key: &str, value: f64) -> &mut Self {
        if value.is_finite() {
            self.metrics.insert(key.to_string(), MetricValue::Number(value));
        } else {
            tracing::trace!(metric = key, "Dropping non-finite metric value");
        }
        self
    }

    pub fn number_opt(&mut self, key: &str, value: Option<f64>) -> &mut Self {
        match value {
            Some(value) => self.number(key, value),
            None => {
                tracing::trace!(metric = key, "Metric undefined for this input; omitted");
                self
            }
        }
    }

    /// Inserts `value` rounded to `decimals` places.
    pub fn rounded(&mut self, key: &str, value: f64, decimals: u32) -> &mut Self {
        self.number_opt(key, round_to(value, decimals))
    }

    pub fn rounded_opt(&mut self, key: &str, value: Option<f64>, decimals: u32) -> &mut Self {
        self.number_opt(key, value.and_then(|v| round_to(v, decimals)))
    }

    pub fn count(&mut self, key: &str, count: usize) -> &mut Self {
        self.metrics.insert(key.to_string(), MetricValue::Count(count));
        self
    }

    pub fn text(&mut self, key: &str, text: impl Into<String>) -> &mut Self {
        self.metrics.insert(key.to_string(), MetricValue::Text(text.into()));
        self
    }

    pub fn labels(&mut self, key: &str, labels: Vec<String>) -> &mut Self {
        self.metrics.insert(key.to_string(), MetricValue::Labels(labels));
        self
    }

    pub fn build(self) -> MetricsReport {
        MetricsReport {
            metrics: self.metrics,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn builder_omits_undefined_values() {
        let mut builder = MetricsBuilder::new();
        builder
            .number("finite", 1.5)
            .number("nan", f64::NAN)
            .number("inf", f64::INFINITY)
            .number_opt("none", None)
            .rounded_opt("ratio", Some(2.0 / 3.0), 2)
            .rounded("rounded_nan", f64::NAN, 1);
        let report = builder.build();

        assert_eq!(report.number("finite"), Some(1.5));
        assert_relative_eq!(report.number("ratio").unwrap(), 0.67);
        assert!(!report.contains("nan"));
        assert!(!report.contains("inf"));
        assert!(!report.contains("none"));
        assert!(!report.contains("rounded_nan"));
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn report_serializes_as_flat_object() {
        let mut builder = MetricsBuilder::new();
        builder
            .count("rows", 3)
            .number("total", 210.0)
            .text("trend", "crescente")
            .labels("top", vec!["A".into(), "B".into()]);
        let json = serde_json::to_value(builder.build()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "rows": 3,
                "total": 210.0,
                "trend": "crescente",
                "top": ["A", "B"]
            })
        );
    }

    #[test]
    fn report_round_trips_through_json() {
        let mut builder = MetricsBuilder::new();
        builder.count("rows", 2).number("mean", 85.0).text("label", "SC");
        let report = builder.build();

        let json = serde_json::to_string(&report).unwrap();
        let parsed: MetricsReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn merge_overwrites_colliding_keys() {
        let mut base = MetricsBuilder::new();
        base.number("a", 1.0).number("b", 2.0);
        let mut extra = MetricsBuilder::new();
        extra.number("b", 3.0).number("c", 4.0);

        let mut report = base.build();
        report.merge(extra.build());

        assert_eq!(report.number("a"), Some(1.0));
        assert_eq!(report.number("b"), Some(3.0));
        assert_eq!(report.number("c"), Some(4.0));
    }
}
