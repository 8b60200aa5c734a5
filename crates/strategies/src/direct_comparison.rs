use crate::util::{by_value_descending, values};
use crate::Analyzer;
use core_types::keys;
use core_types::numeric::{percent, round_to, sum};
use core_types::{MetricsBuilder, MetricsReport, Observation};

/// Contrasts a small set of peer categories (typically 2 to 5).
///
/// Shares are taken over the compared set itself, so the population total is
/// ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectComparisonAnalyzer;

impl DirectComparisonAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for DirectComparisonAnalyzer {
    fn name(&self) -> &'static str {
        "direct_comparison"
    }

    fn analyze(&self, observations: &[Observation], _population_total: Option<f64>) -> MetricsReport {
        let mut metrics = MetricsBuilder::new();

        let ranked = by_value_descending(observations);
        let (Some(largest), Some(smallest)) = (ranked.first(), ranked.last()) else {
            return metrics.build();
        };

        metrics
            .text(keys::LARGEST_LABEL, largest.label.to_string())
            .text(keys::SMALLEST_LABEL, smallest.label.to_string())
            .number(keys::LARGEST_VALUE, largest.value)
            .number(keys::SMALLEST_VALUE, smallest.value);

        if smallest.value > 0.0 {
            metrics.rounded_opt(
                keys::DIFF_PCT,
                percent(largest.value - smallest.value, smallest.value),
                1,
            );
        }

        let total = sum(&values(&ranked));
        let shares = percent(largest.value, total).zip(percent(smallest.value, total));
        let Some((largest_share, smallest_share)) = shares else {
            tracing::debug!("DirectComparison: compared set sums to zero, shares omitted");
            return metrics.build();
        };

        metrics
            .rounded(keys::DIFF_POINTS, largest_share - smallest_share, 1)
            .rounded(keys::LARGEST_SHARE_PCT, largest_share, 1)
            .rounded(keys::SMALLEST_SHARE_PCT, smallest_share, 1);

        if ranked.len() == 2 {
            if let (Some(a), Some(b)) = (round_to(largest_share, 0), round_to(smallest_share, 0)) {
                metrics.text(keys::PROPORTION, format!("{}% vs {}%", a as i64, b as i64));
            }
        }

        metrics.build()
    }
}
