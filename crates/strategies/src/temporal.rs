use crate::util::{by_label_ascending, values};
use crate::Analyzer;
use core_types::keys;
use core_types::numeric::{mean, percent, ratio, sample_std_dev};
use core_types::{MetricsBuilder, MetricsReport, Observation, TemporalBehavior, Trend};

/// Trend, growth, extremes and pace metrics for an ordered time series.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemporalAnalyzer;

impl TemporalAnalyzer {
    /// Minimum number of periods before the half-over-half comparison is made.
    pub const MIN_PERIODS_FOR_ACCELERATION: usize = 6;

    pub fn new() -> Self {
        Self
    }

    /// Relative changes between consecutive periods.
    ///
    /// A change whose previous value is zero is undefined and skipped.
    fn period_changes(series: &[f64]) -> Vec<f64> {
        series
            .windows(2)
            .filter_map(|w| ratio(w[1] - w[0], w[0]))
            .collect()
    }

    /// Index of the first maximum and the first minimum.
    fn extremes(series: &[f64]) -> (usize, usize) {
        let mut peak = 0;
        let mut trough = 0;
        for (i, value) in series.iter().enumerate() {
            if *value > series[peak] {
                peak = i;
            }
            if *value < series[trough] {
                trough = i;
            }
        }
        (peak, trough)
    }
}

impl Analyzer for TemporalAnalyzer {
    fn name(&self) -> &'static str {
        "temporal"
    }

    fn analyze(&self, observations: &[Observation], _population_total: Option<f64>) -> MetricsReport {
        let mut metrics = MetricsBuilder::new();

        let ordered = by_label_ascending(observations);
        let series = values(&ordered);
        let (Some(&first), Some(&last)) = (series.first(), series.last()) else {
            return metrics.build();
        };

        // --- 1. Endpoints and trend ---
        metrics
            .count(keys::PERIOD_COUNT, series.len())
            .number(keys::FIRST_VALUE, first)
            .number(keys::LAST_VALUE, last)
            .text(keys::TREND, Trend::between(first, last).label());

        if first > 0.0 {
            metrics.rounded_opt(keys::GROWTH_PCT, percent(last - first, first), 1);
        }

        // --- 2. Peak and trough ---
        let (peak_idx, trough_idx) = Self::extremes(&series);
        let peak = series[peak_idx];
        let trough = series[trough_idx];
        let amplitude = peak - trough;

        metrics
            .number(keys::PEAK_VALUE, peak)
            .text(keys::PEAK_PERIOD, ordered[peak_idx].label.to_string())
            .number(keys::TROUGH_VALUE, trough)
            .text(keys::TROUGH_PERIOD, ordered[trough_idx].label.to_string())
            .number(keys::AMPLITUDE, amplitude);

        if trough > 0.0 {
            metrics.rounded_opt(keys::AMPLITUDE_PCT, percent(amplitude, trough), 1);
        }

        // --- 3. Period-over-period variation ---
        let changes = Self::period_changes(&series);
        tracing::trace!("Temporal: {} periods, {} defined changes", series.len(), changes.len());
        if let Some(avg) = mean(&changes) {
            metrics.rounded(keys::MEAN_VARIATION_PCT, avg * 100.0, 1);
        }
        if let Some(std_dev) = sample_std_dev(&changes) {
            metrics.rounded(keys::VOLATILITY, std_dev * 100.0, 1);
        }

        // --- 4. Second half vs first half ---
        if series.len() >= Self::MIN_PERIODS_FOR_ACCELERATION {
            let (first_half, second_half) = series.split_at(series.len() / 2);
            if let (Some(mean1), Some(mean2)) = (mean(first_half), mean(second_half)) {
                if mean1 > 0.0 {
                    if let Some(acceleration) = percent(mean2 - mean1, mean1) {
                        metrics
                            .rounded(keys::ACCELERATION_PCT, acceleration, 1)
                            .text(
                                keys::TEMPORAL_BEHAVIOR,
                                TemporalBehavior::classify(acceleration).label(),
                            );
                    }
                }
            }
        }

        metrics.build()
    }
}
