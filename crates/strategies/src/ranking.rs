use crate::util::{by_value_descending, values};
use crate::Analyzer;
use core_types::keys;
use core_types::numeric::{mean, percent, sum};
use core_types::{MetricsBuilder, MetricsReport, Observation};

/// Leadership and concentration metrics for top-N style results.
///
/// The observations may be only the first N rows of a larger filtered
/// population. Concentration and contribution metrics therefore divide by the
/// population total when the caller supplies one; the sum of the observations
/// is only a fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingAnalyzer;

impl RankingAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for RankingAnalyzer {
    fn name(&self) -> &'static str {
        "ranking"
    }

    fn analyze(&self, observations: &[Observation], population_total: Option<f64>) -> MetricsReport {
        let mut metrics = MetricsBuilder::new();

        let ranked = by_value_descending(observations);
        let (Some(leader), Some(last)) = (ranked.first(), ranked.last()) else {
            return metrics.build();
        };
        let ranked_values = values(&ranked);

        // --- 1. Denominator ---
        let top_n_total = sum(&ranked_values);
        let total = population_total.unwrap_or(top_n_total);
        tracing::debug!(
            "Ranking: {} rows, top-N total {}, universe total {} ({})",
            ranked.len(),
            top_n_total,
            total,
            if population_total.is_some() { "population" } else { "sample fallback" }
        );

        let max = leader.value;
        let min = last.value;

        metrics
            .labels(
                keys::TOP_LABELS,
                ranked.iter().take(3).map(|o| o.label.to_string()).collect(),
            )
            .number(keys::MAX_VALUE, max)
            .number(keys::MIN_VALUE, min)
            .text(keys::MAX_LABEL, leader.label.to_string())
            .text(keys::MIN_LABEL, last.label.to_string())
            .number(keys::TOP_N_TOTAL, top_n_total)
            .number(keys::UNIVERSE_TOTAL, total);

        // --- 2. Concentration ---
        if ranked_values.len() >= 3 {
            let top3 = sum(&ranked_values[..3]);
            metrics.rounded_opt(keys::TOP3_SHARE_PCT, percent(top3, total), 1);
        }
        if ranked_values.len() >= 5 {
            let top5 = sum(&ranked_values[..5]);
            metrics.rounded_opt(keys::TOP5_SHARE_PCT, percent(top5, total), 1);
        }

        // --- 3. Leader vs runner-up ---
        if let Some(&runner_up) = ranked_values.get(1) {
            let gap = max - runner_up;
            metrics
                .number(keys::GAP_1_2, gap)
                .rounded_opt(keys::GAP_1_2_PCT, percent(gap, runner_up), 1);

            if runner_up > 0.0 {
                metrics.rounded(keys::LEADER_MULTIPLE, max / runner_up, 2);
            }
        }

        // --- 4. Spread ---
        let range = max - min;
        metrics.number(keys::RANGE, range);
        if min > 0.0 {
            metrics.rounded_opt(keys::RELATIVE_RANGE_PCT, percent(range, min), 1);
        }

        let deviation = mean(&ranked_values).and_then(|avg| percent(max - avg, avg));
        metrics.rounded_opt(keys::LEADER_DEVIATION_PCT, deviation, 1);

        if total > 0.0 {
            metrics.rounded_opt(keys::LEADER_CONTRIBUTION_PCT, percent(max, total), 1);
        }

        metrics.build()
    }
}
