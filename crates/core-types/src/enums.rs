use serde::{Deserialize, Serialize};
use std::fmt;

/// The visual shape a dataset will be rendered as.
///
/// Each shape selects the analysis strategy whose metrics make sense for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartShape {
    /// Single-series, sorted, top-N style results (horizontal bars).
    Ranking,
    /// A small set of peer categories (vertical bars).
    DirectComparison,
    /// Multi-group categorical comparisons (grouped or stacked bars).
    GroupedComparison,
    /// Ordered time series (lines).
    Temporal,
}

impl ChartShape {
    /// Every shape, in registration order.
    pub const ALL: [ChartShape; 4] = [
        ChartShape::Ranking,
        ChartShape::DirectComparison,
        ChartShape::GroupedComparison,
        ChartShape::Temporal,
    ];

    /// Recognized chart tags and the shape each resolves to.
    pub const TAGS: [(&'static str, ChartShape); 9] = [
        ("horizontal_bar", ChartShape::Ranking),
        ("ranking", ChartShape::Ranking),
        ("vertical_bar", ChartShape::DirectComparison),
        ("direct_comparison", ChartShape::DirectComparison),
        ("grouped_vertical_bar", ChartShape::GroupedComparison),
        ("stacked_bar", ChartShape::GroupedComparison),
        ("grouped_comparison", ChartShape::GroupedComparison),
        ("line", ChartShape::Temporal),
        ("temporal", ChartShape::Temporal),
    ];

    /// Resolves a chart tag to its shape.
    ///
    /// Matching ignores case, surrounding whitespace, and treats `-` as `_`.
    /// Returns `None` for tags without a known shape.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_ascii_lowercase().replace('-', "_");
        Self::TAGS
            .iter()
            .find(|(known, _)| *known == normalized)
            .map(|(_, shape)| *shape)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartShape::Ranking => "ranking",
            ChartShape::DirectComparison => "direct_comparison",
            ChartShape::GroupedComparison => "grouped_comparison",
            ChartShape::Temporal => "temporal",
        }
    }
}

impl fmt::Display for ChartShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a time series, comparing its last value to its first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Increasing,
    Decreasing,
    Flat,
}

impl Trend {
    pub fn between(first: f64, last: f64) -> Self {
        if last > first {
            Trend::Increasing
        } else if last < first {
            Trend::Decreasing
        } else {
            Trend::Flat
        }
    }

    /// The label emitted in the metrics report.
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Increasing => "crescente",
            Trend::Decreasing => "decrescente",
            Trend::Flat => "estável",
        }
    }
}

/// Pace of the second half of a series relative to the first half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemporalBehavior {
    Acceleration,
    Deceleration,
    SteadyPace,
}

impl TemporalBehavior {
    /// Percentage change between half means beyond which the pace counts as changed.
    pub const THRESHOLD_PCT: f64 = 10.0;

    pub fn classify(acceleration_pct: f64) -> Self {
        if acceleration_pct > Self::THRESHOLD_PCT {
            TemporalBehavior::Acceleration
        } else if acceleration_pct < -Self::THRESHOLD_PCT {
            TemporalBehavior::Deceleration
        } else {
            TemporalBehavior::SteadyPace
        }
    }

    /// The label emitted in the metrics report.
    pub fn label(&self) -> &'static str {
        match self {
            TemporalBehavior::Acceleration => "aceleração no segundo período",
            TemporalBehavior::Deceleration => "desaceleração no segundo período",
            TemporalBehavior::SteadyPace => "ritmo constante",
        }
    }
}
