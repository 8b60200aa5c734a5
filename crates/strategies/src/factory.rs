use crate::direct_comparison::DirectComparisonAnalyzer;
use crate::grouped_comparison::GroupedComparisonAnalyzer;
use crate::ranking::RankingAnalyzer;
use crate::temporal::TemporalAnalyzer;
use crate::Analyzer;
use core_types::ChartShape;
use std::collections::HashMap;

/// Creates the built-in analyzer for a chart shape.
pub fn create_analyzer(shape: ChartShape) -> Box<dyn Analyzer> {
    // A complete match: adding a `ChartShape` variant without an analyzer is a compile error.
    match shape {
        ChartShape::Ranking => Box::new(RankingAnalyzer::new()),
        ChartShape::DirectComparison => Box::new(DirectComparisonAnalyzer::new()),
        ChartShape::GroupedComparison => Box::new(GroupedComparisonAnalyzer::new()),
        ChartShape::Temporal => Box::new(TemporalAnalyzer::new()),
    }
}

/// Maps each chart shape to the strategy that analyzes it.
///
/// Shapes without a registered analyzer are valid; the engine then reports
/// baseline statistics only.
pub struct AnalyzerRegistry {
    analyzers: HashMap<ChartShape, Box<dyn Analyzer>>,
}

impl AnalyzerRegistry {
    /// A registry with no analyzers.
    pub fn empty() -> Self {
        Self {
            analyzers: HashMap::new(),
        }
    }

    /// A registry with the built-in analyzer for every shape.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        for shape in ChartShape::ALL {
            registry.register(shape, create_analyzer(shape));
        }
        registry
    }

    /// Registers `analyzer` for `shape`, returning the analyzer it replaces, if any.
    pub fn register(
        &mut self,
        shape: ChartShape,
        analyzer: Box<dyn Analyzer>,
    ) -> Option<Box<dyn Analyzer>> {
        self.analyzers.insert(shape, analyzer)
    }

    pub fn get(&self, shape: ChartShape) -> Option<&dyn Analyzer> {
        self.analyzers.get(&shape).map(|a| a.as_ref())
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries: Vec<(ChartShape, &'static str)> = self
            .analyzers
            .iter()
            .map(|(shape, analyzer)| (*shape, analyzer.name()))
            .collect();
        entries.sort_by_key(|(shape, _)| shape.as_str());
        f.debug_map().entries(entries).finish()
    }
}
