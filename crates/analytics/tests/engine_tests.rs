use analytics::{AnalysisRequest, AnalyticsEngine, AnalyticsError};
use approx::assert_relative_eq;
use chrono::NaiveDate;
use core_types::{keys, CoreError, Dataset, MetricValue, Row};

fn pairs(values: &[f64]) -> Dataset {
    Dataset::from_pairs(
        "categoria",
        "vendas",
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("C{}", i + 1), *v)),
    )
}

fn monthly(values: &[f64]) -> Dataset {
    Dataset::from_pairs(
        "data",
        "vendas",
        values.iter().enumerate().map(|(i, v)| {
            let date = NaiveDate::from_ymd_opt(2024, i as u32 + 1, 1).unwrap();
            (date, *v)
        }),
    )
}

// ============================================================================
// Ranking
// ============================================================================

#[test]
fn test_ranking_concentration_against_population() {
    let engine = AnalyticsEngine::new();
    let report = engine
        .calculate(&pairs(&[100.0, 70.0, 40.0]), "categoria", "vendas", "horizontal_bar", Some(500.0))
        .unwrap();

    assert_relative_eq!(report.number(keys::TOP3_SHARE_PCT).unwrap(), 42.0);
    assert_relative_eq!(report.number(keys::UNIVERSE_TOTAL).unwrap(), 500.0);
    assert_relative_eq!(report.number(keys::TOP_N_TOTAL).unwrap(), 210.0);
    // Baseline stays over the dataset itself.
    assert_relative_eq!(report.number(keys::SUM).unwrap(), 210.0);
}

#[test]
fn test_ranking_gap() {
    let report = AnalyticsEngine::new()
        .calculate(&pairs(&[100.0, 70.0]), "categoria", "vendas", "ranking", None)
        .unwrap();

    assert_relative_eq!(report.number(keys::GAP_1_2).unwrap(), 30.0);
    assert_relative_eq!(report.number(keys::GAP_1_2_PCT).unwrap(), 42.9);
}

// ============================================================================
// Comparisons
// ============================================================================

#[test]
fn test_direct_comparison_two_rows() {
    let report = AnalyticsEngine::new()
        .calculate(&pairs(&[100.0, 60.0]), "categoria", "vendas", "vertical_bar", None)
        .unwrap();

    assert_relative_eq!(report.number(keys::DIFF_PCT).unwrap(), 66.7);
    assert_eq!(report.text(keys::PROPORTION), Some("63% vs 38%"));
}

#[test]
fn test_grouped_tags_use_comparison_metrics() {
    let engine = AnalyticsEngine::new();
    let dataset = pairs(&[120.0, 80.0, 95.0]);

    let grouped = engine
        .calculate(&dataset, "categoria", "vendas", "grouped_vertical_bar", None)
        .unwrap();
    let stacked = engine.calculate(&dataset, "categoria", "vendas", "stacked_bar", None).unwrap();

    assert_eq!(grouped.text(keys::LARGEST_LABEL), Some("C1"));
    assert_eq!(grouped.text(keys::SMALLEST_LABEL), Some("C2"));
    assert!(stacked.contains(keys::DIFF_POINTS));
}

// ============================================================================
// Temporal
// ============================================================================

#[test]
fn test_temporal_flat_series() {
    let report = AnalyticsEngine::new()
        .calculate(&monthly(&[50.0, 50.0]), "data", "vendas", "line", None)
        .unwrap();

    assert_eq!(report.text(keys::TREND), Some("estável"));
}

#[test]
fn test_temporal_zero_start_has_no_growth() {
    let report = AnalyticsEngine::new()
        .calculate(&monthly(&[0.0, 10.0, 20.0]), "data", "vendas", "line", None)
        .unwrap();

    assert!(!report.contains(keys::GROWTH_PCT));
    assert_eq!(report.text(keys::TREND), Some("crescente"));
}

#[test]
fn test_temporal_acceleration() {
    let report = AnalyticsEngine::new()
        .calculate(
            &monthly(&[100.0, 105.0, 110.0, 130.0, 140.0, 150.0]),
            "data",
            "vendas",
            "line",
            None,
        )
        .unwrap();

    assert_eq!(
        report.text(keys::TEMPORAL_BEHAVIOR),
        Some("aceleração no segundo período")
    );
    assert_eq!(report.text(keys::PEAK_PERIOD), Some("2024-06-01"));
    assert_eq!(report.text(keys::TROUGH_PERIOD), Some("2024-01-01"));
}

#[test]
fn test_temporal_sorts_dates_not_rows() {
    let rows = vec![
        Row::new().with("data", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()).with("vendas", 30.0),
        Row::new().with("data", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()).with("vendas", 10.0),
        Row::new().with("data", NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()).with("vendas", 20.0),
    ];
    let dataset = Dataset::new(rows.clone());
    let report = AnalyticsEngine::new()
        .calculate(&dataset, "data", "vendas", "line", None)
        .unwrap();

    assert_relative_eq!(report.number(keys::FIRST_VALUE).unwrap(), 10.0);
    assert_relative_eq!(report.number(keys::LAST_VALUE).unwrap(), 30.0);
    assert_relative_eq!(report.number(keys::GROWTH_PCT).unwrap(), 200.0);
    // The caller's rows are untouched.
    assert_eq!(dataset.rows(), rows.as_slice());
}

// ============================================================================
// Dispatch and preconditions
// ============================================================================

#[test]
fn test_unknown_tag_returns_baseline_only() {
    let report = AnalyticsEngine::new()
        .calculate(&pairs(&[3.0, 2.0, 1.0]), "categoria", "vendas", "scatter", None)
        .unwrap();

    let mut present: Vec<&str> = report.keys().collect();
    let mut expected = vec![keys::CHART_TYPE, keys::ROW_COUNT, keys::SUM, keys::MEAN, keys::MEDIAN];
    present.sort_unstable();
    expected.sort_unstable();
    assert_eq!(present, expected);
}

#[test]
fn test_missing_and_non_numeric_columns() {
    let engine = AnalyticsEngine::new();
    let dataset = pairs(&[1.0, 2.0]);

    assert_eq!(
        engine.calculate(&dataset, "categoria", "receita", "line", None),
        Err(AnalyticsError::InvalidDataset(CoreError::MissingColumn {
            row: 0,
            column: "receita".into()
        }))
    );
    assert_eq!(
        engine.calculate(&dataset, "categoria", "categoria", "line", None),
        Err(AnalyticsError::InvalidDataset(CoreError::NonNumericValue {
            row: 0,
            column: "categoria".into()
        }))
    );
}

#[test]
fn test_single_row_never_fails() {
    let engine = AnalyticsEngine::new();
    for tag in ["horizontal_bar", "vertical_bar", "stacked_bar", "line"] {
        let report = engine
            .calculate(&pairs(&[42.0]), "categoria", "vendas", tag, Some(100.0))
            .unwrap();

        assert!(!report.contains(keys::GAP_1_2));
        assert!(!report.contains(keys::PROPORTION));
        assert!(!report.contains(keys::VOLATILITY));
        assert!(!report.contains(keys::MEAN_VARIATION_PCT));
    }
}

#[test]
fn test_idempotent() {
    let engine = AnalyticsEngine::new();
    let dataset = pairs(&[9.0, 3.0, 7.0, 1.0, 5.0, 8.0]);
    for tag in ["horizontal_bar", "vertical_bar", "line"] {
        let first = engine.calculate(&dataset, "categoria", "vendas", tag, Some(60.0)).unwrap();
        let second = engine.calculate(&dataset, "categoria", "vendas", tag, Some(60.0)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_mean_within_bounds_and_no_non_finite_values() {
    let engine = AnalyticsEngine::new();
    let cases: [&[f64]; 5] = [
        &[5.0],
        &[0.0, 0.0, 0.0],
        &[10.0, 0.0, 5.0, 0.0, 2.0, 1.0],
        &[-3.0, 4.0, 0.0, 7.5],
        &[1e9, 1.0, 250.0, 250.0, 3.0, 999.0, 12.0],
    ];

    for values in cases {
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        for tag in ["horizontal_bar", "vertical_bar", "grouped_vertical_bar", "line"] {
            let report = engine
                .calculate(&pairs(values), "categoria", "vendas", tag, None)
                .unwrap();

            let mean = report.number(keys::MEAN).unwrap();
            let median = report.number(keys::MEDIAN).unwrap();
            assert!(min <= mean && mean <= max);
            assert!(min <= median && median <= max);

            for (key, value) in report.iter() {
                if let MetricValue::Number(n) = value {
                    assert!(n.is_finite(), "{} is not finite for {:?}", key, values);
                }
            }
        }
    }
}

#[test]
fn test_overflowing_totals_omit_dependent_metrics() {
    let engine = AnalyticsEngine::new();
    let dataset = pairs(&[1e308, 1e308, 1e308]);
    let report = engine
        .calculate(&dataset, "categoria", "vendas", "horizontal_bar", None)
        .unwrap();

    // The sum is outside f64 range, so it and every share divided by it are left out.
    assert!(!report.contains(keys::SUM));
    assert!(!report.contains(keys::TOP_N_TOTAL));
    assert!(!report.contains(keys::UNIVERSE_TOTAL));
    assert!(!report.contains(keys::TOP3_SHARE_PCT));
    assert!(!report.contains(keys::LEADER_CONTRIBUTION_PCT));

    assert_relative_eq!(report.number(keys::MEAN).unwrap(), 1e308);
    assert_relative_eq!(report.number(keys::MEDIAN).unwrap(), 1e308);
    assert_relative_eq!(report.number(keys::LEADER_MULTIPLE).unwrap(), 1.0);

    let comparison = engine
        .calculate(&pairs(&[f64::MAX, f64::MAX]), "categoria", "vendas", "vertical_bar", None)
        .unwrap();
    assert_relative_eq!(comparison.number(keys::MEAN).unwrap(), f64::MAX);
    for (key, value) in comparison.iter() {
        if let MetricValue::Number(n) = value {
            assert!(n.is_finite(), "{} is not finite", key);
        }
    }
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = AnalyticsEngine::new();
    let shared = &engine;
    let datasets: Vec<Dataset> = (1..=4).map(|n| pairs(&[n as f64 * 10.0, 5.0, 1.0])).collect();

    let reports: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = datasets
            .iter()
            .map(|d| scope.spawn(move || shared.calculate(d, "categoria", "vendas", "horizontal_bar", None)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect()
    });

    for (n, report) in reports.iter().enumerate() {
        assert_relative_eq!(report.number(keys::MAX_VALUE).unwrap(), (n + 1) as f64 * 10.0);
    }
}

#[test]
fn test_request_from_json_payload() {
    let payload = r#"{
        "dataset": [
            {"uf": "SC", "vendas": 100},
            {"uf": "RS", "vendas": 70},
            {"uf": "PR", "vendas": 40}
        ],
        "label_column": "uf",
        "value_column": "vendas",
        "chart_tag": "horizontal_bar",
        "population_total": 500
    }"#;
    let request: AnalysisRequest = serde_json::from_str(payload).unwrap();

    let dataset = Dataset::from_pairs("uf", "vendas", [("SC", 100.0), ("RS", 70.0), ("PR", 40.0)]);
    let built = AnalysisRequest::new(dataset, "uf", "vendas", "horizontal_bar").with_population_total(500.0);
    assert_eq!(request, built);

    let report = AnalyticsEngine::new().run(&request).unwrap();

    assert_eq!(report.labels(keys::TOP_LABELS).unwrap(), ["SC", "RS", "PR"]);
    assert_relative_eq!(report.number(keys::TOP3_SHARE_PCT).unwrap(), 42.0);
    assert_relative_eq!(report.number(keys::LEADER_CONTRIBUTION_PCT).unwrap(), 20.0);
}
