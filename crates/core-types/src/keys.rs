//! Metric names emitted in a `MetricsReport`.
//!
//! Downstream template assembly reads these keys verbatim, so they are part of
//! the output contract.

// --- Baseline ---
pub const CHART_TYPE: &str = "tipo_grafico";
pub const ROW_COUNT: &str = "num_categorias";
pub const SUM: &str = "total_geral";
pub const MEAN: &str = "media";
pub const MEDIAN: &str = "mediana";

// --- Ranking ---
pub const TOP_LABELS: &str = "top_categorias";
pub const MAX_VALUE: &str = "valor_max";
pub const MIN_VALUE: &str = "valor_min";
pub const MAX_LABEL: &str = "categoria_max";
pub const MIN_LABEL: &str = "categoria_min";
pub const TOP_N_TOTAL: &str = "total_topn";
pub const UNIVERSE_TOTAL: &str = "total_universo";
pub const TOP3_SHARE_PCT: &str = "concentracao_top3_pct";
pub const TOP5_SHARE_PCT: &str = "concentracao_top5_pct";
pub const GAP_1_2: &str = "gap_1_2";
pub const GAP_1_2_PCT: &str = "gap_1_2_pct";
pub const RANGE: &str = "diferenca_max_min";
pub const RELATIVE_RANGE_PCT: &str = "amplitude_relativa";
pub const LEADER_DEVIATION_PCT: &str = "desvio_lider_media_pct";
pub const LEADER_MULTIPLE: &str = "multiplo_1_vs_2";
pub const LEADER_CONTRIBUTION_PCT: &str = "contribuicao_lider_pct";

// --- Direct comparison ---
pub const LARGEST_LABEL: &str = "categoria_maior";
pub const SMALLEST_LABEL: &str = "categoria_menor";
pub const LARGEST_VALUE: &str = "valor_maior";
pub const SMALLEST_VALUE: &str = "valor_menor";
pub const DIFF_PCT: &str = "diferenca_pct";
pub const DIFF_POINTS: &str = "diferenca_pontos_percentuais";
pub const LARGEST_SHARE_PCT: &str = "contribuicao_maior_pct";
pub const SMALLEST_SHARE_PCT: &str = "contribuicao_menor_pct";
pub const PROPORTION: &str = "proporcao_relativa";

// --- Temporal ---
pub const PERIOD_COUNT: &str = "num_periodos";
pub const FIRST_VALUE: &str = "valor_inicial";
pub const LAST_VALUE: &str = "valor_final";
pub const TREND: &str = "tendencia";
pub const GROWTH_PCT: &str = "taxa_crescimento_pct";
pub const PEAK_VALUE: &str = "pico_valor";
pub const PEAK_PERIOD: &str = "pico_periodo";
pub const TROUGH_VALUE: &str = "vale_valor";
pub const TROUGH_PERIOD: &str = "vale_periodo";
pub const AMPLITUDE: &str = "amplitude";
pub const AMPLITUDE_PCT: &str = "amplitude_pct";
pub const MEAN_VARIATION_PCT: &str = "variacao_media_pct";
pub const VOLATILITY: &str = "volatilidade";
pub const ACCELERATION_PCT: &str = "aceleracao_segunda_metade_pct";
pub const TEMPORAL_BEHAVIOR: &str = "comportamento_temporal";
