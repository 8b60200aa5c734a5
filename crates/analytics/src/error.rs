use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalyticsError {
    #[error("Invalid dataset: {0}")]
    InvalidDataset(#[from] CoreError),

    #[error("Population total must be a finite, non-negative number, got {0}")]
    InvalidPopulationTotal(f64),
}
