use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Dataset is empty; at least one row is required")]
    EmptyDataset,

    #[error("Row {row} has no column '{column}'")]
    MissingColumn { row: usize, column: String },

    #[error("Row {row} has a non-numeric value in column '{column}'")]
    NonNumericValue { row: usize, column: String },
}
