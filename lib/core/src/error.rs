use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset is empty")]
    EmptyDataset,

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Cannot project to {requested} components: only {available} available")]
    ProjectionTooLarge { requested: usize, available: usize },

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Stage not fitted: {0}")]
    NotFitted(&'static str),

    #[error("Malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("Bundle error: {0}")]
    Bundle(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
