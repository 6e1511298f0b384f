#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required input (snapshot file or asset directory) is missing or unreadable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Fewer eligible records than the selection size.
    #[error("Not enough eligible records: required {required}, available {available}")]
    InsufficientData { required: usize, available: usize },
}

pub type CoreResult<T> = Result<T, CoreError>;
