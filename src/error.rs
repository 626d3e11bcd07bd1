use thiserror::Error;

#[derive(Debug, Error)]
pub enum LearnError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("no attribute yields a positive gain ratio")]
    NoValidSplit,

    #[error("undefined statistic: {0}")]
    UndefinedStatistic(String),

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = LearnError> = std::result::Result<T, E>;
