use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("type mismatch: expected '{expected}', found '{found}'")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

pub type ObResult<T> = Result<T, ObError>;
