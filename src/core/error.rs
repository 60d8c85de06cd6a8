use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("Invalid learner id {0}: learner ids must be positive")]
    InvalidIdentifier(i64),

    #[error("Learner {0} not found")]
    NotFound(i64),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Lock error: {0}")]
    LockError(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl RouterError {
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }
}

pub type Result<T> = std::result::Result<T, RouterError>;

impl<T> From<std::sync::PoisonError<T>> for RouterError {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Self::LockError(err.to_string())
    }
}

impl From<std::io::Error> for RouterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RouterError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
