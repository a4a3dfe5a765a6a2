use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtdError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Record { line: u64, message: String },
    #[error("line {line}: single-name record rejected by operator")]
    ConfirmationDeclined { line: u64 },
    #[error("doi collision: {doi}")]
    DoiCollision { doi: String },
}

impl EtdError {
    /// Line-tagged record error, the fatal outcome of any field rule.
    pub fn record(line: u64, message: impl Into<String>) -> Self {
        Self::Record {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtdError>;
