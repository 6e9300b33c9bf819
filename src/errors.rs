use thiserror::Error;

/// Failures raised by the quote engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("installment count must be between 1 and {max}, got {requested}")]
    InvalidInstallmentCount { requested: i64, max: u32 },
}

/// Failures raised while exporting a projection.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// User-facing error wrapper for the terminal surface.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Quote(#[from] QuoteError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    Input(String),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Report(ReportError::Io(err))
    }
}
