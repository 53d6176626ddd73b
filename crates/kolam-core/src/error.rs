//! Error types for Kolam Analyzer

use thiserror::Error;

/// Main error type for Kolam Analyzer operations
#[derive(Error, Debug)]
pub enum KolamError {
    /// Backend answered with a non-success status code
    #[error("{operation} failed: {status_text}")]
    Http {
        /// Human-readable name of the request ("Upload", "Status check", ...)
        operation: &'static str,
        /// Numeric HTTP status
        status: u16,
        /// Canonical reason phrase for the status
        status_text: String,
    },

    /// Request never produced a response, or the body could not be decoded
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend accepted the request but reported `success: false`
    #[error("{0}")]
    UploadRejected(String),

    /// Upload succeeded without handing out an analysis identifier
    #[error("Upload response did not include an analysis identifier")]
    MissingAnalysisId,

    /// Backend reported the analysis as failed
    #[error("Analysis failed on server")]
    AnalysisFailed,

    /// Poll attempt ceiling reached while still processing
    #[error("Analysis timed out after {attempts} status checks")]
    TimedOut {
        /// Number of status checks issued
        attempts: u32,
    },

    /// Selected file is not an image
    #[error("Not an image file: {0}")]
    InvalidFileType(String),

    /// Operation needs an analysis identifier but none is known
    #[error("No analysis in progress")]
    NoAnalysis,

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// In-flight analysis was cancelled by reset or shutdown
    #[error("Analysis cancelled")]
    Cancelled,

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KolamError {
    /// Build an [`KolamError::Http`] from a response status.
    pub fn http(operation: &'static str, status: reqwest::StatusCode) -> Self {
        KolamError::Http {
            operation,
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .unwrap_or("Unknown Status")
                .to_string(),
        }
    }

    /// Whether this error came from the attempt ceiling.
    pub fn is_timeout(&self) -> bool {
        matches!(self, KolamError::TimedOut { .. })
    }
}

/// Result type alias using KolamError
pub type KolamResult<T> = Result<T, KolamError>;
