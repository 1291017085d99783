//! Error types for the material comparison session

use thiserror::Error;

/// Main error type for session, request and export operations
#[derive(Error, Debug)]
pub enum CurveError {
    #[error("Session is full ({0} materials). Clear the session to add more")]
    Capacity(usize),

    #[error("No data to export")]
    NoData,

    #[error("Calculation request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Calculation service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("Unknown model type '{0}'")]
    UnknownModelType(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CurveError {
    /// True for failures of the external calculate call. The session must not
    /// be touched when one of these comes back.
    pub fn is_request_failure(&self) -> bool {
        matches!(self, CurveError::Network(_) | CurveError::Service { .. })
    }
}

/// Result type for curve session operations
pub type CurveResult<T> = Result<T, CurveError>;
