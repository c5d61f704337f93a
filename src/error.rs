use std::fmt;

#[derive(Debug)]
pub enum JobTrackError {
    /// The login endpoint rejected the email/password pair.
    InvalidCredentials(String),
    /// The register endpoint rejected the signup (duplicate email etc.).
    RegistrationFailed(String),
    /// A job operation was attempted without a stored session token.
    Unauthenticated,
    /// The server has no job with the requested id.
    NotFound(String),
    ApiError {
        status: u16,
        message: String,
    },
    NetworkError(reqwest::Error),
    ConfigError(String),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl fmt::Display for JobTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobTrackError::InvalidCredentials(msg) => write!(f, "{}", msg),
            JobTrackError::RegistrationFailed(msg) => write!(f, "{}", msg),
            JobTrackError::Unauthenticated => {
                write!(f, "Not logged in. Run `jobtrack login <email>` first")
            }
            JobTrackError::NotFound(id) => write!(f, "No job found with id {}", id),
            JobTrackError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            JobTrackError::NetworkError(e) => write!(f, "Network error: {}", e),
            JobTrackError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            JobTrackError::IoError(e) => write!(f, "IO error: {}", e),
            JobTrackError::JsonError(e) => write!(f, "JSON error: {}", e),
            JobTrackError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for JobTrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JobTrackError::NetworkError(e) => Some(e),
            JobTrackError::IoError(e) => Some(e),
            JobTrackError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for JobTrackError {
    fn from(err: reqwest::Error) -> Self {
        JobTrackError::NetworkError(err)
    }
}

impl From<std::io::Error> for JobTrackError {
    fn from(err: std::io::Error) -> Self {
        JobTrackError::IoError(err)
    }
}

impl From<serde_json::Error> for JobTrackError {
    fn from(err: serde_json::Error) -> Self {
        JobTrackError::JsonError(err)
    }
}

pub type Result<T> = std::result::Result<T, JobTrackError>;
