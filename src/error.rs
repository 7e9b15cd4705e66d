use thiserror::Error;

#[derive(Error, Debug)]
pub enum CongressApiError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Authentication failed")]
    Authentication,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("JSON deserialization error: {0}. Raw response: {1}")]
    Json(#[source] serde_json::Error, String),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Max retries exceeded after {attempts} attempts: {last}")]
    MaxRetriesExceeded {
        attempts: u32,
        last: Box<CongressApiError>,
    },
}

impl CongressApiError {
    /// HTTP status carried by the error, if the server produced one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::RateLimit => Some(429),
            Self::Authentication => Some(401),
            Self::NotFound(_) => Some(404),
            Self::MaxRetriesExceeded { last, .. } => last.status_code(),
            _ => None,
        }
    }

    /// Response body text for `Api` errors.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body),
            Self::MaxRetriesExceeded { last, .. } => last.response_body(),
            _ => None,
        }
    }

    /// Whether a fresh attempt at the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(_) | Self::RateLimit => true,
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid bill type: {given}. Must be one of: {valid}")]
    BillType { given: String, valid: String },
    #[error("Invalid amendment type: {given}. Must be one of: {valid}")]
    AmendmentType { given: String, valid: String },
    #[error("Invalid bill number: {0}. Must be a positive integer.")]
    BillNumber(u32),
    #[error("Invalid amendment number: {0}. Must be a positive integer.")]
    AmendmentNumber(u32),
    #[error("Invalid congress number: {0}. Must be a positive integer.")]
    Congress(u32),
    #[error("Limit must be between 1 and {max} or 'all' (got {given})")]
    Limit { given: String, max: u16 },
    #[error("Text endpoint is only available for congress >= {min} (got {given})")]
    TextUnsupportedCongress { given: u32, min: u32 },
    #[error("Unable to determine data key in response")]
    DataKey,
    #[error("Invalid state code: {0}. Must be a two letter state identifier.")]
    StateCode(String),
    #[error("Invalid bioguide id: {0}")]
    BioguideId(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingKey(&'static str),
    #[error("{var} must be a number (got '{value}')")]
    InvalidNumber { var: &'static str, value: String },
    #[error("Unknown response format '{0}'. Supported: json, xml")]
    Format(String),
    #[error("Invalid base URL '{url}': {reason}")]
    BaseUrl { url: String, reason: String },
}

pub type Result<T, E = CongressApiError> = std::result::Result<T, E>;
