use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use tracing::debug;

use crate::error::{ConfigError, ValidationError};
use crate::pagination::Limit;

pub const DEFAULT_BASE_URL: &str = "https://api.congress.gov/v3/";
/// Largest page size the API accepts.
pub const MAX_LIMIT: u16 = 250;
pub const DEFAULT_CONGRESS: u32 = 118;
pub const DEFAULT_LIST_LIMIT: u16 = 20;
/// Amendment text versions are published from the 117th Congress onwards.
pub const MIN_TEXT_CONGRESS: u32 = 117;

/// Ceiling for a single backoff sleep between retries.
pub const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

const DEFAULT_MAX_RETRIES: u32 = 3;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_RETRY_BACKOFF_MS: u64 = 500;

/// Trait for types that can retrieve their configuration key from environment variables
pub trait KeyFromEnv {
    /// The environment variable name holding the API key
    const KEY_NAME: &'static str;

    /// Find the API key by checking the environment, after loading the nearest `.env` file
    fn find_key() -> Option<String> {
        load_dotenv();
        env::var(Self::KEY_NAME).ok().filter(|k| !k.trim().is_empty())
    }
}

/// Walk upward from `start` and return the first `.env` file found.
pub fn find_env_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(".env"))
        .find(|candidate| candidate.is_file())
}

/// Load the nearest `.env` file above the working directory.
///
/// The process environment takes precedence: a variable that is already set,
/// even to an empty string, is never overwritten by a `.env` entry. Use
/// `ApiConfig::from_lookup` to give file values priority.
pub fn load_dotenv() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    let path = find_env_file(&cwd)?;
    load_env_file(&path).then_some(path)
}

/// Load one `.env` file without overriding variables already in the environment.
pub fn load_env_file(path: &Path) -> bool {
    match dotenvy::from_path(path) {
        Ok(()) => {
            debug!(path = %path.display(), "Loaded .env file");
            true
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Failed to load .env file");
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Xml => "xml",
        }
    }

    pub const fn accept_header(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Xml => "application/xml",
        }
    }
}

impl FromStr for ResponseFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "xml" => Ok(Self::Xml),
            _ => Err(ConfigError::Format(s.to_string())),
        }
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the Congress.gov client
#[derive(Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
    pub format: ResponseFormat,
    /// Additional attempts after the first failed one.
    pub max_retries: u32,
    pub timeout: Duration,
    /// Base delay for exponential backoff between retries.
    pub retry_backoff: Duration,
    pub max_limit: u16,
    pub default_congress: u32,
    pub user_agent: String,
}

// Hand-written so the key never ends up in logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("format", &self.format)
            .field("max_retries", &self.max_retries)
            .field("timeout", &self.timeout)
            .field("retry_backoff", &self.retry_backoff)
            .field("max_limit", &self.max_limit)
            .field("default_congress", &self.default_congress)
            .finish()
    }
}

impl KeyFromEnv for ApiConfig {
    const KEY_NAME: &'static str = "CONGRESS_API_KEY";
}

impl ApiConfig {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            format: ResponseFormat::Json,
            max_retries: DEFAULT_MAX_RETRIES,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retry_backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
            max_limit: MAX_LIMIT,
            default_congress: DEFAULT_CONGRESS,
            user_agent: format!("congress-api/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Load configuration from the process environment (and the nearest `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        load_dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Recognised variables: `CONGRESS_API_KEY` (required), `CONGRESS_API_BASE_URL`,
    /// `CONGRESS_API_FORMAT`, `CONGRESS_API_MAX_RETRIES`, `CONGRESS_API_TIMEOUT` (seconds)
    /// and `CONGRESS_API_DEFAULT_CONGRESS`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get(Self::KEY_NAME).ok_or(ConfigError::MissingKey(Self::KEY_NAME))?;
        let mut config = Self::new(api_key.trim());

        if let Some(url) = get("CONGRESS_API_BASE_URL") {
            config.base_url = url.trim().to_string();
        }
        if let Some(format) = get("CONGRESS_API_FORMAT") {
            config.format = format.parse()?;
        }
        if let Some(raw) = get("CONGRESS_API_MAX_RETRIES") {
            config.max_retries = parse_number("CONGRESS_API_MAX_RETRIES", &raw)?;
        }
        if let Some(raw) = get("CONGRESS_API_TIMEOUT") {
            config.timeout = Duration::from_secs(parse_number("CONGRESS_API_TIMEOUT", &raw)?);
        }
        if let Some(raw) = get("CONGRESS_API_DEFAULT_CONGRESS") {
            config.default_congress = parse_number("CONGRESS_API_DEFAULT_CONGRESS", &raw)?;
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub const fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    #[must_use]
    pub const fn with_default_congress(mut self, congress: u32) -> Self {
        self.default_congress = congress;
        self
    }

    /// Fall back to the configured default congress and reject zero.
    pub fn resolve_congress(&self, congress: Option<u32>) -> Result<u32, ValidationError> {
        match congress.unwrap_or(self.default_congress) {
            0 => Err(ValidationError::Congress(0)),
            c => Ok(c),
        }
    }

    pub fn validate_limit(&self, limit: Limit) -> Result<Limit, ValidationError> {
        match limit {
            Limit::Count(n) if n == 0 || n > self.max_limit => Err(ValidationError::Limit {
                given: n.to_string(),
                max: self.max_limit,
            }),
            other => Ok(other),
        }
    }
}

fn parse_number<N: FromStr>(var: &'static str, raw: &str) -> Result<N, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        var,
        value: raw.to_string(),
    })
}
