use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("Feed request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("Feed body is not a valid spreadsheet feed: {0}")]
    FeedDecodeError(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {reason} (got '{value}')")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Fetch,
    Io,
}

impl SuiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SuiteError::FetchError(_) | SuiteError::FeedDecodeError(_) => ErrorCategory::Fetch,
            SuiteError::IoError(_) | SuiteError::SerializationError(_) => ErrorCategory::Io,
            SuiteError::ConfigError { .. } | SuiteError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// Process exit code for the CLI driver.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Config => 1,
            ErrorCategory::Fetch => 2,
            ErrorCategory::Io => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
            ErrorCategory::Fetch => format!("Could not download the test feed: {}", self),
            ErrorCategory::Io => format!("Could not write the test suite: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SuiteError::FetchError(e) if e.is_timeout() => {
                "The feed did not answer in time; raise --timeout-seconds or try again later"
            }
            SuiteError::FetchError(e) if e.is_status() => {
                "The feed server rejected the request; check that the feed URL is still published"
            }
            SuiteError::FetchError(_) => "Check your network connection and the feed URL",
            SuiteError::FeedDecodeError(_) => {
                "The feed URL must return a JSON spreadsheet feed with a 'feed' object"
            }
            SuiteError::IoError(_) | SuiteError::SerializationError(_) => {
                "Check that the output directory is writable and the disk is not full"
            }
            SuiteError::ConfigError { .. } | SuiteError::InvalidConfigValueError { .. } => {
                "Fix the reported setting and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SuiteError>;
