use crate::error::*;
use tracing::{error, info, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    /// Whether the error must abort the run instead of degrading it.
    fn is_fatal(&self) -> bool;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::RedditApi(e) => {
                error!("Reddit API error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            CoreError::Patch(e) => {
                error!("Document patch error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn is_fatal(&self) -> bool {
        match self {
            CoreError::RedditApi(e) => e.is_fatal(),
            CoreError::Config(e) => e.is_fatal(),
            CoreError::Patch(e) => e.is_fatal(),
            CoreError::Io(_) | CoreError::Serialization(_) | CoreError::Network(_) => false,
        }
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::RedditApi(e) => e.user_friendly_message(),
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Patch(e) => e.user_friendly_message(),
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            _ => "An unexpected error occurred. Please try again later.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::RedditApi(_) => "REDDIT_API".to_string(),
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Patch(_) => "PATCH".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
        }
    }
}

impl ErrorExt for RedditApiError {
    fn log_error(&self) -> &Self {
        error!("RedditApiError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("RedditApiError (warning): {}", self);
        self
    }

    fn is_fatal(&self) -> bool {
        matches!(
            self,
            RedditApiError::MissingCredential { .. } | RedditApiError::AuthenticationFailed { .. }
        )
    }

    fn user_friendly_message(&self) -> String {
        match self {
            RedditApiError::MissingCredential { var_name } => format!(
                "Reddit credential '{}' is required but not set.",
                var_name
            ),
            RedditApiError::AuthenticationFailed { .. } => {
                "Reddit authentication failed. Please check your credentials.".to_string()
            }
            RedditApiError::RateLimitExceeded { retry_after } => format!(
                "Too many requests. Reddit asked to wait {} seconds.",
                retry_after
            ),
            RedditApiError::Forbidden { resource } => format!(
                "Access denied to {}. The subreddit may be private or quarantined.",
                resource
            ),
            RedditApiError::NotFound { resource } => {
                format!("'{}' was not found. The subreddit may not exist.", resource)
            }
            RedditApiError::InvalidBoardName { board } => {
                format!("'{}' is not a valid subreddit name.", board)
            }
            RedditApiError::InvalidToken => {
                "Reddit authentication token is invalid. Please re-authenticate.".to_string()
            }
            RedditApiError::RequestTimeout => "Request to Reddit timed out.".to_string(),
            _ => "Reddit API error occurred. Please try again later.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            RedditApiError::MissingCredential { .. } => "REDDIT_MISSING_CREDENTIAL".to_string(),
            RedditApiError::AuthenticationFailed { .. } => "REDDIT_AUTH_FAILED".to_string(),
            RedditApiError::RateLimitExceeded { .. } => "REDDIT_RATE_LIMIT".to_string(),
            RedditApiError::Forbidden { .. } => "REDDIT_FORBIDDEN".to_string(),
            RedditApiError::NotFound { .. } => "REDDIT_NOT_FOUND".to_string(),
            RedditApiError::InvalidBoardName { .. } => "REDDIT_INVALID_BOARD_NAME".to_string(),
            RedditApiError::InvalidToken => "REDDIT_INVALID_TOKEN".to_string(),
            RedditApiError::RequestTimeout => "REDDIT_TIMEOUT".to_string(),
            RedditApiError::InvalidResponse { .. } => "REDDIT_INVALID_RESPONSE".to_string(),
            RedditApiError::ServerError { .. } => "REDDIT_SERVER_ERROR".to_string(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ConfigError (warning): {}", self);
        self
    }

    fn is_fatal(&self) -> bool {
        true
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::MissingEnvironmentVariable { var_name } => format!(
                "Environment variable '{}' is required but not set.",
                var_name
            ),
            ConfigError::InvalidValue { field, .. } => {
                format!("Invalid value for configuration field '{}'.", field)
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::MissingEnvironmentVariable { .. } => "CONFIG_MISSING_ENV_VAR".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
        }
    }
}

impl ErrorExt for PatchError {
    fn log_error(&self) -> &Self {
        error!("PatchError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("PatchError (warning): {}", self);
        self
    }

    fn is_fatal(&self) -> bool {
        false
    }

    fn user_friendly_message(&self) -> String {
        match self {
            PatchError::Unreadable { path, .. } => format!("Could not read '{}'.", path),
            PatchError::Unwritable { path, .. } => format!("Could not write '{}'.", path),
            PatchError::InvalidMarkers { .. } => {
                "The section markers could not be compiled into a pattern.".to_string()
            }
            PatchError::MarkersNotFound { .. } => {
                "The document has no trending-titles section to update.".to_string()
            }
        }
    }

    fn error_code(&self) -> String {
        match self {
            PatchError::Unreadable { .. } => "PATCH_UNREADABLE".to_string(),
            PatchError::Unwritable { .. } => "PATCH_UNWRITABLE".to_string(),
            PatchError::InvalidMarkers { .. } => "PATCH_INVALID_MARKERS".to_string(),
            PatchError::MarkersNotFound { .. } => "PATCH_MARKERS_NOT_FOUND".to_string(),
        }
    }
}

/// Logs errors at a level matching what they cost the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorReporter;

impl ErrorReporter {
    pub fn new() -> Self {
        Self
    }

    /// Fatal errors are reported as errors, everything else as a warning.
    pub fn report(&self, error: &CoreError) {
        if error.is_fatal() {
            self.report_error(error);
        } else {
            self.report_warning(error);
        }
    }

    pub fn report_error(&self, error: &CoreError) {
        error.log_error();
        info!("Error code: {}", error.error_code());
        info!("User message: {}", error.user_friendly_message());
    }

    pub fn report_warning(&self, error: &CoreError) {
        error.log_warn();
        info!("Error code: {}", error.error_code());
    }
}
