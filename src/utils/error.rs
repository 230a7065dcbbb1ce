use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowtextError {
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Failed to fetch {url}: {message}")]
    FetchError { url: String, message: String },

    #[error("Schedule parsing error: {message}")]
    ParseError { message: String },

    #[error("Catalog {operation} failed: {message}")]
    PublishError { operation: String, message: String },

    #[error("SMS delivery failed: {message}")]
    NotifyError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Parsing,
    Catalog,
    Messaging,
}

impl ShowtextError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    pub fn fetch(url: impl Into<String>, message: impl ToString) -> Self {
        Self::FetchError {
            url: url.into(),
            message: message.to_string(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    pub fn publish(operation: impl Into<String>, message: impl ToString) -> Self {
        Self::PublishError {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    pub fn notify(message: impl ToString) -> Self {
        Self::NotifyError {
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::FetchError { .. } => ErrorCategory::Network,
            Self::ParseError { .. } => ErrorCategory::Parsing,
            Self::PublishError { .. } => ErrorCategory::Catalog,
            Self::NotifyError { .. } => ErrorCategory::Messaging,
        }
    }

    /// Process exit code for this failure. Never zero, and never clap's usage code 2.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 7,
            ErrorCategory::Network => 3,
            ErrorCategory::Parsing => 4,
            ErrorCategory::Catalog => 5,
            ErrorCategory::Messaging => 6,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ConfigError { message } => format!("Could not load configuration: {}", message),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            Self::FetchError { url, .. } => format!("Could not download the schedule from {}", url),
            Self::ParseError { .. } => "The schedule page did not have the expected layout".to_string(),
            Self::PublishError { operation, .. } => {
                format!("The music catalog rejected the {} request", operation)
            }
            Self::NotifyError { .. } => "The text message could not be sent".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => {
                "Check the credentials file path and that every required key is present"
            }
            ErrorCategory::Network => "Check network connectivity and that the venue site is up",
            ErrorCategory::Parsing => "The venue page layout probably changed; update the selectors",
            ErrorCategory::Catalog => "Refresh the catalog access token and verify the user name",
            ErrorCategory::Messaging => "Verify the SMS account sid, token and phone numbers",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShowtextError>;
