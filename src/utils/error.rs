use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Type mismatch: {message}")]
    TypeMismatch { message: String },

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },

    #[error("Order {order_id:?} is not present in the repository")]
    OrderNotPresent { order_id: Option<i64> },

    #[error("Client {client_id} does not exist")]
    ClientNotFound { client_id: i64 },

    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ShopError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    NotFound,
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code the CLI reports for a failure of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2, // retryable
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ShopError {
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch {
            message: message.into(),
        }
    }

    pub fn invalid_value(message: impl Into<String>) -> Self {
        Self::InvalidValue {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TypeMismatch { .. } | Self::InvalidValue { .. } => ErrorCategory::Input,
            Self::OrderNotPresent { .. } | Self::ClientNotFound { .. } => ErrorCategory::NotFound,
            Self::UnexpectedStatus { .. } | Self::ApiError(_) => ErrorCategory::Network,
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // network failures may succeed on a rerun
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input
            | ErrorCategory::NotFound
            | ErrorCategory::Data
            | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "Pass order ids as integers and orders as order objects",
            Self::InvalidValue { .. } => "Order ids must be greater or equal 0",
            Self::OrderNotPresent { .. } => "Look the order up before deleting it",
            Self::ClientNotFound { .. } => "Check the client id against the shop service",
            Self::UnexpectedStatus { .. } | Self::ApiError(_) => {
                "Check that the shop API is reachable and try again"
            }
            Self::SerializationError(_) => {
                "The response did not match {orders: [{order: [{name, value}]}]}"
            }
            Self::IoError(_) => "Check file paths and permissions",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration file or CLI flags"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) if e.is_timeout() => "The shop API did not answer in time".to_string(),
            Self::ApiError(_) => "Could not talk to the shop API".to_string(),
            other => other.to_string(),
        }
    }
}
