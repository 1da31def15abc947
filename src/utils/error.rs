use thiserror::Error;

#[derive(Error, Debug)]
pub enum IfscError {
    #[error("invalid IFSC code length: {length}")]
    InvalidInput { code: String, length: usize },

    #[error("failed to fetch IFSC details: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl IfscError {
    /// Process exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            IfscError::InvalidInput { .. }
            | IfscError::Io(_)
            | IfscError::ConfigError { .. }
            | IfscError::InvalidConfigValueError { .. } => 1,
            IfscError::Network(_) => 2,
            IfscError::Parse(_) => 3,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, IfscError::Network(e) if e.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, IfscError>;
