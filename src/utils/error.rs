use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("Loyverse API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Loyverse API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid endpoint name: '{endpoint}'")]
    InvalidEndpoint { endpoint: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ProxyError {
    /// Status code returned by the upstream API, if this error came from one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ProxyError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ProxyError::ConfigError { .. }
                | ProxyError::MissingConfigError { .. }
                | ProxyError::InvalidConfigValueError { .. }
                | ProxyError::TomlError(_)
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ProxyError::MissingConfigError { .. } => {
                "Set LOYVERSE_API_TOKEN (or pass --api-token) before starting the server"
            }
            ProxyError::InvalidConfigValueError { .. } | ProxyError::ConfigError { .. } => {
                "Check the CLI flags, environment variables and config file values"
            }
            ProxyError::TomlError(_) | ProxyError::IoError(_) => {
                "Check that the --config file exists and is valid TOML"
            }
            ProxyError::Upstream { .. } | ProxyError::Transport(_) => {
                "Check network access to the Loyverse API and the validity of the API token"
            }
            ProxyError::InvalidEndpoint { .. } => {
                "Resource names may only contain letters, digits, '-', '_' and '/' separators"
            }
            ProxyError::ProcessingError { .. } => "Inspect the upstream response body",
        }
    }
}

pub type Result<T> = std::result::Result<T, ProxyError>;
