#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::client::DEFAULT_API_BASE;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_secret, validate_range, validate_required_field, validate_url, Validate,
};
use toml_config::FileConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

/// Values supplied on the command line or through the environment.
#[derive(Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub api_base: Option<String>,
    pub api_token: Option<String>,
    pub propagate_upstream_status: Option<bool>,
}

/// Fully resolved runtime settings.
#[derive(Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub api_base: String,
    pub api_token: String,
    /// Answer with the upstream status code instead of 500 when Loyverse rejects a call.
    pub propagate_upstream_status: bool,
}

impl Settings {
    /// Merge overrides over the config file over built-in defaults.
    ///
    /// There is no default API token.
    pub fn resolve(overrides: ConfigOverrides, file: Option<FileConfig>) -> Result<Self> {
        let file = file.unwrap_or_default();

        let api_token = overrides.api_token.or(file.upstream.api_token);
        let api_token = validate_required_field("api_token", &api_token)?.clone();

        let settings = Self {
            host: overrides
                .host
                .or(file.server.host)
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: overrides.port.or(file.server.port).unwrap_or(DEFAULT_PORT),
            api_base: overrides
                .api_base
                .or(file.upstream.base_url)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            api_token,
            propagate_upstream_status: overrides
                .propagate_upstream_status
                .or(file.server.propagate_upstream_status)
                .unwrap_or(false),
        };

        settings.validate()?;
        Ok(settings)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_secret("api_token", &self.api_token)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_base", &self.api_base)
            .field("api_token", &"<redacted>")
            .field("propagate_upstream_status", &self.propagate_upstream_status)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ProxyError;

    fn with_token(token: &str) -> ConfigOverrides {
        ConfigOverrides {
            api_token: Some(token.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_apply_when_only_token_given() {
        let settings = Settings::resolve(with_token("t"), None).unwrap();

        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.port, 3000);
        assert_eq!(settings.api_base, "https://api.loyverse.com/v1.0");
        assert!(!settings.propagate_upstream_status);
        assert_eq!(settings.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        let result = Settings::resolve(ConfigOverrides::default(), None);
        assert!(matches!(result, Err(ProxyError::MissingConfigError { .. })));
    }

    #[test]
    fn test_blank_token_is_an_error() {
        let result = Settings::resolve(with_token("  "), None);
        assert!(matches!(
            result,
            Err(ProxyError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let file = FileConfig::from_toml_str(
            r#"
[server]
host = "127.0.0.1"
port = 8080
propagate_upstream_status = true

[upstream]
base_url = "http://file.example"
api_token = "file-token"
"#,
        )
        .unwrap();

        let overrides = ConfigOverrides {
            port: Some(9090),
            api_token: Some("cli-token".to_string()),
            propagate_upstream_status: Some(false),
            ..Default::default()
        };

        let settings = Settings::resolve(overrides, Some(file)).unwrap();

        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 9090);
        assert_eq!(settings.api_base, "http://file.example");
        assert_eq!(settings.api_token, "cli-token");
        assert!(!settings.propagate_upstream_status);
    }

    #[test]
    fn test_token_from_file_is_used() {
        let file = FileConfig::from_toml_str("[upstream]\napi_token = \"file-token\"\n").unwrap();
        let settings = Settings::resolve(ConfigOverrides::default(), Some(file)).unwrap();
        assert_eq!(settings.api_token, "file-token");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let overrides = ConfigOverrides {
            api_base: Some("ftp://api.loyverse.com".to_string()),
            ..with_token("t")
        };
        assert!(Settings::resolve(overrides, None).is_err());
    }

    #[test]
    fn test_port_zero_is_rejected() {
        let overrides = ConfigOverrides {
            port: Some(0),
            ..with_token("t")
        };
        assert!(Settings::resolve(overrides, None).is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let settings = Settings::resolve(with_token("super-secret"), None).unwrap();
        assert!(!format!("{:?}", settings).contains("super-secret"));
    }
}
