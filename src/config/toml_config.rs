use crate::utils::error::{ProxyError, Result};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

/// Optional on-disk configuration, lowest precedence after built-in defaults.
///
/// ```toml
/// [server]
/// host = "127.0.0.1"
/// port = 8080
/// propagate_upstream_status = true
///
/// [upstream]
/// base_url = "https://api.loyverse.com/v1.0"
/// api_token = "${LOYVERSE_API_TOKEN}"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub upstream: UpstreamSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub propagate_upstream_status: Option<bool>,
}

#[derive(Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    pub base_url: Option<String>,
    pub api_token: Option<String>,
}

impl std::fmt::Debug for UpstreamSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamSection")
            .field("base_url", &self.base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content)?;
        Ok(toml::from_str(&processed)?)
    }
}

/// Replace `${VAR}` references with the value of the environment variable.
///
/// An unset variable is an error so a placeholder never ends up as a credential.
fn substitute_env_vars(content: &str) -> Result<String> {
    let mut missing = Vec::new();

    let result = ENV_VAR_PATTERN.replace_all(content, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| {
            missing.push(var_name.to_string());
            String::new()
        })
    });

    if !missing.is_empty() {
        return Err(ProxyError::ConfigError {
            message: format!(
                "Environment variables referenced in config file are not set: {}",
                missing.join(", ")
            ),
        });
    }

    Ok(result.into_owned())
}
