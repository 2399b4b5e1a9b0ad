use crate::config::ConfigOverrides;
use clap::Parser;
use std::path::PathBuf;

#[derive(Clone, Parser)]
#[command(name = "loyverse-proxy")]
#[command(about = "HTTP proxy and aggregator for the Loyverse POS API")]
pub struct CliConfig {
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "LOYVERSE_API_BASE")]
    pub api_base: Option<String>,

    #[arg(long, env = "LOYVERSE_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    #[arg(
        long,
        env = "PROPAGATE_UPSTREAM_STATUS",
        help = "Answer with the upstream status code instead of 500 when Loyverse rejects a call"
    )]
    pub propagate_upstream_status: Option<bool>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            api_base: self.api_base.clone(),
            api_token: self.api_token.clone(),
            propagate_upstream_status: self.propagate_upstream_status,
        }
    }
}

impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_base", &self.api_base)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("propagate_upstream_status", &self.propagate_upstream_status)
            .field("config", &self.config)
            .field("verbose", &self.verbose)
            .field("json_logs", &self.json_logs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::try_parse_from([
            "loyverse-proxy",
            "--port",
            "8081",
            "--api-token",
            "flag-token",
            "--propagate-upstream-status",
            "true",
            "--verbose",
        ])
        .unwrap();

        let overrides = cli.overrides();
        assert_eq!(overrides.port, Some(8081));
        assert_eq!(overrides.api_token.as_deref(), Some("flag-token"));
        assert_eq!(overrides.propagate_upstream_status, Some(true));
        assert!(cli.verbose);
        assert!(!cli.json_logs);
    }

    #[test]
    fn test_debug_redacts_token() {
        let cli =
            CliConfig::try_parse_from(["loyverse-proxy", "--api-token", "flag-token"]).unwrap();
        assert!(!format!("{:?}", cli).contains("flag-token"));
    }
}
