pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::FileConfig, ConfigOverrides, Settings};
pub use crate::core::{client::LoyverseClient, service::LoyverseService};
pub use crate::domain::ports::UpstreamApi;
pub use crate::utils::error::{ProxyError, Result};
