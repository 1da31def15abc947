pub mod toml_config;

use crate::core::ifsc::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ifsc-txt")]
#[command(about = "Look up an IFSC code and print its branch details as DNS TXT records")]
pub struct CliConfig {
    /// IFSC code, optionally as a zone name (e.g. sbin0001234.ifsc.)
    pub query: String,

    #[arg(long, help = "Upstream IFSC API base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "Upstream request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, short = 'c', help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Defaults, then the TOML file, then command line flags.
    pub fn resolve(&self) -> Result<LookupConfig> {
        let mut config = LookupConfig::default();

        if let Some(path) = &self.config {
            config.merge_toml(&TomlConfig::from_file(path)?);
        }

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(seconds) = self.timeout_seconds {
            config.timeout_seconds = seconds;
        }
        if self.verbose {
            config.verbose = true;
        }
        if let Some(format) = self.log_format {
            config.log_format = format;
        }

        Ok(config)
    }
}

/// Effective settings for one lookup run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub verbose: bool,
    pub log_format: LogFormat,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT.as_secs(),
            verbose: false,
            log_format: LogFormat::Compact,
        }
    }
}

impl LookupConfig {
    pub fn merge_toml(&mut self, toml: &TomlConfig) {
        if let Some(upstream) = &toml.upstream {
            if let Some(base_url) = &upstream.base_url {
                self.base_url = base_url.clone();
            }
            if let Some(seconds) = upstream.timeout_seconds {
                self.timeout_seconds = seconds;
            }
        }

        if let Some(logging) = &toml.logging {
            if let Some(verbose) = logging.verbose {
                self.verbose = verbose;
            }
            if let Some(format) = logging.format {
                self.log_format = format;
            }
        }
    }
}

impl ConfigProvider for LookupConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<()> {
        validate_url("upstream.base_url", &self.base_url)?;
        validate_positive_number("upstream.timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
