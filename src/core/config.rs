use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// The demo accounts shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");

/// Initial state of one account, as listed in the configuration file.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AccountSeed {
    pub owner: String,
    #[serde(default)]
    pub movements: Vec<f64>,
    pub interest_rate: f64,
    pub pin: u32,
}

/// Business rules applied by the transaction engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BankRules {
    /// Share of a requested loan that some movement must cover.
    pub loan_coverage: f64,
}

impl Default for BankRules {
    fn default() -> Self {
        BankRules {
            loan_coverage: default_loan_coverage(),
        }
    }
}

fn default_currency() -> String {
    "₤".to_string()
}

fn default_loan_coverage() -> f64 {
    0.3
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub accounts: Vec<AccountSeed>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_loan_coverage")]
    pub loan_coverage: f64,
}

impl AppConfig {
    /// Loads the config from the default location, or the bundled example
    /// accounts when no file has been set up yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using example accounts",
                config_path.display()
            );
            return Self::example();
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "bankist", "bankist")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn example() -> Result<Self> {
        serde_yaml::from_str(EXAMPLE_CONFIG).context("Failed to parse bundled example config")
    }

    pub fn rules(&self) -> BankRules {
        BankRules {
            loan_coverage: self.loan_coverage,
        }
    }
}
