//! Configuration file and resolved run settings.

use std::path::{Path, PathBuf};

use covercheck_ext_file::DEFAULT_BONDS;
use covercheck_recon::{HorizonSet, ReconConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Data directory used when neither flag, env nor config names one.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Contents of a `--config` TOML file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Directory holding the trade files.
    pub data_dir: Option<PathBuf>,

    /// Dashboard horizons, in days from the as-of date.
    pub horizons: Option<Vec<i64>>,

    /// Bond universe for synthetic trades.
    pub bonds: Option<Vec<String>>,
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content).map_err(|e| CliError::Config(format!("{}: {e}", path.display())))
    }

    fn parse(content: &str) -> CliResult<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }
}

/// Settings after merging flags, environment and config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding the trade files.
    pub data_dir: PathBuf,
    /// Reconciliation parameters.
    pub recon: ReconConfig,
    /// Bond universe for synthetic trades.
    pub bonds: Vec<String>,
}

impl Settings {
    /// Merges settings. An explicit data directory wins over the config file.
    pub fn resolve(data_dir: Option<PathBuf>, config: CliConfig) -> CliResult<Self> {
        let data_dir = data_dir
            .or(config.data_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let horizons = match config.horizons {
            Some(offsets) => {
                HorizonSet::new(offsets).map_err(|e| CliError::Config(e.to_string()))?
            }
            None => HorizonSet::default(),
        };

        let bonds = config
            .bonds
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_BONDS.iter().map(|b| (*b).to_string()).collect());

        debug!(
            data_dir = %data_dir.display(),
            horizons = ?horizons.offsets(),
            bonds = bonds.len(),
            "Resolved settings"
        );

        Ok(Self {
            data_dir,
            recon: ReconConfig::new().with_horizons(horizons),
            bonds,
        })
    }

    /// Loads the optional config file and merges it.
    pub fn load(data_dir: Option<PathBuf>, config_path: Option<&Path>) -> CliResult<Self> {
        let config = match config_path {
            Some(path) => {
                info!("Loading configuration from {}", path.display());
                CliConfig::from_file(path)?
            }
            None => CliConfig::default(),
        };
        Self::resolve(data_dir, config)
    }
}
