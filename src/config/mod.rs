use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::publish;
use crate::target::{default_targets, TargetConfig};


/// File looked up in the working directory before the user config directory
pub const LOCAL_CONFIG_FILE: &str = "multipub.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Publish tool executable
    #[serde(default = "default_tool")]
    pub tool: String,

    /// Project file passed to every invocation
    #[serde(default = "default_project")]
    pub project: PathBuf,

    /// Directory holding one output directory per target
    #[serde(default = "default_build_root")]
    pub build_root: PathBuf,

    /// Exit non-zero when any invocation fails
    #[serde(default)]
    pub strict: bool,

    /// Extra environment variables for every invocation
    #[serde(default)]
    pub env: HashMap<String, String>,

    /// Replaces the built-in targets when present
    #[serde(default = "default_targets")]
    pub targets: Vec<TargetConfig>,
}

fn default_tool() -> String {
    publish::DEFAULT_TOOL.to_string()
}

fn default_project() -> PathBuf {
    PathBuf::from(publish::DEFAULT_PROJECT)
}

fn default_build_root() -> PathBuf {
    PathBuf::from(publish::DEFAULT_BUILD_ROOT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            project: default_project(),
            build_root: default_build_root(),
            strict: false,
            env: HashMap::new(),
            targets: default_targets(),
        }
    }
}

impl Config {
    /// Load from an explicit path, then `./multipub.toml`, then the user config directory
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(&local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("multipub").join("config.toml");
            if config_path.exists() {
                return Self::from_file(&config_path);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tool.trim().is_empty() {
            bail!("tool must not be empty");
        }
        if self.targets.is_empty() {
            bail!("at least one target is required");
        }
        for target in &self.targets {
            if target.name.trim().is_empty() {
                bail!("target name must not be empty");
            }
            if target.configuration.trim().is_empty() {
                bail!("target {} has an empty configuration", target.name);
            }
        }
        Ok(())
    }
}
