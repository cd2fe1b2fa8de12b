//! Optional TOML configuration.
//!
//! An `entrychk.toml` next to the working directory (or named with
//! `--config`) supplies defaults the flags can override: strict mode,
//! ignored diagnostic codes, and the rule size limits.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use entrychk_rulecount::{RULE_2A_SIZE, RULE_2B_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Strict mode: validation problems exit 2 instead of 1.
    pub strict: bool,

    /// Diagnostic codes to suppress, merged with `-W` flags.
    pub ignore: Vec<i32>,

    pub limits: Limits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            ignore: Vec::new(),
            limits: Limits::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum Rule 2a size before the size report flags the source.
    pub rule_2a: u64,
    /// Maximum Rule 2b size.
    pub rule_2b: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            rule_2a: RULE_2A_SIZE,
            rule_2b: RULE_2B_SIZE,
        }
    }
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Self> {
        toml::from_str(s).context("invalid entrychk.toml")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content)
    }

    /// Resolve the effective config: an explicit `--config` path must
    /// exist; otherwise `./entrychk.toml` is used when present, else
    /// defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let local = Path::new("entrychk.toml");
                if local.exists() {
                    Self::from_file(local)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
