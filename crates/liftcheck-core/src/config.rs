//! liftcheck configuration.
//!
//! Only the catalog location is configurable; the lift and area tables are
//! compiled in.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::DEFAULT_CATALOG_PATH;

/// Environment variable that overrides the catalog path from config files.
pub const CATALOG_ENV: &str = "LIFTCHECK_CATALOG";

/// Top-level liftcheck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LiftcheckConfig {
    /// Path to the assessment CSV.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from(DEFAULT_CATALOG_PATH)
}

impl Default for LiftcheckConfig {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
        }
    }
}

impl LiftcheckConfig {
    /// The catalog to load: an explicit path wins, then `LIFTCHECK_CATALOG`,
    /// then the configured path.
    pub fn catalog_path(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }
        match std::env::var(CATALOG_ENV) {
            Ok(path) if !path.is_empty() => PathBuf::from(path),
            _ => self.catalog_path.clone(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `liftcheck.toml` in the current directory
/// 2. `~/.config/liftcheck/config.toml`
///
/// With no file found the defaults apply.
pub fn load_config_from(path: Option<&Path>) -> Result<LiftcheckConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("liftcheck.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<LiftcheckConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(LiftcheckConfig::default()),
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("liftcheck"))
}
