//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/narytree/narytree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `NARYTREE_*` prefix, `__` between sections

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::RenderSettings;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Result type for settings loading.
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Unified configuration for narytree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Text renderer markers and switches
    pub render: RenderSettings,
}

/// Get the XDG config directory for narytree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "narytree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("narytree.toml"))
}

impl Settings {
    /// Load settings with layered precedence, using the XDG global file.
    pub fn load(explicit: Option<&Path>) -> SettingsResult<Self> {
        Self::load_from(global_config_path().as_deref(), explicit)
    }

    /// Load settings from the given global and explicit files plus environment.
    ///
    /// A missing global file is skipped, a missing explicit file is an error.
    #[instrument(level = "debug")]
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> SettingsResult<Self> {
        let defaults = RenderSettings::default();
        let mut builder = Config::builder()
            .set_default("render.trailing_line", defaults.trailing_line)?
            .set_default("render.continuation", defaults.continuation)?
            .set_default("render.branch", defaults.branch)?
            .set_default("render.null_placeholder", defaults.null_placeholder)?;

        if let Some(global_path) = global {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(SettingsError::NotFound(path.to_path_buf()));
            }
            debug!("explicit config: {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix("NARYTREE")
                .prefix_separator("_")
                .separator("__"),
        );

        let settings: Self = builder.build()?.try_deserialize()?;
        Ok(settings)
    }
}
