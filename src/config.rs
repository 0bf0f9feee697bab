//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/fintree/fintree.toml`
//! 3. Environment variables: `FINTREE_*` prefix
//!
//! All settings are presentational; the taxonomy itself is fixed.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Color output mode, applied through `colored`'s override control.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Let `colored` decide (tty detection, NO_COLOR, CLICOLOR)
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn apply(self) {
        match self {
            ColorMode::Auto => {}
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
        }
    }
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Use ASCII expand/collapse indicators instead of unicode arrows
    pub ascii: bool,
    /// Color output mode
    pub color: ColorMode,
}

/// Path of the global config file, if a config directory can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "fintree").map(|dirs| dirs.config_dir().join("fintree.toml"))
}

impl Settings {
    /// Load settings with the standard layering.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings from an explicit global config path (missing file is
    /// fine: defaults apply). Exposed separately so tests can point at a
    /// temp directory instead of the real XDG location.
    pub fn load_from(global: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = global {
            builder = builder.add_source(File::from(path.to_path_buf()).required(false));
        }
        builder
            .add_source(Environment::with_prefix("FINTREE").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Commented template written by `config init`.
    pub fn template() -> &'static str {
        r#"# fintree settings
# Global file: $XDG_CONFIG_HOME/fintree/fintree.toml
# Every value can be overridden via FINTREE_* environment variables.

# Use ASCII expand/collapse indicators instead of unicode arrows
ascii = false

# Color output: "auto", "always", or "never"
color = "auto"
"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let parsed: Settings = toml::from_str(Settings::template()).unwrap();
        assert_eq!(parsed, Settings::default());
    }
}
