//! Renumbering configuration with layered defaults

use crate::numeral::{NumberingCase, NumberingStyle};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project configuration file, looked up next to the project
pub const LOCAL_CONFIG_FILE: &str = "yw-renumber.toml";

/// Options for one renumbering run.
///
/// Built once per run and read-only afterwards. `prefix` and `suffix` are used
/// verbatim; any `|...|` protection delimiters are removed while loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenumberConfig {
    /// Number regular (level 0) chapters
    pub include_regular: bool,

    /// Number chapters marked "unused"
    pub include_unused: bool,

    /// Number chapters that begin a new section
    pub include_parts: bool,

    /// Restart the count at every section beginning
    pub reset_at_part: bool,

    pub numbering_style: NumberingStyle,

    pub numbering_case: NumberingCase,

    /// Text preceding each number
    pub prefix: String,

    /// Text following each number
    pub suffix: String,
}

impl Default for RenumberConfig {
    fn default() -> Self {
        Self {
            include_regular: true,
            include_unused: false,
            include_parts: false,
            reset_at_part: false,
            numbering_style: NumberingStyle::Arabic,
            numbering_case: NumberingCase::Capitalized,
            prefix: "Chapter ".to_string(),
            suffix: String::new(),
        }
    }
}

impl RenumberConfig {
    /// Load configuration from all sources with proper precedence:
    /// defaults, user config, project-local file, then an explicit file.
    pub fn load(project_path: &Path, explicit: Option<&Path>) -> Result<Self> {
        Self::load_with_user_path(Self::user_config_path().as_deref(), project_path, explicit)
    }

    /// Same as [`RenumberConfig::load`] with the user config file given
    pub fn load_with_user_path(
        user_path: Option<&Path>,
        project_path: &Path,
        explicit: Option<&Path>,
    ) -> Result<Self> {
        let mut config = RenumberConfig::default();

        if let Some(user_path) = user_path {
            if let Some(file_config) = Self::load_from_file(user_path)? {
                config.merge(file_config);
            }
        }

        let local_path = Self::local_config_path(project_path);
        if let Some(file_config) = Self::load_from_file(&local_path)? {
            config.merge(file_config);
        }

        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("Configuration file not found: {}", path.display());
            }
            if let Some(file_config) = Self::load_from_file(path)? {
                config.merge(file_config);
            }
        }

        Ok(config)
    }

    /// Platform-specific user configuration file
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "yw-renumber")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Configuration file that sits next to the project file
    pub fn local_config_path(project_path: &Path) -> PathBuf {
        match project_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.join(LOCAL_CONFIG_FILE),
            _ => PathBuf::from(LOCAL_CONFIG_FILE),
        }
    }

    /// Load a partial configuration, returning `None` if the file is absent
    pub fn load_from_file(path: &Path) -> Result<Option<PartialConfig>> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: PartialConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(Some(config))
    }

    /// Merge partial config into this one (partial takes precedence for specified fields)
    pub fn merge(&mut self, other: PartialConfig) {
        if let Some(val) = other.include_regular {
            self.include_regular = val;
        }
        if let Some(val) = other.include_unused {
            self.include_unused = val;
        }
        if let Some(val) = other.include_parts {
            self.include_parts = val;
        }
        if let Some(val) = other.reset_at_part {
            self.reset_at_part = val;
        }
        if let Some(val) = other.numbering_style {
            self.numbering_style = val;
        }
        if let Some(val) = other.numbering_case {
            self.numbering_case = val;
        }
        if let Some(val) = other.prefix {
            self.prefix = strip_delimiters(&val).to_string();
        }
        if let Some(val) = other.suffix {
            self.suffix = strip_delimiters(&val).to_string();
        }
    }

    /// Write this configuration as TOML
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

/// Partial configuration for deserializing from TOML or command-line flags
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartialConfig {
    pub include_regular: Option<bool>,
    pub include_unused: Option<bool>,
    pub include_parts: Option<bool>,
    pub reset_at_part: Option<bool>,
    pub numbering_style: Option<NumberingStyle>,
    pub numbering_case: Option<NumberingCase>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
}

/// Remove a surrounding `|...|` pair.
///
/// Older configuration files wrap prefix and suffix in pipes so that leading
/// and trailing blanks survive editing.
pub fn strip_delimiters(value: &str) -> &str {
    value
        .strip_prefix('|')
        .and_then(|inner| inner.strip_suffix('|'))
        .unwrap_or(value)
}
