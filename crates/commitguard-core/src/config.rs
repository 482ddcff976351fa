// Rust guideline compliant 2026-10-18

//! Configuration management for Commit Guard.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the configuration file at the repository root.
pub const CONFIG_FILE_NAME: &str = ".commitguard.toml";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// A package that must never appear in the manifest dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenPackage {
    /// Exact, case-sensitive package identifier.
    pub id: String,
    /// Reason printed when the package is found.
    pub reason: String,
}

/// A package whose version reference must not contain a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRule {
    /// Exact, case-sensitive package identifier.
    pub package: String,
    /// Substring matched case-insensitively against the version reference.
    pub marker: String,
    /// Reason printed when the marker is found.
    pub reason: String,
}

/// A settings key that must not carry a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsRule {
    /// Key name, matched case-sensitively and followed by `:` in the document.
    pub key: String,
    /// Reason printed when the key has a value.
    pub reason: String,
}

/// Configuration for Commit Guard behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Repository-relative path of the package manifest.
    #[serde(default = "default_manifest_path")]
    pub manifest_path: String,

    /// Repository-relative path of the project settings document.
    #[serde(default = "default_settings_path")]
    pub settings_path: String,

    /// Treat a source-rule package missing from the manifest as a fault.
    #[serde(default)]
    pub strict_sources: bool,

    /// Command that decodes a large-file pointer read from stdin.
    #[serde(default = "default_smudge_command")]
    pub smudge_command: Vec<String>,

    /// Log level for the stderr subscriber.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional file receiving JSON log lines instead of stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    /// Packages that must not be dependencies.
    #[serde(default = "default_forbidden_packages")]
    pub forbidden_packages: Vec<ForbiddenPackage>,

    /// Packages whose source reference is restricted.
    #[serde(default = "default_source_rules")]
    pub source_rules: Vec<SourceRule>,

    /// Settings keys that must stay empty.
    #[serde(default = "default_settings_rules")]
    pub settings_rules: Vec<SettingsRule>,
}

fn default_manifest_path() -> String {
    "Packages/manifest.json".to_string()
}

fn default_settings_path() -> String {
    "ProjectSettings/ProjectSettings.asset".to_string()
}

fn default_smudge_command() -> Vec<String> {
    vec!["git".to_string(), "lfs".to_string(), "smudge".to_string()]
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_forbidden_packages() -> Vec<ForbiddenPackage> {
    vec![ForbiddenPackage {
        id: "com.unity.multiplayer.virtualprojects".to_string(),
        reason: "Virtual projects package should not be committed".to_string(),
    }]
}

fn default_source_rules() -> Vec<SourceRule> {
    vec![SourceRule {
        package: "com.unity.multiplayer.tools".to_string(),
        marker: "github".to_string(),
        reason: "Multiplayer tools should not point to a github package".to_string(),
    }]
}

fn default_settings_rules() -> Vec<SettingsRule> {
    vec![SettingsRule {
        key: "cloudProjectId".to_string(),
        reason: "cloudProjectId should not be committed in ProjectSettings".to_string(),
    }]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest_path: default_manifest_path(),
            settings_path: default_settings_path(),
            strict_sources: false,
            smudge_command: default_smudge_command(),
            log_level: default_log_level(),
            log_file: None,
            forbidden_packages: default_forbidden_packages(),
            source_rules: default_source_rules(),
            settings_rules: default_settings_rules(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file `.commitguard.toml` in `repo_root`
    /// 3. Environment variables with `COMMITGUARD_` prefix
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Working directory root of the repository
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(repo_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = repo_root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)?;
            config.log_level = config.log_level.to_lowercase();
        }

        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// Supported variables:
    /// - `COMMITGUARD_MANIFEST_PATH` - Manifest path
    /// - `COMMITGUARD_SETTINGS_PATH` - Settings path
    /// - `COMMITGUARD_STRICT_SOURCES` - Strict source rules (true/false)
    /// - `COMMITGUARD_SMUDGE_COMMAND` - Smudge command, whitespace separated
    /// - `COMMITGUARD_LOG_LEVEL` - Log level
    /// - `COMMITGUARD_LOG_FILE` - Log file path
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("COMMITGUARD_MANIFEST_PATH") {
            self.manifest_path = val;
        }

        if let Some(val) = lookup("COMMITGUARD_SETTINGS_PATH") {
            self.settings_path = val;
        }

        if let Some(val) = lookup("COMMITGUARD_STRICT_SOURCES") {
            self.strict_sources = val.parse().map_err(|_| {
                Error::InvalidConfig("COMMITGUARD_STRICT_SOURCES must be true or false".to_string())
            })?;
        }

        if let Some(val) = lookup("COMMITGUARD_SMUDGE_COMMAND") {
            self.smudge_command = val.split_whitespace().map(str::to_string).collect();
        }

        if let Some(val) = lookup("COMMITGUARD_LOG_LEVEL") {
            self.log_level = val.to_lowercase();
        }

        if let Some(val) = lookup("COMMITGUARD_LOG_FILE") {
            self.log_file = Some(PathBuf::from(val));
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if a path, command, or rule field is empty, or the log
    /// level is unknown.
    pub fn validate(&self) -> Result<()> {
        if self.manifest_path.trim().is_empty() {
            return Err(invalid("manifest_path must not be empty"));
        }
        if self.settings_path.trim().is_empty() {
            return Err(invalid("settings_path must not be empty"));
        }
        if self.smudge_command.is_empty() {
            return Err(invalid("smudge_command must name a program"));
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        for rule in &self.forbidden_packages {
            if rule.id.is_empty() || rule.reason.is_empty() {
                return Err(invalid("forbidden_packages entries need an id and a reason"));
            }
        }
        for rule in &self.source_rules {
            if rule.package.is_empty() || rule.marker.is_empty() || rule.reason.is_empty() {
                return Err(invalid(
                    "source_rules entries need a package, a marker and a reason",
                ));
            }
        }
        for rule in &self.settings_rules {
            if rule.key.is_empty() || rule.reason.is_empty() {
                return Err(invalid("settings_rules entries need a key and a reason"));
            }
        }

        Ok(())
    }

    /// Renders the configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))
    }

    /// Saves the configuration to `.commitguard.toml` in `repo_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, repo_root: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(repo_root.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}

fn invalid(message: &str) -> Error {
    Error::InvalidConfig(message.to_string())
}
