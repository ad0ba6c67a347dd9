//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/demobank/demobank.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `DEMOBANK_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::services::PROJECTION_MONTHS;
use crate::application::{ApplicationError, DEMO_BANK_NAME, DEMO_BANK_PROMPT_NAME};

/// Prefix for environment overrides, e.g. `DEMOBANK_PROJECTION_MONTHS=24`.
pub const ENV_PREFIX: &str = "DEMOBANK";

/// Unified configuration for demobank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Name of the seeded bank
    pub bank_name: String,
    /// Bank name as used in the yes/no prompt ("поиск в '...'")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_prompt_name: Option<String>,
    /// Horizon for depositor projections, in months
    pub projection_months: u32,
    /// Symbol appended to formatted amounts
    pub currency_symbol: String,
    /// Re-prompt on anything other than y/n instead of quitting
    pub strict_answers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bank_name: DEMO_BANK_NAME.into(),
            bank_prompt_name: None,
            projection_months: PROJECTION_MONTHS,
            currency_symbol: "₽".into(),
            strict_answers: true,
        }
    }
}

/// Raw settings for intermediate parsing.
///
/// Every field is optional so a layer only overrides what it specifies.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub bank_name: Option<String>,
    pub bank_prompt_name: Option<String>,
    pub projection_months: Option<u32>,
    pub currency_symbol: Option<String>,
    pub strict_answers: Option<bool>,
}

/// Get the XDG config directory for demobank.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "demobank").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("demobank.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins for every field it specifies.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            bank_name: overlay
                .bank_name
                .clone()
                .unwrap_or_else(|| self.bank_name.clone()),
            bank_prompt_name: overlay
                .bank_prompt_name
                .clone()
                .or_else(|| self.bank_prompt_name.clone()),
            projection_months: overlay.projection_months.unwrap_or(self.projection_months),
            currency_symbol: overlay
                .currency_symbol
                .clone()
                .unwrap_or_else(|| self.currency_symbol.clone()),
            strict_answers: overlay.strict_answers.unwrap_or(self.strict_answers),
        }
    }

    /// Bank name for the yes/no prompt.
    ///
    /// Falls back to the declined demo name for the demo bank, otherwise to
    /// `bank_name` as is.
    pub fn prompt_name(&self) -> &str {
        match &self.bank_prompt_name {
            Some(name) => name,
            None if self.bank_name == DEMO_BANK_NAME => DEMO_BANK_PROMPT_NAME,
            None => &self.bank_name,
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file given on the command line; it must exist
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|path| path.exists());
        let current = Self::load_files(global.as_deref(), explicit)?;
        Self::apply_env_overrides(current)
    }

    /// Defaults, then the global file (if given), then the explicit file (if given).
    ///
    /// Environment variables are not consulted.
    pub fn load_files(
        global: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global {
            debug!("global config: {}", global_path.display());
            current = current.merge_with(&load_raw_settings(global_path)?);
        }

        if let Some(path) = explicit {
            let path = expand_path(path);
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("explicit config: {}", path.display());
            current = current.merge_with(&load_raw_settings(&path)?);
        }

        Ok(current)
    }

    /// Apply DEMOBANK_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(config_err)?;

        let overlay = RawSettings {
            bank_name: config.get_string("bank_name").ok(),
            bank_prompt_name: config.get_string("bank_prompt_name").ok(),
            projection_months: match config.get::<u32>("projection_months") {
                Ok(months) => Some(months),
                Err(ConfigError::NotFound(_)) => None,
                Err(e) => return Err(config_err(e)),
            },
            currency_symbol: config.get_string("currency_symbol").ok(),
            strict_answers: match config.get_bool("strict_answers") {
                Ok(strict) => Some(strict),
                Err(ConfigError::NotFound(_)) => None,
                Err(e) => return Err(config_err(e)),
            },
        };
        Ok(settings.merge_with(&overlay))
    }

    /// Serialize the effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_then_match_demo_program() {
        let settings = Settings::default();
        assert_eq!(settings.bank_name, "Демо Банк");
        assert_eq!(settings.projection_months, 12);
        assert_eq!(settings.currency_symbol, "₽");
        assert!(settings.strict_answers);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let overlay = RawSettings {
            projection_months: Some(24),
            ..RawSettings::default()
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.projection_months, 24);
        assert_eq!(merged.bank_name, "Демо Банк");
    }

    #[test]
    fn given_demo_bank_when_prompting_then_uses_declined_name() {
        assert_eq!(Settings::default().prompt_name(), "Демо Банке");
    }

    #[test]
    fn given_custom_bank_when_prompting_then_falls_back_to_name() {
        let settings = Settings {
            bank_name: "Тест Банк".into(),
            ..Settings::default()
        };
        assert_eq!(settings.prompt_name(), "Тест Банк");

        let settings = Settings {
            bank_prompt_name: Some("Тест Банке".into()),
            ..settings
        };
        assert_eq!(settings.prompt_name(), "Тест Банке");
    }

    #[test]
    fn given_settings_when_serializing_then_roundtrips_through_raw() {
        let settings = Settings {
            strict_answers: false,
            ..Settings::default()
        };
        let text = settings.to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&text).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), settings);
    }
}
