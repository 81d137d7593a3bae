use crate::classifier::ClassifyMode;
use crate::error::{Result, ZapError};
use crate::theme::{AccentChoice, ColorScheme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Keys accepted by [`ZapConfig::get`] and [`ZapConfig::set`].
pub const CONFIG_KEYS: [&str; 3] = ["accent", "color-scheme", "classify"];

/// Configuration for zapscan, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ZapConfig {
    /// Accent color name, or "random" to pick one at startup
    #[serde(default)]
    pub accent: AccentChoice,

    #[serde(default)]
    pub color_scheme: ColorScheme,

    /// How much to trust the scanner's type hint
    #[serde(default)]
    pub classify: ClassifyMode,
}

impl ZapConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ZapConfig = serde_json::from_str(&content).map_err(|e| {
            ZapError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "accent" => Some(self.accent.to_string()),
            "color-scheme" => Some(self.color_scheme.to_string()),
            "classify" => Some(self.classify.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "accent" => self.accent = value.parse()?,
            "color-scheme" => self.color_scheme = value.parse()?,
            "classify" => self.classify = value.parse()?,
            other => return Err(ZapError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}
