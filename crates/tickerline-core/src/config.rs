use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::speed::Speed;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub marquee: MarqueeConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
            marquee: MarqueeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Scroll speed: "slow", "medium" or "fast"
    #[serde(default)]
    pub speed: Speed,
    /// Treat the source as block-level (marquee spans the full width)
    #[serde(default)]
    pub block: bool,
    /// Default text when none is given on the command line
    #[serde(default = "default_text")]
    pub text: String,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            speed: Speed::default(),
            block: false,
            text: default_text(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    16 // one scroll advance per ~60Hz frame
}

fn default_text() -> String {
    "tickerline ++ scrolling headline ++ ".to_string()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/tickerline/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("tickerline")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.ui.tick_rate_ms, 16);
        assert_eq!(config.marquee.speed, Speed::Medium);
        assert!(!config.marquee.block);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [marquee]
            speed = "fast"
            "#,
        )
        .unwrap();

        assert_eq!(config.marquee.speed, Speed::Fast);
        assert_eq!(config.ui.tick_rate_ms, 16);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_unknown_speed_string_falls_back() {
        let config: AppConfig = toml::from_str(
            r#"
            [marquee]
            speed = "ludicrous"
            "#,
        )
        .unwrap();

        assert_eq!(config.marquee.speed, Speed::Medium);
    }
}
