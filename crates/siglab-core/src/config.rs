//! # Configuration System
//!
//! YAML-based configuration for siglab demo hosts: default slider values,
//! the analysis grid, and logging. Every field has a default matching the
//! shipped animations, so a missing or partial file still yields a
//! working setup.
//!
//! ## Configuration Search Path
//!
//! Configuration is loaded from the first file found:
//! 1. Path specified via `SIGLAB_CONFIG` environment variable
//! 2. `./siglab.yaml` (current directory)
//! 3. `~/.config/siglab/config.yaml` (user config)
//! 4. `/etc/siglab/config.yaml` (system config)
//!
//! ## Example Configuration
//!
//! ```yaml
//! signal:
//!   amplitude: 2.0
//!   frequency_hz: 10.0
//!   sampling_frequency_hz: 15.0
//!
//! analysis:
//!   analysis_rate_hz: 10000.0
//!   time_window_s: 0.1
//!
//! logging:
//!   level: debug
//!   format: compact
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::LogConfig;
use crate::signal_generator::AnalysisWindow;

/// Error type for configuration operations.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found
    NotFound(String),
    /// Failed to read configuration file
    ReadError(String),
    /// Failed to parse configuration
    ParseError(String),
    /// Invalid configuration value
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(msg) => write!(f, "config not found: {}", msg),
            ConfigError::ReadError(msg) => write!(f, "failed to read config: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "failed to parse config: {}", msg),
            ConfigError::ValidationError(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Default slider values for the sampling demos.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalDefaults {
    /// Signal amplitude in volts
    pub amplitude: f64,
    /// Signal frequency in Hz
    pub frequency_hz: f64,
    /// Sampling frequency in Hz
    pub sampling_frequency_hz: f64,
}

impl Default for SignalDefaults {
    fn default() -> Self {
        Self {
            amplitude: 2.0,
            frequency_hz: 10.0,
            sampling_frequency_hz: 15.0,
        }
    }
}

/// Analysis grid settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Dense-grid rate in Hz
    pub analysis_rate_hz: f64,
    /// Observed window length in seconds
    pub time_window_s: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            analysis_rate_hz: 10_000.0,
            time_window_s: 0.1,
        }
    }
}

impl AnalysisSettings {
    /// The [`AnalysisWindow`] these settings describe.
    pub fn window(&self) -> AnalysisWindow {
        AnalysisWindow::new(self.time_window_s, self.analysis_rate_hz)
    }
}

/// Complete siglab configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiglabConfig {
    /// Configuration version
    pub version: String,
    /// Default slider values
    pub signal: SignalDefaults,
    /// Analysis grid settings
    pub analysis: AnalysisSettings,
    /// Logging configuration
    pub logging: LogConfig,
}

impl Default for SiglabConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            signal: SignalDefaults::default(),
            analysis: AnalysisSettings::default(),
            logging: LogConfig::default(),
        }
    }
}

impl SiglabConfig {
    /// Load configuration from the default search path.
    ///
    /// Returns default config if no file is found.
    pub fn load() -> Result<Self, ConfigError> {
        if let Ok(path) = std::env::var("SIGLAB_CONFIG") {
            if Path::new(&path).exists() {
                return Self::load_from(Path::new(&path));
            }
        }

        for path in Self::config_search_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;

        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))
    }

    /// Get configuration search paths.
    pub fn config_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("./siglab.yaml")];

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "siglab") {
            paths.push(config_dir.config_dir().join("config.yaml"));
        }

        paths.push(PathBuf::from("/etc/siglab/config.yaml"));

        paths
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.analysis.analysis_rate_hz <= 0.0 {
            return Err(ConfigError::ValidationError(
                "analysis_rate_hz must be positive".to_string(),
            ));
        }
        if self.analysis.time_window_s <= 0.0 {
            return Err(ConfigError::ValidationError(
                "time_window_s must be positive".to_string(),
            ));
        }
        if self.signal.sampling_frequency_hz < 0.0 {
            return Err(ConfigError::ValidationError(
                "sampling_frequency_hz must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_the_demo_constants() {
        let config = SiglabConfig::default();
        assert_eq!(config.signal.amplitude, 2.0);
        assert_eq!(config.signal.frequency_hz, 10.0);
        assert_eq!(config.signal.sampling_frequency_hz, 15.0);
        assert_eq!(config.analysis.window().num_points(), 1000);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = SiglabConfig::parse("signal:\n  amplitude: 3.5\n").unwrap();
        assert_eq!(config.signal.amplitude, 3.5);
        assert_eq!(config.signal.frequency_hz, 10.0);
        assert_eq!(config.analysis.time_window_s, 0.1);
    }

    #[test]
    fn test_roundtrip() {
        let config = SiglabConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = SiglabConfig::parse(&yaml).unwrap();
        assert_eq!(parsed.signal.amplitude, config.signal.amplitude);
        assert_eq!(parsed.version, config.version);
    }

    #[test]
    fn test_bad_yaml_is_a_parse_error() {
        let err = SiglabConfig::parse("signal: [not a map").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_rejects_degenerate_grid() {
        let mut config = SiglabConfig::default();
        config.analysis.analysis_rate_hz = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_search_paths_start_local() {
        let paths = SiglabConfig::config_search_paths();
        assert_eq!(paths[0], PathBuf::from("./siglab.yaml"));
    }
}
