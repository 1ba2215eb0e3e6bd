//! YAML Configuration File Support for Plagiscan
//!
//! Every knob of a detection run (normalization, match levels, hash
//! constants, classification cut points) can be kept in one YAML file and
//! loaded at startup. Missing sections and fields fall back to the defaults.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # Plagiscan configuration
//! version: "1.0"
//! name: "coursework"
//!
//! canonical:
//!   version: 1
//!   normalize_unicode: true
//!
//! perceptual:
//!   version: 1
//!   levels:
//!     - { window: 1, severity: 1, label: "word-level" }
//!     - { window: 3, severity: 2, label: "phrase-level" }
//!     - { window: 5, severity: 3, label: "sentence-level" }
//!   base: 1000003
//!   modulus: 1000000007
//!   seed: 17297687000019483309
//!   verify_matches: false
//!
//! thresholds:
//!   low: 15
//!   moderate: 40
//!   high: 60
//!   very_high: 85
//! ```

use std::fs;
use std::path::Path;

use canonical::CanonicalizeConfig;
use matcher::{severity_label, Detector, ThresholdConfig};
use perceptual::{MatchLevel, PerceptualConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for a detection run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PlagiscanConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub canonical: CanonicalYamlConfig,

    #[serde(default)]
    pub perceptual: PerceptualYamlConfig,

    #[serde(default)]
    pub thresholds: ThresholdYamlConfig,
}

impl PlagiscanConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PlagiscanConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration. Run again after editing fields in place.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.canonical.validate()?;
        self.perceptual.validate()?;
        self.thresholds.validate()?;

        Ok(())
    }

    pub fn canonical_config(&self) -> CanonicalizeConfig {
        self.canonical.to_config()
    }

    pub fn perceptual_config(&self) -> PerceptualConfig {
        self.perceptual.to_config()
    }

    pub fn threshold_config(&self) -> ThresholdConfig {
        self.thresholds.to_config()
    }

    /// Build a detector from every section.
    pub fn detector(&self) -> Detector {
        Detector::new(
            self.canonical_config(),
            self.perceptual_config(),
            self.threshold_config(),
        )
    }
}

impl Default for PlagiscanConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            canonical: CanonicalYamlConfig::default(),
            perceptual: PerceptualYamlConfig::default(),
            thresholds: ThresholdYamlConfig::default(),
        }
    }
}

/// Canonicalization stage YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "true_value")]
    pub normalize_unicode: bool,
}

impl CanonicalYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "canonical.version must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    fn to_config(&self) -> CanonicalizeConfig {
        CanonicalizeConfig {
            version: self.version,
            normalize_unicode: self.normalize_unicode,
        }
    }
}

impl Default for CanonicalYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
        }
    }
}

/// One match level as written in YAML. The label defaults to the standard
/// name for the severity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelYamlConfig {
    pub window: usize,
    pub severity: u8,
    #[serde(default)]
    pub label: Option<String>,
}

impl LevelYamlConfig {
    fn to_level(&self) -> MatchLevel {
        let label = self
            .label
            .clone()
            .unwrap_or_else(|| severity_label(self.severity).to_string());
        MatchLevel::new(self.window, self.severity, label)
    }
}

/// K-gram matching YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PerceptualYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_levels")]
    pub levels: Vec<LevelYamlConfig>,

    #[serde(default = "default_base")]
    pub base: u64,

    #[serde(default = "default_modulus")]
    pub modulus: u64,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub verify_matches: bool,
}

impl PerceptualYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "perceptual.version must be >= 1".to_string(),
            ));
        }
        self.to_config()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("perceptual: {err}")))
    }

    fn to_config(&self) -> PerceptualConfig {
        PerceptualConfig {
            version: self.version,
            levels: self.levels.iter().map(LevelYamlConfig::to_level).collect(),
            base: self.base,
            modulus: self.modulus,
            seed: self.seed,
            verify_matches: self.verify_matches,
        }
    }
}

impl Default for PerceptualYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            levels: default_levels(),
            base: default_base(),
            modulus: default_modulus(),
            seed: default_seed(),
            verify_matches: false,
        }
    }
}

/// Classification cut points in percent.
///
/// Each value must lie in `[0, 100]`. Values that are not ascending are
/// accepted; the detector logs a warning and some bands become unreachable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThresholdYamlConfig {
    #[serde(default = "default_low")]
    pub low: f64,

    #[serde(default = "default_moderate")]
    pub moderate: f64,

    #[serde(default = "default_high")]
    pub high: f64,

    #[serde(default = "default_very_high")]
    pub very_high: f64,
}

impl ThresholdYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        let named = [
            ("low", self.low),
            ("moderate", self.moderate),
            ("high", self.high),
            ("very_high", self.very_high),
        ];
        for (name, value) in named {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigLoadError::Validation(format!(
                    "thresholds.{name} must be within 0..=100, got {value}"
                )));
            }
        }
        Ok(())
    }

    fn to_config(&self) -> ThresholdConfig {
        ThresholdConfig::new(self.low, self.moderate, self.high, self.very_high)
    }
}

impl Default for ThresholdYamlConfig {
    fn default() -> Self {
        Self {
            low: default_low(),
            moderate: default_moderate(),
            high: default_high(),
            very_high: default_very_high(),
        }
    }
}

// Helper functions for serde defaults
fn default_version() -> u32 {
    1
}
fn true_value() -> bool {
    true
}
fn default_levels() -> Vec<LevelYamlConfig> {
    PerceptualConfig::default()
        .levels
        .into_iter()
        .map(|level| LevelYamlConfig {
            window: level.window,
            severity: level.severity,
            label: Some(level.label),
        })
        .collect()
}
fn default_base() -> u64 {
    PerceptualConfig::default().base
}
fn default_modulus() -> u64 {
    PerceptualConfig::default().modulus
}
fn default_seed() -> u64 {
    PerceptualConfig::default().seed
}
fn default_low() -> f64 {
    ThresholdConfig::default().low
}
fn default_moderate() -> f64 {
    ThresholdConfig::default().moderate
}
fn default_high() -> f64 {
    ThresholdConfig::default().high
}
fn default_very_high() -> f64 {
    ThresholdConfig::default().very_high
}
