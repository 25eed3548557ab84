use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::constants::{
    DEFAULT_CONTAINER_WEIGHT, DEFAULT_RATIO, FINE_TUNE_PRECISION, FINE_TUNE_STEP,
    SLIDER_MAX_PERCENT, SLIDER_MIN_PERCENT,
};
use crate::engine::is_ratio_in_range;
use crate::error::{CalcError, Result};

/// User-tunable calculator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Coco fraction a session starts with.
    pub default_ratio: f64,

    /// Ratio change per fine-tune step.
    pub fine_tune_step: f64,

    /// Empty weight pre-filled into new containers, in grams.
    pub default_container_weight: f64,

    /// Lowest coco percent the ratio prompt accepts.
    pub slider_min_percent: f64,

    /// Highest coco percent the ratio prompt accepts.
    pub slider_max_percent: f64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            default_ratio: DEFAULT_RATIO,
            fine_tune_step: FINE_TUNE_STEP,
            default_container_weight: DEFAULT_CONTAINER_WEIGHT,
            slider_min_percent: SLIDER_MIN_PERCENT,
            slider_max_percent: SLIDER_MAX_PERCENT,
        }
    }
}

impl CalcConfig {
    pub fn validate(&self) -> Result<()> {
        if !is_ratio_in_range(self.default_ratio) {
            return Err(CalcError::InvalidConfig(format!(
                "default_ratio must be within [0, 1], got {}",
                self.default_ratio
            )));
        }

        let step = self.fine_tune_step;
        if !(step.is_finite() && step > 0.0 && step <= 1.0) {
            return Err(CalcError::InvalidConfig(format!(
                "fine_tune_step must be within (0, 1], got {}",
                step
            )));
        }

        // Fine-tuned ratios are rounded to this grid, so the step must sit on it.
        let units = step * FINE_TUNE_PRECISION;
        if units.round() < 1.0 || (units - units.round()).abs() > 1e-6 {
            return Err(CalcError::InvalidConfig(format!(
                "fine_tune_step must be a multiple of {}, got {}",
                1.0 / FINE_TUNE_PRECISION,
                step
            )));
        }

        if !(self.default_container_weight.is_finite() && self.default_container_weight >= 0.0) {
            return Err(CalcError::InvalidConfig(format!(
                "default_container_weight must be >= 0, got {}",
                self.default_container_weight
            )));
        }

        let (min, max) = (self.slider_min_percent, self.slider_max_percent);
        if !(min.is_finite() && max.is_finite() && 0.0 <= min && min < max && max <= 100.0) {
            return Err(CalcError::InvalidConfig(format!(
                "slider range must satisfy 0 <= min < max <= 100, got {}..{}",
                min, max
            )));
        }

        Ok(())
    }

    /// Whether a coco percent lies within the slider range.
    pub fn accepts_percent(&self, percent: f64) -> bool {
        (self.slider_min_percent..=self.slider_max_percent).contains(&percent)
    }
}

/// Load settings from a JSON file.
///
/// A missing file yields the defaults; missing fields take their defaults.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<CalcConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CalcConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: CalcConfig = serde_json::from_str(&content)?;
    config.validate()?;

    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Save settings to a JSON file.
pub fn save_config<P: AsRef<Path>>(path: P, config: &CalcConfig) -> Result<()> {
    config.validate()?;
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_config(dir.path().join("absent.json")).unwrap();
        assert_eq!(config, CalcConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"default_ratio": 0.5}"#).unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.default_ratio, 0.5);
        assert_eq!(config.default_container_weight, 66.0);
        assert_eq!(config.fine_tune_step, 0.001);
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"default_ratio": 1.5}"#).unwrap();

        assert!(matches!(
            load_config(file.path()),
            Err(CalcError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_fine_tune_step_must_fit_rounding() {
        for step in [1e-7, 1.5e-6] {
            let config = CalcConfig {
                fine_tune_step: step,
                ..CalcConfig::default()
            };
            assert!(matches!(config.validate(), Err(CalcError::InvalidConfig(_))));
        }

        for step in [1e-6, 0.0005, 0.001, 0.01] {
            let config = CalcConfig {
                fine_tune_step: step,
                ..CalcConfig::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_save_and_reload() {
        let file = NamedTempFile::new().unwrap();
        let config = CalcConfig {
            default_container_weight: 120.0,
            ..CalcConfig::default()
        };

        save_config(file.path(), &config).unwrap();
        assert_eq!(load_config(file.path()).unwrap(), config);
    }

    #[test]
    fn test_accepts_percent() {
        let config = CalcConfig::default();
        assert!(config.accepts_percent(20.0));
        assert!(config.accepts_percent(80.0));
        assert!(!config.accepts_percent(85.0));
    }
}
