//! Simulation settings
//!
//! Loaded from an optional JSON file; missing fields fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FINISH_DELAY, MAX_STEP};
use crate::error::SimError;
use crate::sim::Level;

/// Tunable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grace period after the outcome before a level reports finished (seconds)
    pub finish_delay: f32,
    /// Longest single simulation step (seconds)
    pub max_step: f32,
    /// Seed for coin spring phases
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            finish_delay: FINISH_DELAY,
            max_step: MAX_STEP,
            seed: 0,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.max_step.is_finite() || self.max_step <= 0.0 {
            return Err(SimError::InvalidSettings(format!(
                "max_step must be finite and positive, got {}",
                self.max_step
            )));
        }
        if !self.finish_delay.is_finite() {
            return Err(SimError::InvalidSettings(format!(
                "finish_delay must be finite, got {}",
                self.finish_delay
            )));
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Apply level-scoped settings to a freshly parsed level
    pub fn apply(&self, level: &mut Level) {
        level.set_finish_delay(self.finish_delay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.finish_delay, 1.0);
        assert_eq!(settings.max_step, 0.05);
        assert_eq!(settings.seed, 0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 99 }"#).unwrap();
        assert_eq!(settings.seed, 99);
        assert_eq!(settings.finish_delay, FINISH_DELAY);
        assert_eq!(settings.max_step, MAX_STEP);
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings {
            finish_delay: 2.5,
            max_step: 0.02,
            seed: 7,
        };
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ seed: }"),
            Err(SimError::Settings(_))
        ));
    }

    #[test]
    fn test_rejects_unusable_max_step() {
        for json in [
            r#"{ "max_step": 0.0 }"#,
            r#"{ "max_step": -0.05 }"#,
        ] {
            assert!(
                matches!(Settings::from_json(json), Err(SimError::InvalidSettings(_))),
                "{json}"
            );
        }

        let settings = Settings {
            max_step: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(SimError::InvalidSettings(_))));
    }

    #[test]
    fn test_rejects_non_finite_finish_delay() {
        let settings = Settings {
            finish_delay: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(SimError::InvalidSettings(_))));
        // Negative is fine: the level finishes on the first decided tick
        assert!(Settings::from_json(r#"{ "finish_delay": -1.0 }"#).is_ok());
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Settings::load("/nonexistent/lava-run-settings.json"),
            Err(SimError::Io(_))
        ));
    }

    #[test]
    fn test_apply() {
        let mut level = Level::new(&[], Vec::new()).unwrap();
        let settings = Settings {
            finish_delay: 3.0,
            ..Default::default()
        };
        settings.apply(&mut level);
        assert_eq!(level.finish_delay(), 3.0);
    }
}
