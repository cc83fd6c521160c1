//! Optional TOML settings.
//!
//! ```toml
//! [aspects]
//! conjunction = 8.0
//! sextile = 6.0
//! include_ascendant = true
//!
//! [chart]
//! house_system = "equal"
//! fallback_to_mock = true
//! ```
//!
//! Every key is optional; `Settings::default()` is the fixed aspect table
//! with mock fallback enabled.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::aspects::AspectSettings;

/// The only supported house system
pub const EQUAL_HOUSE: &str = "equal";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSettings {
    pub house_system: String,
    /// Serve the deterministic mock chart when the provider fails
    pub fallback_to_mock: bool,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            house_system: EQUAL_HOUSE.to_string(),
            fallback_to_mock: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub aspects: AspectSettings,
    pub chart: ChartSettings,
}

impl Settings {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let settings: Settings = toml::from_str(text).context("Failed to parse astral settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.chart.house_system.eq_ignore_ascii_case(EQUAL_HOUSE) {
            anyhow::bail!(
                "Unsupported house system '{}'; only '{}' is available",
                self.chart.house_system,
                EQUAL_HOUSE
            );
        }
        for (name, orb) in [
            ("conjunction", self.aspects.orbs.conjunction),
            ("opposition", self.aspects.orbs.opposition),
            ("trine", self.aspects.orbs.trine),
            ("square", self.aspects.orbs.square),
            ("sextile", self.aspects.orbs.sextile),
        ] {
            if !orb.is_finite() || orb < 0.0 {
                anyhow::bail!("Orb for {} must be a non-negative number, got {}", name, orb);
            }
        }
        Ok(())
    }
}

/// Read settings from a TOML file.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read settings from {}", path.display()))?;
    let settings = Settings::from_toml_str(&text)?;
    log::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}
