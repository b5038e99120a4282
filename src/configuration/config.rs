//! Configuration types for loading collision scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ArenaConfig`]      – size of the walled rectangle, in pixels
//! - [`BodiesConfig`]     – how many bodies to spawn and their shared properties
//! - [`ParametersConfig`] – numerical parameters (sub-step size, seed, retry cap)
//! - [`ScenarioConfig`]   – top-level wrapper, plus the optional background image
//!
//! Every field has a default, so an empty file (or no file at all) gives the
//! stock demo: ten bodies of radius 20 in a 550 x 550 arena.
//!
//! # YAML format
//!
//! ```yaml
//! arena:
//!   width: 550.0
//!   height: 550.0
//!
//! bodies:
//!   count: 10
//!   radius: 20.0
//!   mass: 1.0
//!   average_speed: 10.0     # initial speed of every body, px/s
//!
//! parameters:
//!   h0: 0.005               # physics sub-step, seconds
//!   seed: 42                # omit for a different layout each run
//!   max_placement_attempts: 100000   # omit to retry placement forever
//!
//! background: "background.jpg"       # relative to assets/, omit for a solid fill
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self { width: 550.0, height: 550.0 }
    }
}

/// Shared properties of all spawned bodies
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BodiesConfig {
    pub count: usize,
    pub radius: f64,
    pub mass: f64,
    pub average_speed: f64, // speed magnitude, direction is random per body
}

impl Default for BodiesConfig {
    fn default() -> Self {
        Self {
            count: 10,
            radius: 20.0,
            mass: 1.0,
            average_speed: 10.0,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub h0: f64, // physics sub-step size
    pub seed: Option<u64>, // deterministic seed to make runs reproducable
    pub max_placement_attempts: Option<u64>,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            h0: 0.005,
            seed: None,
            max_placement_attempts: None,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub arena: ArenaConfig,
    pub bodies: BodiesConfig,
    pub parameters: ParametersConfig,
    pub background: Option<String>, // asset path, None -> solid fill
}

impl ScenarioConfig {
    /// Read and validate a scenario file.
    pub fn load(path: &Path) -> Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a scenario from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let cfg: ScenarioConfig = serde_yaml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every option against its allowed range.
    ///
    /// Density is not checked: a crowded arena makes placement slow (or,
    /// with `max_placement_attempts`, fail), not invalid.
    pub fn validate(&self) -> Result<()> {
        let a = &self.arena;
        let b = &self.bodies;
        let p = &self.parameters;

        if b.count == 0 {
            return Err(invalid("bodies.count must be > 0"));
        }
        if !(a.width.is_finite() && a.width > 0.0 && a.height.is_finite() && a.height > 0.0) {
            return Err(invalid("arena width and height must be finite and > 0"));
        }
        if !b.radius.is_finite() || b.radius <= 0.0 {
            return Err(invalid("bodies.radius must be finite and > 0"));
        }
        if !b.mass.is_finite() || b.mass <= 0.0 {
            return Err(invalid("bodies.mass must be finite and > 0"));
        }
        if !b.average_speed.is_finite() {
            return Err(invalid("bodies.average_speed must be finite"));
        }
        if 2.0 * b.radius > a.width || 2.0 * b.radius > a.height {
            return Err(invalid("arena must be at least 2 * radius in each dimension"));
        }
        if !p.h0.is_finite() || p.h0 <= 0.0 {
            return Err(invalid("parameters.h0 must be finite and > 0"));
        }
        if p.max_placement_attempts == Some(0) {
            return Err(invalid("parameters.max_placement_attempts must be > 0 when set"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> Error {
    Error::InvalidParam(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_stock_demo() -> Result<()> {
        let cfg = ScenarioConfig::from_yaml_str("{}")?;
        assert_eq!(cfg, ScenarioConfig::default());
        assert_eq!(cfg.bodies.count, 10);
        assert_eq!(cfg.arena.width, 550.0);
        assert_eq!(cfg.parameters.h0, 0.005);
        assert!(cfg.background.is_none());
        Ok(())
    }

    #[test]
    fn partial_sections_keep_other_defaults() -> Result<()> {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  count: 3\nparameters:\n  seed: 9\nbackground: bg.png\n",
        )?;
        assert_eq!(cfg.bodies.count, 3);
        assert_eq!(cfg.bodies.radius, 20.0);
        assert_eq!(cfg.parameters.seed, Some(9));
        assert_eq!(cfg.background.as_deref(), Some("bg.png"));
        Ok(())
    }

    #[test]
    fn rejects_bad_values() {
        let cases = [
            "bodies:\n  count: 0\n",
            "bodies:\n  radius: -1.0\n",
            "bodies:\n  mass: 0.0\n",
            "arena:\n  width: 30.0\n",
            "parameters:\n  h0: 0.0\n",
            "parameters:\n  max_placement_attempts: 0\n",
        ];
        for case in cases {
            let err = ScenarioConfig::from_yaml_str(case).unwrap_err();
            assert!(matches!(err, Error::InvalidParam(_)), "{case}: {err}");
        }
    }

    #[test]
    fn malformed_yaml_is_a_yaml_error() {
        let err = ScenarioConfig::from_yaml_str("bodies: [").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }
}
