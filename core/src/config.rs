//! Externally tunable values of the engine.
//!
//! Everything else (noise tables, formulas) is fixed. Every field has a
//! default, so a config file only needs the values it changes:
//!
//! ```json
//! { "resolution": 100, "function": "Ripple", "shapes": { "ripple": { "amplitude": 0.5 } } }
//! ```

use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{GridSpec, ResolutionBounds};
use crate::error::Result;
use crate::functions::{FunctionId, ShapeParameters};
use crate::stats::{DEFAULT_SAMPLE_WINDOW, MAX_SAMPLE_WINDOW, MIN_SAMPLE_WINDOW};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub bounds: ResolutionBounds,
    /// Initial grid resolution.
    pub resolution: u32,
    /// Function shown at start.
    pub function: FunctionId,
    /// Seconds per transition when none is given explicitly.
    pub transition_duration: f32,
    pub shapes: ShapeParameters,
    /// Seconds over which frame statistics are collected.
    pub stats_window: f32,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            bounds: ResolutionBounds::default(),
            resolution: 10,
            function: FunctionId::SineWave,
            transition_duration: 1.0,
            shapes: ShapeParameters::default(),
            stats_window: DEFAULT_SAMPLE_WINDOW,
        }
    }
}

impl GraphConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut config: GraphConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject bad bounds and resolutions; pull soft values into range.
    pub fn validate(&mut self) -> Result<()> {
        self.bounds.validate()?;
        GridSpec {
            resolution: self.resolution,
        }
        .validate(&self.bounds)?;

        if self.transition_duration.is_nan() || self.transition_duration < 0.0 {
            warn!(
                "transition_duration {} is not a duration, using 0",
                self.transition_duration
            );
            self.transition_duration = 0.0;
        }
        let window = if self.stats_window.is_nan() {
            DEFAULT_SAMPLE_WINDOW
        } else {
            self.stats_window.clamp(MIN_SAMPLE_WINDOW, MAX_SAMPLE_WINDOW)
        };
        if window.to_bits() != self.stats_window.to_bits() {
            warn!("stats_window {} clamped to {}", self.stats_window, window);
            self.stats_window = window;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GraphConfig;
    use crate::error::GraphError;
    use crate::functions::{FunctionId, ShapeParameters};

    #[test]
    fn empty_object_gives_defaults() {
        let config = GraphConfig::from_json_str("{}").unwrap();
        assert_eq!(config, GraphConfig::default());
        assert_eq!(config.bounds.min, 10);
        assert_eq!(config.bounds.max, 1000);
        assert_eq!(config.transition_duration, 1.0);
        assert_eq!(config.shapes, ShapeParameters::default());
    }

    #[test]
    fn partial_overrides() {
        let config = GraphConfig::from_json_str(
            r#"{
                "resolution": 120,
                "function": "BandedSphere",
                "shapes": { "banded_sphere": { "vertical": 8.0 } }
            }"#,
        )
        .unwrap();
        assert_eq!(config.resolution, 120);
        assert_eq!(config.function, FunctionId::BandedSphere);
        assert_eq!(config.shapes.banded_sphere.vertical, 8.0);
        assert_eq!(config.shapes.banded_sphere.horizontal, 4.0);
        assert_eq!(config.shapes.sphere.max_radius, 1.0);
    }

    #[test]
    fn out_of_bounds_resolution_is_an_error() {
        let err = GraphConfig::from_json_str(r#"{ "resolution": 5000 }"#);
        assert!(matches!(err, Err(GraphError::InvalidResolution { .. })));
        let err = GraphConfig::from_json_str(r#"{ "bounds": { "min": 30, "max": 20 } }"#);
        assert!(matches!(err, Err(GraphError::InvalidBounds { .. })));
    }

    #[test]
    fn soft_values_are_clamped() {
        let config = GraphConfig::from_json_str(
            r#"{ "transition_duration": -2.0, "stats_window": 60.0 }"#,
        )
        .unwrap();
        assert_eq!(config.transition_duration, 0.0);
        assert_eq!(config.stats_window, 5.0);
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            GraphConfig::from_json_str("{ resolution: }"),
            Err(GraphError::Json(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            GraphConfig::load("/definitely/not/here.json"),
            Err(GraphError::Io(_))
        ));
    }

    #[test]
    fn serializes_back() {
        let config = GraphConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GraphConfig::from_json_str(&json).unwrap(), config);
    }
}
