//! Heuristic weights for scoring simulated grids.
//!
//! The fitness of a grid is a weighted sum of its features plus a reward for
//! the rows the placement cleared. Weights are plain configuration: they can
//! be built in code or loaded from JSON.
//!
//! ```
//! use tetrai_engine::SearchWeights;
//!
//! let w = SearchWeights::from_json_str(r#"{ "holes": -1.5 }"#).unwrap();
//! assert_eq!(w.holes, -1.5);
//! assert_eq!(w.bumpiness, SearchWeights::default().bumpiness);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::BoardFeatures;

/// Errors raised while loading weights
#[derive(Debug, Error)]
pub enum WeightsError {
    #[error("failed to read weights file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse weights: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("weight `{0}` is not a finite number")]
    NonFinite(&'static str),
}

/// Feature weights.
///
/// Defaults are the widely used hand-tuned set for aggregate height, holes,
/// bumpiness and cleared lines. Missing fields in JSON fall back to them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchWeights {
    pub lines_cleared: f64,
    pub aggregate_height: f64,
    pub holes: f64,
    pub bumpiness: f64,
}

impl Default for SearchWeights {
    fn default() -> Self {
        Self {
            lines_cleared: 0.760666,
            aggregate_height: -0.510066,
            holes: -0.35663,
            bumpiness: -0.184483,
        }
    }
}

impl SearchWeights {
    /// Parse and validate weights from a JSON object
    pub fn from_json_str(json: &str) -> Result<Self, WeightsError> {
        let weights: Self = serde_json::from_str(json)?;
        weights.validate()?;
        Ok(weights)
    }

    /// Read weights from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, WeightsError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject NaN and infinite weights; they would break the best/worst ordering
    pub fn validate(&self) -> Result<(), WeightsError> {
        let fields = [
            ("lines_cleared", self.lines_cleared),
            ("aggregate_height", self.aggregate_height),
            ("holes", self.holes),
            ("bumpiness", self.bumpiness),
        ];
        for (name, value) in fields {
            if !value.is_finite() {
                return Err(WeightsError::NonFinite(name));
            }
        }
        Ok(())
    }

    /// Fitness of a grid that a placement produced while clearing `lines_cleared` rows
    pub fn score(&self, features: &BoardFeatures, lines_cleared: u32) -> f64 {
        lines_cleared as f64 * self.lines_cleared
            + features.aggregate_height as f64 * self.aggregate_height
            + features.holes as f64 * self.holes
            + features.bumpiness as f64 * self.bumpiness
    }
}
