//! Layout parameters
//!
//! Parameters are consumed once when a layout run starts and never change during
//! the run. They can be built in code, or loaded from a JSON/YAML file where every
//! field is optional:
//!
//! ```yaml
//! optimum_distance: 80.0
//! iterations: 250
//! seed: 42
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::io::{FormatRegistry, IoError, IoResult};

/// Default resting distance between adjacent vertices
pub const DEFAULT_OPTIMUM_DISTANCE: f64 = 100.0;

/// Default number of relaxation steps
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Fraction of the summed force applied to a vertex each step
pub const DAMPING: f64 = 0.4;

/// Configuration for one layout run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Resting separation between adjacent vertices (positive)
    pub optimum_distance: f64,
    /// Number of relaxation steps after the initial placement
    pub iterations: usize,
    /// Seed for the initial placement; `None` draws from the OS
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            optimum_distance: DEFAULT_OPTIMUM_DISTANCE,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

impl LayoutConfig {
    pub fn with_optimum_distance(mut self, optimum_distance: f64) -> Self {
        self.optimum_distance = optimum_distance;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject parameters no layout run can use
    pub fn validate(&self) -> LayoutResult<()> {
        if !self.optimum_distance.is_finite() || self.optimum_distance <= 0.0 {
            return Err(LayoutError::InvalidConfiguration(format!(
                "optimum distance must be a positive finite number, got {}",
                self.optimum_distance
            )));
        }
        // The initial placement spans [-d, d]; its width must stay representable.
        if !(2.0 * self.optimum_distance).is_finite() {
            return Err(LayoutError::InvalidConfiguration(format!(
                "optimum distance {} is too large to place vertices",
                self.optimum_distance
            )));
        }
        Ok(())
    }

    /// Load a configuration file, picking the parser from the extension
    ///
    /// The loaded configuration is validated before it is returned.
    pub fn from_path(path: &Path) -> IoResult<Self> {
        let ext = FormatRegistry::extension_from_path(path)
            .ok_or_else(|| IoError::UnknownExtension(path.display().to_string()))?
            .to_ascii_lowercase();
        let content = fs::read_to_string(path)?;

        let config: LayoutConfig = match ext.as_str() {
            "json" => serde_json::from_str(&content).map_err(|e| IoError::Parse(e.to_string()))?,
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| IoError::Parse(e.to_string()))?
            }
            other => return Err(IoError::UnsupportedFormat(other.to_string())),
        };
        config.validate()?;
        Ok(config)
    }
}
