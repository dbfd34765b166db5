//! Engine tuning configuration.
//!
//! All knobs have working defaults; a TOML file is only needed to override
//! them:
//!
//! ```toml
//! epsilon = 1e-6             # join continuity tolerance
//! orientation_epsilon = 1e-6 # undirected-slope colinearity tolerance
//! coarse_cull = true         # conservative pre-filter (results identical off)
//! ```

use crate::core::math::DEFAULT_EPSILON;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tolerances and toggles for the visibility pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Tolerance for the endpoint-continuity check when joining visible
    /// arcs. Never used for angle partitioning, which is exact.
    pub epsilon: f64,
    /// Tolerance for the undirected-slope fallback of the colinearity test.
    pub orientation_epsilon: f64,
    /// Run the coarse distance cull before splitting. Disabling it must not
    /// change the result, only the amount of work.
    pub coarse_cull: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            orientation_epsilon: DEFAULT_EPSILON,
            coarse_cull: true,
        }
    }
}

impl VisibilityConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }
}
