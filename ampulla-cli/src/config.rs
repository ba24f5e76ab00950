//! Configuration loading from ampulla.toml
//!
//! The configuration is discovered by walking up from the current directory,
//! or given explicitly with `--config`. Every table is optional; missing keys
//! fall back to the published experiment's values.

use ampulla_core::SimulationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name searched for during discovery
pub const CONFIG_FILE_NAME: &str = "ampulla.toml";

/// Ampulla configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AmpullaConfig {
    /// Experiment parameters
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human" or "json"
    #[serde(default = "default_format")]
    pub format: String,
    /// Relative deviation (percent) under which an average counts as reproduced
    #[serde(default = "default_tolerance_percent")]
    pub tolerance_percent: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            tolerance_percent: default_tolerance_percent(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}
fn default_tolerance_percent() -> f64 {
    1.0
}

impl AmpullaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from current directory
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Self::discover_from(&dir)
    }

    /// Walk up from `start` to the first `ampulla.toml`
    ///
    /// An unreadable file ends the search with `None` and a warning.
    pub fn discover_from(start: &Path) -> Option<Self> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return match Self::load(&config_path) {
                    Ok(config) => {
                        tracing::debug!(path = %config_path.display(), "loaded configuration");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(
                            path = %config_path.display(),
                            error = %e,
                            "ignoring unreadable configuration"
                        );
                        None
                    }
                };
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Ampulla Configuration

[simulation]
# Number of simulated organs
samples = 100000
# Fixed seed for reproducible runs (uncomment to enable)
# seed = 42
# minor = major / major_minor_ratio
major_minor_ratio = 1.35
# Thomsen surface-area exponent
sa_exponent = 1.6075
# Share of the ellipsoid surface counted as sensory epithelium
hemisphere_fraction = 0.5

[simulation.major]
# Sampling law: "normal" or "uniform"
law = "normal"
mean = 184.06
std_dev = 42.7
# Inclusive integer range for the uniform law
low = 100
high = 200
# Substituted for negative draws
floor = 56.0

[simulation.depth]
law = "normal"
mean = 69.3
std_dev = 29.1
low = 50
high = 99
floor = 15.0

[simulation.expected]
# Literature averages
major = 184.06
minor = 136.34
depth = 69.3

[output]
# Output format: human or json
format = "human"
# Relative deviation (percent) under which an average counts as reproduced
tolerance_percent = 1.0
"#
        .to_string()
    }
}
