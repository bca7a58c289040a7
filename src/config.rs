//! File-based run configuration for the `tryon` binary.

use std::{fs::File, io::BufReader, path::Path};

use crate::assets::normalize::NormalizeOpts;
use crate::compose::params::{BlendMode, ComposeOptions, PlacementParams, ResampleFilter};
use crate::foundation::error::{TryOnError, TryOnResult};

/// Everything a compose run needs besides the two images.
///
/// Every field has a default, so a config file only lists what it changes:
///
/// ```json
/// { "placement": { "x_offset": 40, "y_offset": 120, "scale": 0.6, "opacity": 0.85 },
///   "blend": "source_over", "normalize": {} }
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TryOnConfig {
    pub placement: PlacementParams,
    pub filter: ResampleFilter,
    pub blend: BlendMode,
    /// When set, both inputs are normalized before compositing.
    pub normalize: Option<NormalizeOpts>,
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (e.g. "info", "tryon=debug"). `RUST_LOG` wins when set.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl TryOnConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> TryOnResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            TryOnError::validation(format!("parse config '{}': {e}", path.display()))
        })?;
        Ok(cfg)
    }

    pub fn validate(&self) -> TryOnResult<()> {
        self.placement.validate()?;
        if let Some(n) = &self.normalize {
            n.validate()?;
        }
        Ok(())
    }

    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            filter: self.filter,
            blend: self.blend,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
