//! Render configuration, loadable from JSON.
//!
//! Every struct uses `#[serde(default)]`, so a config file only needs the
//! fields it wants to change:
//!
//! ```json
//! { "render": { "width": 320, "samples": 50 }, "trace": { "max_bounces": 8 } }
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{RenderError, RenderResult};
use crate::tracer::TraceSettings;

/// Errors that can occur while loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(#[from] RenderError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Image size, sampling and scheduling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Traces averaged per pixel
    pub samples: u32,
    /// Worker threads
    pub threads: u32,
    /// Time between progress snapshots, in milliseconds (at least 1)
    pub snapshot_interval_ms: u64,
    /// Fixed seed for reproducible renders; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
            samples: 5,
            threads: 4,
            snapshot_interval_ms: 1000,
            seed: None,
        }
    }
}

impl RenderConfig {
    /// Set the output resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set samples per pixel.
    pub fn with_samples(mut self, samples: u32) -> Self {
        self.samples = samples;
        self
    }

    /// Set the worker count.
    pub fn with_threads(mut self, threads: u32) -> Self {
        self.threads = threads;
        self
    }

    /// Fix the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn snapshot_interval(&self) -> Duration {
        Duration::from_millis(self.snapshot_interval_ms)
    }

    /// Check that the configuration describes a renderable image.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if self.samples == 0 {
            return Err(RenderError::ZeroSamples);
        }
        if self.threads == 0 {
            return Err(RenderError::ZeroThreads);
        }
        if self.snapshot_interval_ms == 0 {
            return Err(RenderError::ZeroSnapshotInterval);
        }
        Ok(())
    }
}

/// Everything a render needs besides the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub trace: TraceSettings,
}

impl Config {
    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.render.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading config from {}", path.display());

        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;

        log::debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
