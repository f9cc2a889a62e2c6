use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use nray_renderer::Config;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments. Flags override values from `--config`.
#[derive(Debug, Parser)]
#[command(name = "nray")]
#[command(about = "Render the nray demo scene to a PNG")]
pub struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output PNG, rewritten on every snapshot
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Samples per pixel [default: 50]
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum bounces per path
    #[arg(long, short = 'b')]
    pub bounces: Option<u32>,

    /// Worker threads
    #[arg(long, short = 't')]
    pub threads: Option<u32>,

    /// Seed for a reproducible render
    #[arg(long)]
    pub seed: Option<u64>,

    /// Milliseconds between snapshots written to the output
    #[arg(long)]
    pub snapshot_interval_ms: Option<u64>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Samples used for the demo scene when neither a flag nor a file sets them.
pub const DEMO_SAMPLES: u32 = 50;

impl Args {
    /// Start from the config file (or the demo defaults) and apply flags.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => demo_config(),
        };

        let render = &mut config.render;
        if let Some(width) = self.width {
            render.width = width;
        }
        if let Some(height) = self.height {
            render.height = height;
        }
        if let Some(samples) = self.samples {
            render.samples = samples;
        }
        if let Some(threads) = self.threads {
            render.threads = threads;
        }
        if let Some(seed) = self.seed {
            render.seed = Some(seed);
        }
        if let Some(interval) = self.snapshot_interval_ms {
            render.snapshot_interval_ms = interval;
        }
        if let Some(bounces) = self.bounces {
            config.trace.max_bounces = bounces;
        }

        config
            .render
            .validate()
            .context("invalid render settings")?;
        Ok(config)
    }
}

/// The demo box is lit by a single emitter, so it renders on black.
fn demo_config() -> Config {
    let mut config = Config::default();
    config.render.samples = DEMO_SAMPLES;
    config.trace.background = nray_renderer::Color::BLACK;
    config
}
