use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::converters::IdPolicy;

/// Application configuration module
/// This module handles loading and validating the conversion settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Text appended to the `WEBVTT` line of every output file
    #[serde(default)]
    pub header_text: String,

    /// Text of the `NOTE` block written after the header
    #[serde(default)]
    pub comment: String,

    /// Cue id assignment when source cues are skipped
    #[serde(default)]
    pub id_policy: IdPolicy,

    /// Extension of source files picked up in directory mode
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Extension of written files
    #[serde(default = "default_output_extension")]
    pub output_extension: String,

    /// Maximum number of files converted at once in directory mode
    #[serde(default = "default_concurrent_files")]
    pub concurrent_files: usize,
}

/// Log level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_extension() -> String {
    "xml".to_string()
}

fn default_output_extension() -> String {
    "vtt".to_string()
}

fn default_concurrent_files() -> usize {
    4
}

impl Config {
    /// Load the JSON config at `path`, or defaults when the file is missing
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.concurrent_files == 0 {
            return Err(anyhow!("concurrent_files must be at least 1"));
        }

        for (name, ext) in [
            ("source_extension", &self.source_extension),
            ("output_extension", &self.output_extension),
        ] {
            if ext.is_empty() {
                return Err(anyhow!("{} must not be empty", name));
            }
            if ext.starts_with('.') || ext.contains('/') || ext.contains('\\') {
                return Err(anyhow!("{} must be a bare extension like `xml`, got `{}`", name, ext));
            }
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            header_text: String::new(),
            comment: String::new(),
            id_policy: IdPolicy::default(),
            source_extension: default_source_extension(),
            output_extension: default_output_extension(),
            concurrent_files: default_concurrent_files(),
        }
    }
}
