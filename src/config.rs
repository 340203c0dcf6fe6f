//! Lesson settings.
//!
//! The binaries take no arguments and run on [`Config::default`], whose
//! values are the constants the lessons were written around. Tests and
//! library callers can load the same structure from TOML.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{LessonError, Result};
use crate::options::{with_config_a, with_config_b, with_config_c, ServerOption};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub server: ServerConfig,
}

/// Settings for the generator/consumer lesson.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Values the producer sends, in order.
    pub values: Vec<i32>,
    /// Blocking receives the consumer performs.
    pub receives: usize,
    /// Pause after every send, in milliseconds.
    pub delay_ms: u64,
}

impl PipelineConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// True when the consumer asks for more values than will ever be sent.
    pub fn stalls(&self) -> bool {
        self.receives > self.values.len()
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            values: vec![1, 2, 3],
            receives: 4,
            delay_ms: 5_000,
        }
    }
}

/// Settings for the functional-options lesson.
///
/// Unset fields produce no option, so the server keeps its own default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub config_a: Option<String>,
    pub config_b: Option<String>,
    pub config_c: Option<String>,
}

impl ServerConfig {
    pub fn into_options(self) -> Vec<ServerOption> {
        let mut options = Vec::new();
        if let Some(a) = self.config_a {
            options.push(with_config_a(a));
        }
        if let Some(b) = self.config_b {
            options.push(with_config_b(b));
        }
        if let Some(c) = self.config_c {
            options.push(with_config_c(c));
        }
        options
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            config_a: Some("123".to_string()),
            config_b: None,
            config_c: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LessonError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
