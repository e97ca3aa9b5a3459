use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use dateseq_calendar::DEFAULT_MAX_SPAN;

/// Top-level dateseq configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DateseqConfig {
    /// Sequence defaults.
    #[serde(default)]
    pub sequence: SequenceToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceToml {
    #[serde(default = "default_true")]
    pub include_weekends: bool,
    #[serde(default = "default_order")]
    pub order: String,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default = "default_max_span")]
    pub max_span: usize,
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for SequenceToml {
    fn default() -> Self {
        Self {
            include_weekends: true,
            order: default_order(),
            format: None,
            max_span: default_max_span(),
            exclude: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_order() -> String {
    "asc".to_string()
}
fn default_max_span() -> usize {
    DEFAULT_MAX_SPAN
}

/// Reads the configuration file, or returns defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<DateseqConfig> {
    let Some(path) = path else {
        return Ok(DateseqConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
