//! Output Configuration Module
//!
//! In-process settings controlling how a generated keyset is rendered.
//! Nothing here is read from files or the environment: the generator binary
//! always runs with `OutputConfig::default()`, which is the plain-text form.

use serde::{Deserialize, Serialize};

/// Rendering format for a keyset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Header line followed by four `label: base64` lines
    #[default]
    Text,
    /// Pretty-printed JSON record keyed by the same labels
    Json,
}

/// Rendering settings used by [`crate::output::render`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Selected output format
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputConfig {
    /// Configuration for the JSON record form.
    pub fn json() -> Self {
        Self {
            format: OutputFormat::Json,
        }
    }
}
