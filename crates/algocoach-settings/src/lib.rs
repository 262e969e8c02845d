//! # algocoach-settings
//!
//! **Tier 0 (Pure Settings)**
//!
//! Clap-free settings loaded from `algocoach.toml`.
//!
//! ## What belongs here
//! * Serde types for the `[catalog]` and `[output]` tables
//! * Building the effective pattern catalog from them
//!
//! ## What does NOT belong here
//! * Clap parsing and config-file discovery (use the `algocoach` CLI)
//! * Rendering
//!
//! ## Example
//!
//! ```toml
//! [catalog]
//! builtin = true
//!
//! [[catalog.patterns]]
//! name = "heap"
//! indicator_tokens = ["heap", "priority", "heapq", "push", "pop"]
//! description = "Heap / priority-queue technique"
//!
//! [output]
//! format = "json"
//! language = "python"
//! ```

use std::path::Path;

use algocoach_catalog::PatternCatalog;
use algocoach_types::{AnalysisError, OutputFormat, PatternDefinition};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Name of the settings file looked up in the working directory.
pub const SETTINGS_FILE_NAME: &str = "algocoach.toml";

/// Environment variable naming an explicit settings file.
pub const SETTINGS_ENV_VAR: &str = "ALGOCOACH_CONFIG";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid pattern catalog: {0}")]
    Catalog(#[from] AnalysisError),
}

/// Root settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub catalog: CatalogSettings,
    pub output: OutputSettings,
}

/// The `[catalog]` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
    /// Start from the six built-in techniques.
    pub builtin: bool,

    /// Extra techniques; a name matching a built-in replaces it in place.
    pub patterns: Vec<PatternDefinition>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            builtin: true,
            patterns: Vec::new(),
        }
    }
}

/// The `[output]` table. Unset fields fall back to CLI defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSettings {
    pub format: Option<OutputFormat>,
    pub language: Option<String>,
}

impl Settings {
    /// Parse settings from a TOML string.
    pub fn from_toml(s: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(s)?)
    }

    /// Load settings from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        debug!(path = %path.display(), "loading settings");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Build and validate the effective catalog.
    pub fn build_catalog(&self) -> Result<PatternCatalog, SettingsError> {
        let extra = self.catalog.patterns.clone();
        let catalog = if self.catalog.builtin {
            PatternCatalog::builtin().merged(extra)?
        } else {
            PatternCatalog::new(extra)?
        };
        debug!(
            patterns = catalog.len(),
            builtin = self.catalog.builtin,
            "catalog built"
        );
        Ok(catalog)
    }
}
