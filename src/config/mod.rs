// file: src/config/mod.rs
// version: 1.0.0
// guid: 6956291b-40ca-4529-b6f5-1d67a8fecee2

//! Configuration module for the weave solver
//!
//! Handles loading and validation of run configurations.

pub mod loader;

pub use loader::ConfigLoader;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WeaveError};

/// Settings for a solver run that are not part of the instance range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Directory for solution records, no records are written when unset
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Directory for rendered plots
    #[serde(default)]
    pub plot_dir: Option<PathBuf>,
    /// Re-check every solution after solving
    #[serde(default = "default_true")]
    pub certify: bool,
    /// Show a progress bar when solving more than one instance
    #[serde(default = "default_true")]
    pub progress: bool,
}

fn default_true() -> bool {
    true
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            plot_dir: None,
            certify: true,
            progress: true,
        }
    }
}

impl RunConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        for (name, dir) in [("output_dir", &self.output_dir), ("plot_dir", &self.plot_dir)] {
            if let Some(path) = dir {
                if path.as_os_str().is_empty() {
                    return Err(WeaveError::validation(format!("{name} cannot be empty")));
                }
            }
        }
        Ok(())
    }
}
