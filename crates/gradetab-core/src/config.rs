//! Workspace configuration
//!
//! Optional `gradetab.toml` in the root directory. Every field has a
//! sensible default, so a missing file is not an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Config file name under the root directory
pub const CONFIG_FILE: &str = "gradetab.toml";

/// Gradetab configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding `<user>Grades.txt` files, relative to the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grades_dir: Option<String>,

    /// Minor-assessment weight used by the add flow when none is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_minor_weight: Option<f64>,
}

impl Config {
    /// Load config from the root directory; defaults when the file is
    /// absent
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write config to the root directory
    pub fn save(&self, root: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(root.join(CONFIG_FILE), content)?;
        Ok(())
    }

    /// Resolve the directory grade files live in
    pub fn resolve_grades_dir(&self, root: &Path) -> PathBuf {
        match &self.grades_dir {
            Some(dir) => root.join(dir),
            None => root.to_path_buf(),
        }
    }
}
