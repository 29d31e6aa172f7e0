//! Generator settings: file extensions and shader include paths.
//!
//! Every field has a default matching the stock plugin layout, so an empty
//! JSON object (or no settings file at all) is valid.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FractalError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Extension of both generated shader fragments.
    pub fragment_ext: String,
    /// Extension of the description document.
    pub document_ext: String,
    /// Virtual shader directory the includes are resolved against.
    pub include_prefix: String,
    /// Stem of the shared fold/SDF function library.
    pub library_include: String,
    /// Stem of the ray-marching driver included last.
    pub driver_include: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fragment_ext: "ush".into(),
            document_ext: "json".into(),
            include_prefix: "/PluginShaders/".into(),
            library_include: "SDFractalLibrary".into(),
            driver_include: "RayMarchingFractal".into(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| FractalError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| FractalError::Settings {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// `"<prefix><stem>.<ext>"` as written inside an `#include`.
    pub fn include_path(&self, stem: &str) -> String {
        format!("{}{}.{}", self.include_prefix, stem, self.fragment_ext)
    }
}
