//! Description document: the persisted form of a preset's fold chain and
//! terminal. Field names match the editor plugin's exported JSON so
//! existing `_Conf.json` files load unchanged.

use serde::{Deserialize, Serialize};

use crate::kinds::{FoldKind, SdfKind};
use crate::model::FractalConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetDocument {
    #[serde(rename = "fractalConfig", default)]
    pub operations: Vec<FoldKind>,
    /// Absent in hand-written documents; falls back like a fresh tool.
    #[serde(rename = "lastSDF", default)]
    pub terminal: SdfKind,
}

impl PresetDocument {
    pub fn from_config(config: &FractalConfig) -> Self {
        Self {
            operations: config.operations.clone(),
            terminal: config.terminal,
        }
    }

    /// The name lives in the file name, not the document.
    pub fn into_config(self, name: &str) -> FractalConfig {
        FractalConfig {
            name: name.to_string(),
            operations: self.operations,
            terminal: self.terminal,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}
