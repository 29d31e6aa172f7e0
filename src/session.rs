//! Editing session. Owns the working configuration and turns the host's
//! "name changed" and "generate" actions into store calls.

use tracing::info;

use crate::codegen::CodegenOptions;
use crate::error::Result;
use crate::model::{validate_name, FractalConfig};
use crate::store::{PresetStore, Published};

/// What a rename did to the working configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameOutcome {
    /// A preset with the new name existed and replaced the chain and terminal.
    Loaded,
    /// Nothing usable under the new name; only the name changed.
    Kept,
}

#[derive(Debug)]
pub struct Session {
    store: PresetStore,
    config: FractalConfig,
}

impl Session {
    pub fn new(store: PresetStore) -> Self {
        Self {
            store,
            config: FractalConfig::default(),
        }
    }

    pub fn store(&self) -> &PresetStore {
        &self.store
    }

    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut FractalConfig {
        &mut self.config
    }

    /// Switch to `name`, pulling in its saved preset if there is one.
    ///
    /// Artifacts under the previous name stay on disk.
    pub fn rename(&mut self, name: &str) -> Result<RenameOutcome> {
        validate_name(name)?;
        match self.store.load(name)? {
            Some(loaded) => {
                info!(name, operations = loaded.operations.len(), "loaded preset on rename");
                self.config = loaded;
                Ok(RenameOutcome::Loaded)
            }
            None => {
                self.config.name = name.to_string();
                Ok(RenameOutcome::Kept)
            }
        }
    }

    /// Write fragments and description document for the working preset.
    pub fn generate(&self, options: &CodegenOptions) -> Result<Published> {
        self.store.publish(&self.config, options)
    }
}
