//! File-based preset store.
//!
//! Each preset `name` owns three files under the store root:
//! - `<name>.<ext>`: driver fragment (its presence marks the preset as existing)
//! - `<name>SDF.<ext>`: distance-function fragment
//! - `<name>_Conf.<doc-ext>`: description document, the only part read back
//!
//! The store assumes exclusive, serialized access to a given name. Nothing
//! is rolled back if a write fails part way through a publish.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::codegen::{self, CodegenOptions, Generated};
use crate::document::PresetDocument;
use crate::error::{FractalError, Result};
use crate::model::{validate_name, FractalConfig};
use crate::settings::Settings;

const DOCUMENT_SUFFIX: &str = "_Conf";

/// The artifact triple for one preset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub driver: PathBuf,
    pub sdf: PathBuf,
    pub document: PathBuf,
}

impl ArtifactPaths {
    fn iter(&self) -> impl Iterator<Item = &Path> {
        [self.driver.as_path(), self.sdf.as_path(), self.document.as_path()].into_iter()
    }
}

/// Result of writing a preset to disk.
#[derive(Debug, Clone)]
pub struct Published {
    pub paths: ArtifactPaths,
    pub generated: Generated,
}

#[derive(Debug, Clone)]
pub struct PresetStore {
    root: PathBuf,
    settings: Settings,
}

impl PresetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_settings(root, Settings::default())
    }

    pub fn with_settings(root: impl Into<PathBuf>, settings: Settings) -> Self {
        Self {
            root: root.into(),
            settings,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Naming ─────────────────────────────────────────────────────────

    pub fn paths(&self, name: &str) -> Result<ArtifactPaths> {
        validate_name(name)?;
        let ext = &self.settings.fragment_ext;
        Ok(ArtifactPaths {
            driver: self.root.join(format!("{name}.{ext}")),
            sdf: self.root.join(format!("{name}SDF.{ext}")),
            document: self.root.join(format!(
                "{name}{DOCUMENT_SUFFIX}.{}",
                self.settings.document_ext
            )),
        })
    }

    /// Preset name for a description document path inside this store.
    pub fn name_for_document(&self, path: &Path) -> Option<String> {
        if path.parent()? != self.root.as_path() {
            return None;
        }
        let file = path.file_name()?.to_str()?;
        let stem = file.strip_suffix(&format!(".{}", self.settings.document_ext))?;
        let name = stem.strip_suffix(DOCUMENT_SUFFIX)?;
        validate_name(name).ok()?;
        Some(name.to_string())
    }

    // ── Loading ────────────────────────────────────────────────────────

    /// Load the preset stored under `name`.
    ///
    /// `Ok(None)` when there is no driver fragment for that name or its
    /// description document cannot be parsed; the caller keeps whatever it
    /// had. Other I/O failures propagate.
    pub fn load(&self, name: &str) -> Result<Option<FractalConfig>> {
        match self.try_load(name) {
            Ok(config) => Ok(Some(config)),
            Err(e) if e.is_absent() => {
                debug!(name, reason = %e, "no usable preset");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Like [`load`](Self::load), but reports why nothing was loaded.
    pub fn try_load(&self, name: &str) -> Result<FractalConfig> {
        let paths = self.paths(name)?;
        if !exists(&paths.driver)? {
            return Err(FractalError::NotFound(name.to_string()));
        }
        self.read_document(name)
    }

    /// Read the description document without probing for the fragments.
    pub fn read_document(&self, name: &str) -> Result<FractalConfig> {
        let paths = self.paths(name)?;
        let text = match fs::read_to_string(&paths.document) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(self.malformed(&paths.document, "document is missing"));
            }
            Err(e) => return Err(FractalError::io(&paths.document, e)),
        };
        let doc = PresetDocument::from_json(&text)
            .map_err(|e| self.malformed(&paths.document, &e.to_string()))?;
        debug!(name, operations = doc.operations.len(), "loaded preset document");
        Ok(doc.into_config(name))
    }

    fn malformed(&self, path: &Path, reason: &str) -> FractalError {
        warn!(path = %path.display(), reason, "malformed preset document");
        FractalError::MalformedDocument {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    // ── Writing ────────────────────────────────────────────────────────

    /// Write the description document, replacing any previous one.
    ///
    /// Refuses a config holding unrecognised kinds, since those would be
    /// written back as a placeholder tag.
    pub fn save(&self, config: &FractalConfig) -> Result<PathBuf> {
        let paths = self.paths(&config.name)?;
        if config.has_unknown() {
            return Err(FractalError::UnrecognisedKinds(config.name.clone()));
        }
        self.ensure_root()?;
        let json = PresetDocument::from_config(config)
            .to_json()
            .map_err(|e| FractalError::io(&paths.document, io::Error::other(e)))?;
        fs::write(&paths.document, json).map_err(|e| FractalError::io(&paths.document, e))?;
        info!(name = %config.name, path = %paths.document.display(), "saved preset document");
        Ok(paths.document)
    }

    /// Replace both shader fragments for `name`. Fragments belonging to any
    /// other name are left alone.
    pub fn write_fragments(&self, name: &str, generated: &Generated) -> Result<ArtifactPaths> {
        let paths = self.paths(name)?;
        self.check_fragment_collision(name)?;
        self.ensure_root()?;
        remove_if_present(&paths.driver)?;
        remove_if_present(&paths.sdf)?;
        fs::write(&paths.driver, &generated.driver).map_err(|e| FractalError::io(&paths.driver, e))?;
        fs::write(&paths.sdf, &generated.sdf).map_err(|e| FractalError::io(&paths.sdf, e))?;
        debug!(name, driver = %paths.driver.display(), sdf = %paths.sdf.display(), "wrote fragments");
        Ok(paths)
    }

    /// Generate, write both fragments, then save the description document.
    pub fn publish(&self, config: &FractalConfig, options: &CodegenOptions) -> Result<Published> {
        if config.has_unknown() {
            return Err(FractalError::UnrecognisedKinds(config.name.clone()));
        }
        let generated = codegen::generate_with(config, &self.settings, options)?;
        let paths = self.write_fragments(&config.name, &generated)?;
        self.save(config)?;
        info!(
            name = %config.name,
            operations = config.operations.len(),
            terminal = %config.terminal,
            warnings = generated.warnings.len(),
            "published preset"
        );
        Ok(Published { paths, generated })
    }

    /// Rebuild the fragments of `name` from its description document. The
    /// document itself is not rewritten.
    pub fn regenerate(&self, name: &str, options: &CodegenOptions) -> Result<Published> {
        let config = self.read_document(name)?;
        let generated = codegen::generate_with(&config, &self.settings, options)?;
        let paths = self.write_fragments(name, &generated)?;
        info!(name, warnings = generated.warnings.len(), "regenerated fragments");
        Ok(Published { paths, generated })
    }

    /// Delete whichever files of the triple exist. Returns how many went.
    pub fn remove(&self, name: &str) -> Result<usize> {
        let paths = self.paths(name)?;
        let mut removed = 0;
        for path in paths.iter() {
            if remove_if_present(path)? {
                removed += 1;
            }
        }
        info!(name, removed, "removed preset");
        Ok(removed)
    }

    /// Names of every preset with a description document, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(FractalError::io(&self.root, e)),
        };

        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter_map(|e| self.name_for_document(&e.path()))
            .collect();
        names.sort();
        Ok(names)
    }

    /// `<X>SDF.<ext>` is both the distance fragment of `X` and the driver of
    /// `XSDF`, so at most one of the two may be a preset.
    fn check_fragment_collision(&self, name: &str) -> Result<()> {
        if let Some(base) = name.strip_suffix("SDF").filter(|b| validate_name(b).is_ok()) {
            if exists(&self.paths(base)?.document)? {
                return Err(FractalError::invalid_name(
                    name,
                    "driver would overwrite the distance fragment of an existing preset",
                ));
            }
        }
        if exists(&self.paths(&format!("{name}SDF"))?.document)? {
            return Err(FractalError::invalid_name(
                name,
                "distance fragment would overwrite the driver of an existing preset",
            ));
        }
        Ok(())
    }

    fn ensure_root(&self) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|e| FractalError::io(&self.root, e))
    }
}

fn exists(path: &Path) -> Result<bool> {
    path.try_exists().map_err(|e| FractalError::io(path, e))
}

fn remove_if_present(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FractalError::io(path, e)),
    }
}
