use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// All errors produced by the fractal compiler.
#[derive(Debug, Error)]
pub enum FractalError {
    /// Catalog lookup on a kind outside the known vocabulary.
    #[error("unknown kind: {0}")]
    UnknownKind(String),

    /// No preset exists under the requested name.
    #[error("no preset named '{0}'")]
    NotFound(String),

    /// Description document exists but does not parse.
    #[error("malformed description document {}: {reason}", path.display())]
    MalformedDocument { path: PathBuf, reason: String },

    /// Preset name cannot be used as a single path component.
    #[error("invalid preset name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// Saving would replace tags the catalog does not recognise with a
    /// placeholder, losing them from the description document.
    #[error("preset '{0}' holds unrecognised kinds; refusing to overwrite its document")]
    UnrecognisedKinds(String),

    /// Operation index past the end of the fold chain.
    #[error("operation index {index} out of range (chain has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("file watcher: {0}")]
    Watch(#[from] notify::Error),

    /// Settings file could not be read or decoded.
    #[error("settings {}: {reason}", path.display())]
    Settings { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, FractalError>;

/// Shorthand constructors.
impl FractalError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_name(name: &str, reason: &'static str) -> Self {
        Self::InvalidName {
            name: name.to_string(),
            reason,
        }
    }

    /// True for the two "nothing usable on disk" outcomes of a preset lookup.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::MalformedDocument { .. })
    }
}
