pub mod catalog;
pub mod codegen;
pub mod document;
pub mod error;
pub mod kinds;
pub mod logging;
pub mod model;
pub mod session;
pub mod settings;
pub mod store;
pub mod watch;

pub use codegen::{generate, generate_with, CodegenOptions, Generated};
pub use error::{FractalError, Result};
pub use kinds::{FoldKind, SdfKind};
pub use model::FractalConfig;
pub use session::{RenameOutcome, Session};
pub use settings::Settings;
pub use store::{ArtifactPaths, PresetStore, Published};
