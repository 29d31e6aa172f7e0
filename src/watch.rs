//! Regenerate fragments whenever a description document in the store is
//! created or edited by hand.

use std::collections::BTreeSet;
use std::sync::mpsc;

use notify::{Event, RecursiveMode, Watcher};
use tracing::{error, info, warn};

use crate::codegen::CodegenOptions;
use crate::error::{FractalError, Result};
use crate::store::PresetStore;

/// Preset names whose description documents an event touched.
pub fn affected_presets(store: &PresetStore, event: &Event) -> BTreeSet<String> {
    if !(event.kind.is_create() || event.kind.is_modify()) {
        return BTreeSet::new();
    }
    event
        .paths
        .iter()
        .filter_map(|p| store.name_for_document(p))
        .collect()
}

/// Block forever, regenerating presets as their documents change.
///
/// Per-preset failures are logged and do not stop the watcher.
pub fn run(store: &PresetStore, options: &CodegenOptions) -> Result<()> {
    std::fs::create_dir_all(store.root()).map_err(|e| FractalError::io(store.root(), e))?;
    let root = store
        .root()
        .canonicalize()
        .map_err(|e| FractalError::io(store.root(), e))?;
    let store = PresetStore::with_settings(root, store.settings().clone());

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        // Receiver gone means the loop below already returned.
        let _ = tx.send(res);
    })?;
    watcher.watch(store.root(), RecursiveMode::NonRecursive)?;
    info!(root = %store.root().display(), "watching for description document changes");

    for res in rx {
        let event = match res {
            Ok(event) => event,
            Err(e) => {
                error!(error = %e, "watch error");
                continue;
            }
        };
        for name in affected_presets(&store, &event) {
            match store.regenerate(&name, options) {
                Ok(published) => {
                    for w in &published.generated.warnings {
                        warn!(name = %name, "{w}");
                    }
                }
                Err(e) => error!(name = %name, error = %e, "regeneration failed"),
            }
        }
    }

    drop(watcher);
    Ok(())
}
