use std::fs;
use std::path::Path;

use fractal_compiler::{CodegenOptions, PresetStore, Settings};

/// Copy every shipped description document into a scratch store and
/// regenerate it strictly.
fn regenerate_all_in_dir(dir: &Path) {
    assert!(dir.is_dir(), "{} is not a directory", dir.display());

    let scratch = tempfile::tempdir().expect("tempdir");
    let shipped = PresetStore::new(dir);
    let names = shipped
        .list()
        .unwrap_or_else(|e| panic!("cannot list {}: {e}", dir.display()));
    assert!(!names.is_empty(), "no presets found in {}", dir.display());

    let store = PresetStore::with_settings(scratch.path(), Settings::default());
    for name in &names {
        let src = shipped.paths(name).expect("valid name").document;
        let dst = store.paths(name).expect("valid name").document;
        fs::copy(&src, &dst).unwrap_or_else(|e| panic!("cannot copy {}: {e}", src.display()));

        let published = store
            .regenerate(name, &CodegenOptions { strict: true })
            .unwrap_or_else(|e| panic!("{name} failed to generate: {e}"));

        assert!(
            published.generated.sdf.starts_with("float2 sdf(float3 p) {\n"),
            "{name} SDF fragment missing entry point"
        );
        assert!(
            published.generated.driver.contains(&format!("{name}SDF.ush")),
            "{name} driver does not include its SDF fragment"
        );

        let reloaded = store
            .load(name)
            .unwrap_or_else(|e| panic!("{name} failed to reload: {e}"))
            .unwrap_or_else(|| panic!("{name} not found after regeneration"));
        assert_eq!(reloaded, shipped.read_document(name).expect("shipped document"));
    }

    eprintln!("  regenerated {} presets from {}", names.len(), dir.display());
}

#[test]
fn all_presets_generate() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("presets");
    regenerate_all_in_dir(&dir);
}
