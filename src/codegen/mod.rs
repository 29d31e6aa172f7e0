use tracing::{debug, warn};

use crate::catalog::SENTINEL;
use crate::error::{FractalError, Result};
use crate::model::FractalConfig;
use crate::settings::Settings;

mod driver;
mod sdf;

#[cfg(test)]
mod tests;

// ── Public types ───────────────────────────────────────────────────────

/// The two generated shader fragments for one preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Wrapper that includes the library, the SDF fragment and the marcher.
    pub driver: String,
    /// `float2 sdf(float3 p)` body built from the fold chain.
    pub sdf: String,
    /// Catalog misses that were replaced by the sentinel (lenient mode only).
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Fail on the first catalog miss instead of emitting the sentinel.
    pub strict: bool,
}

// ── Entry points ───────────────────────────────────────────────────────

/// Generate both fragments with default settings in lenient mode.
pub fn generate(config: &FractalConfig) -> Result<Generated> {
    generate_with(config, &Settings::default(), &CodegenOptions::default())
}

pub fn generate_with(
    config: &FractalConfig,
    settings: &Settings,
    options: &CodegenOptions,
) -> Result<Generated> {
    debug!(
        name = %config.name,
        operations = config.operations.len(),
        terminal = %config.terminal,
        "generating fractal shader"
    );

    let mut driver = ShaderGen::new(options.strict);
    driver.emit_driver(&config.name, settings);

    let mut sdf = ShaderGen::new(options.strict);
    sdf.emit_sdf(config)?;

    let mut warnings = driver.warnings;
    warnings.append(&mut sdf.warnings);

    Ok(Generated {
        driver: driver.output,
        sdf: sdf.output,
        warnings,
    })
}

// ── Generator state ────────────────────────────────────────────────────

pub(super) struct ShaderGen {
    pub(super) output: String,
    pub(super) indent: usize,
    pub(super) strict: bool,
    pub(super) warnings: Vec<String>,
}

impl ShaderGen {
    fn new(strict: bool) -> Self {
        Self {
            output: String::with_capacity(1024),
            indent: 0,
            strict,
            warnings: Vec::new(),
        }
    }

    pub(super) fn line(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.output.push('\t');
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    pub(super) fn blank(&mut self) {
        self.output.push('\n');
    }

    /// Apply the catalog-miss policy: strict propagates, lenient records a
    /// warning and hands back the sentinel text.
    pub(super) fn or_sentinel(&mut self, lookup: Result<String>, context: &str) -> Result<String> {
        match lookup {
            Ok(text) => Ok(text),
            Err(FractalError::UnknownKind(kind)) if !self.strict => {
                let msg = format!("{context}: unknown kind '{kind}', emitted '{SENTINEL}'");
                warn!("{msg}");
                self.warnings.push(msg);
                Ok(SENTINEL.to_string())
            }
            Err(e) => Err(e),
        }
    }
}
