//! In-memory description of one fractal preset.

use crate::error::{FractalError, Result};
use crate::kinds::{FoldKind, SdfKind};

pub const DEFAULT_NAME: &str = "Default";

/// One fractal preset: a name, the fold chain in loop-body order, and the
/// terminal distance function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractalConfig {
    pub name: String,
    pub operations: Vec<FoldKind>,
    pub terminal: SdfKind,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            operations: Vec::new(),
            terminal: SdfKind::default(),
        }
    }
}

impl FractalConfig {
    pub fn new(name: &str, operations: Vec<FoldKind>, terminal: SdfKind) -> Result<Self> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            operations,
            terminal,
        })
    }

    pub fn push(&mut self, kind: FoldKind) {
        self.operations.push(kind);
    }

    /// Insert at `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, kind: FoldKind) -> Result<()> {
        if index > self.operations.len() {
            return Err(self.out_of_range(index));
        }
        self.operations.insert(index, kind);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<FoldKind> {
        if index >= self.operations.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.operations.remove(index))
    }

    /// Move the entry at `from` so it ends up at `to`.
    pub fn move_operation(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.operations.len();
        if from >= len {
            return Err(self.out_of_range(from));
        }
        if to >= len {
            return Err(self.out_of_range(to));
        }
        let kind = self.operations.remove(from);
        self.operations.insert(to, kind);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// True when the chain or terminal came from a tag the catalog does
    /// not know.
    pub fn has_unknown(&self) -> bool {
        self.terminal == SdfKind::Unknown || self.operations.contains(&FoldKind::Unknown)
    }

    fn out_of_range(&self, index: usize) -> FractalError {
        FractalError::IndexOutOfRange {
            index,
            len: self.operations.len(),
        }
    }
}

/// A preset name becomes a file stem, so it must be a single, plain path
/// component.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(FractalError::invalid_name(name, "name is empty"));
    }
    if name == "." || name == ".." {
        return Err(FractalError::invalid_name(name, "name is a relative path"));
    }
    if name.contains(['/', '\\', '\0']) {
        return Err(FractalError::invalid_name(name, "name contains a path separator"));
    }
    if name.trim() != name {
        return Err(FractalError::invalid_name(name, "name has surrounding whitespace"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_tool() {
        let config = FractalConfig::default();
        assert_eq!(config.name, "Default");
        assert!(config.operations.is_empty());
        assert_eq!(config.terminal, SdfKind::Mandelbrot);
    }

    #[test]
    fn edit_chain() {
        let mut config = FractalConfig::default();
        config.push(FoldKind::BoxFold);
        config.push(FoldKind::SphereFold);
        config.insert(0, FoldKind::AbsFold).unwrap();
        assert_eq!(
            config.operations,
            vec![FoldKind::AbsFold, FoldKind::BoxFold, FoldKind::SphereFold]
        );

        config.move_operation(2, 0).unwrap();
        assert_eq!(
            config.operations,
            vec![FoldKind::SphereFold, FoldKind::AbsFold, FoldKind::BoxFold]
        );

        assert_eq!(config.remove(1).unwrap(), FoldKind::AbsFold);
        assert_eq!(config.operations, vec![FoldKind::SphereFold, FoldKind::BoxFold]);

        config.clear();
        assert!(config.operations.is_empty());
    }

    #[test]
    fn out_of_range_edits_leave_chain_untouched() {
        let mut config = FractalConfig::default();
        config.push(FoldKind::MengerFold);

        assert!(matches!(
            config.remove(1),
            Err(FractalError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(config.insert(3, FoldKind::BoxFold).is_err());
        assert!(config.move_operation(0, 1).is_err());
        assert_eq!(config.operations, vec![FoldKind::MengerFold]);
    }

    #[test]
    fn unknown_tags_are_flagged() {
        let mut config = FractalConfig::default();
        config.push(FoldKind::BoxFold);
        assert!(!config.has_unknown());

        config.push(FoldKind::Unknown);
        assert!(config.has_unknown());

        config.clear();
        config.terminal = SdfKind::Unknown;
        assert!(config.has_unknown());
    }

    #[test]
    fn rejects_unusable_names() {
        for bad in ["", ".", "..", "a/b", "a\\b", " padded "] {
            assert!(
                matches!(validate_name(bad), Err(FractalError::InvalidName { .. })),
                "{bad:?} should be rejected"
            );
        }
        assert!(validate_name("Mandelbox_01").is_ok());
        assert!(FractalConfig::new("x/y", Vec::new(), SdfKind::Box).is_err());
    }
}
