//! Closed vocabulary of fold operations and terminal distance functions.
//!
//! Both enums serialize as their variant name (`"BoxFold"`, `"Torus"`) so
//! description documents stay readable. Tags this build does not know
//! deserialize to `Unknown` instead of failing the whole document.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FractalError;

/// A geometric fold applied to the working point once per iteration, or the
/// orbit-coloring marker which accumulates color instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoldKind {
    PlaneFold,
    AbsFold,
    SierpinskiFold,
    MengerFold,
    SphereFold,
    BoxFold,
    RotXFold,
    RotYFold,
    RotZFold,
    ScaleTranslateFold,
    ScaleOriginFold,
    OrbitColoring,
    #[serde(other)]
    Unknown,
}

/// The distance function evaluated after the fold loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SdfKind {
    Cone,
    HexPrism,
    Sphere,
    Capsule,
    Torus,
    Box,
    Tetrahedron,
    InfCross,
    InfCrossXY,
    InfLine,
    Julia,
    Julia2,
    #[default]
    Mandelbrot,
    #[serde(other)]
    Unknown,
}

impl FoldKind {
    /// Every known kind, in catalog order. Excludes `Unknown`.
    pub const ALL: [FoldKind; 12] = [
        FoldKind::PlaneFold,
        FoldKind::AbsFold,
        FoldKind::SierpinskiFold,
        FoldKind::MengerFold,
        FoldKind::SphereFold,
        FoldKind::BoxFold,
        FoldKind::RotXFold,
        FoldKind::RotYFold,
        FoldKind::RotZFold,
        FoldKind::ScaleTranslateFold,
        FoldKind::ScaleOriginFold,
        FoldKind::OrbitColoring,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FoldKind::PlaneFold => "PlaneFold",
            FoldKind::AbsFold => "AbsFold",
            FoldKind::SierpinskiFold => "SierpinskiFold",
            FoldKind::MengerFold => "MengerFold",
            FoldKind::SphereFold => "SphereFold",
            FoldKind::BoxFold => "BoxFold",
            FoldKind::RotXFold => "RotXFold",
            FoldKind::RotYFold => "RotYFold",
            FoldKind::RotZFold => "RotZFold",
            FoldKind::ScaleTranslateFold => "ScaleTranslateFold",
            FoldKind::ScaleOriginFold => "ScaleOriginFold",
            FoldKind::OrbitColoring => "OrbitColoring",
            FoldKind::Unknown => "Unknown",
        }
    }

    pub fn is_orbit(self) -> bool {
        self == FoldKind::OrbitColoring
    }
}

impl SdfKind {
    /// Every known kind, in catalog order. Excludes `Unknown`.
    pub const ALL: [SdfKind; 13] = [
        SdfKind::Cone,
        SdfKind::HexPrism,
        SdfKind::Sphere,
        SdfKind::Capsule,
        SdfKind::Torus,
        SdfKind::Box,
        SdfKind::Tetrahedron,
        SdfKind::InfCross,
        SdfKind::InfCrossXY,
        SdfKind::InfLine,
        SdfKind::Julia,
        SdfKind::Julia2,
        SdfKind::Mandelbrot,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SdfKind::Cone => "Cone",
            SdfKind::HexPrism => "HexPrism",
            SdfKind::Sphere => "Sphere",
            SdfKind::Capsule => "Capsule",
            SdfKind::Torus => "Torus",
            SdfKind::Box => "Box",
            SdfKind::Tetrahedron => "Tetrahedron",
            SdfKind::InfCross => "InfCross",
            SdfKind::InfCrossXY => "InfCrossXY",
            SdfKind::InfLine => "InfLine",
            SdfKind::Julia => "Julia",
            SdfKind::Julia2 => "Julia2",
            SdfKind::Mandelbrot => "Mandelbrot",
            SdfKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for FoldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for SdfKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fold `BoxFold`, `box-fold` and `box_fold` to the same key.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| *c != '-' && *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for FoldKind {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        FoldKind::ALL
            .into_iter()
            .find(|k| normalize(k.name()) == key)
            .ok_or_else(|| FractalError::UnknownKind(format!("fold '{s}'")))
    }
}

impl FromStr for SdfKind {
    type Err = FractalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        SdfKind::ALL
            .into_iter()
            .find(|k| normalize(k.name()) == key)
            .ok_or_else(|| FractalError::UnknownKind(format!("sdf '{s}'")))
    }
}
