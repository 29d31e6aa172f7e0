//! Operation catalog: the literal shader syntax each kind emits.
//!
//! Calls are written against the shared `SDFractal library` instance and
//! the homogeneous working point `new_p`. The running distance is `d`, the
//! running color `outputColor`.

use crate::error::{FractalError, Result};
use crate::kinds::{FoldKind, SdfKind};

/// Literal emitted in place of a catalog miss when generation is lenient.
pub const SENTINEL: &str = "Error";

/// A library call that reassigns the working point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldCall {
    pub function: &'static str,
    pub args: &'static str,
}

impl FoldCall {
    /// `library.<function><args>`, the right-hand side of `new_p = ...;`.
    pub fn expr(&self) -> String {
        format!("library.{}{}", self.function, self.args)
    }
}

/// What a fold-chain entry contributes to the loop body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldEmission {
    /// Reassign `new_p`; `outputColor` untouched.
    Transform(FoldCall),
    /// Reassign `outputColor` from the orbit trap; `new_p` untouched.
    OrbitAccumulate,
}

/// The statement an orbit-coloring entry emits.
pub const ORBIT_STATEMENT: &str = "outputColor = library.orbitByType(outputColor, new_p);";

pub fn fold_emission(kind: FoldKind) -> Result<FoldEmission> {
    let (function, args) = match kind {
        FoldKind::PlaneFold => ("planeFold", "(new_p, float3(0, 0, -1), -1)"),
        FoldKind::AbsFold => ("absFold", "(new_p, float3(0.0f, 0.0f, 0.0f))"),
        FoldKind::SierpinskiFold => ("sierpinskiFold", "(new_p)"),
        FoldKind::MengerFold => ("mengerFold", "(new_p)"),
        FoldKind::SphereFold => ("sphereFold", "(new_p, 0.5, 1.0f)"),
        FoldKind::BoxFold => ("boxFold", "(new_p, library.FoldSize)"),
        FoldKind::RotXFold => ("rotXFold", "(new_p, library.FoldAngles.x)"),
        FoldKind::RotYFold => ("rotYFold", "(new_p, library.FoldAngles.y)"),
        FoldKind::RotZFold => ("rotZFold", "(new_p, library.FoldAngles.z)"),
        FoldKind::ScaleTranslateFold => (
            "scaleTranslateFold",
            "(new_p, library.FoldingScale, library.Power * library.FoldOffset)",
        ),
        FoldKind::ScaleOriginFold => ("scaleOriginFold", "(new_p, library.FoldingScale)"),
        FoldKind::OrbitColoring => return Ok(FoldEmission::OrbitAccumulate),
        FoldKind::Unknown => return Err(FractalError::UnknownKind(kind.name().into())),
    };
    Ok(FoldEmission::Transform(FoldCall { function, args }))
}

/// Return expression for the terminal distance function: a `float2` of
/// (distance, orbit value).
pub fn sdf_return(kind: SdfKind) -> Result<&'static str> {
    let expr = match kind {
        SdfKind::Cone => "float2(min(d, library.sdCone(new_p, library.Offset)), length(new_p))",
        SdfKind::HexPrism => {
            "float2(min(d, library.sdHexPrism(new_p, float2(library.Offset, library.Offset))), length(new_p))"
        }
        SdfKind::Sphere => "float2(min(d, library.sdSphere(new_p, library.Offset)), length(new_p))",
        SdfKind::Capsule => {
            "float2(min(d, library.sdCapsule(new_p, library.FoldingScale, library.Offset)), length(new_p))"
        }
        SdfKind::Torus => {
            "float2(min(d, library.sdTorus(new_p, float2(library.Offset, library.Offset))), length(new_p))"
        }
        SdfKind::Box => {
            "float2(min(d, library.sdBox(new_p, float3(library.Offset, library.Offset, library.Offset))), length(new_p))"
        }
        SdfKind::Tetrahedron => {
            "float2(min(d, library.sdTetrahedron(new_p, library.Offset)), length(new_p))"
        }
        SdfKind::InfCross => "float2(min(d, library.sdInfCross(new_p, library.Offset)), length(new_p))",
        SdfKind::InfCrossXY => {
            "float2(min(d, library.sdInfCrossXY(new_p, library.Offset)), length(new_p))"
        }
        SdfKind::InfLine => "float2(min(d, library.sdInfLine(new_p, library.Offset)), length(new_p))",
        // The shader library's Julia entry points are paired crosswise.
        SdfKind::Julia => "library.sdJulia2(new_p, outputColor)",
        SdfKind::Julia2 => "library.sdJulia(new_p, outputColor)",
        SdfKind::Mandelbrot => "library.sdMondelbrot(new_p, outputColor)",
        SdfKind::Unknown => return Err(FractalError::UnknownKind(kind.name().into())),
    };
    Ok(expr)
}
