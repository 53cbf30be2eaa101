use serde::{Deserialize, Serialize};

use crate::geometry::{Section, Spacing};
use crate::math::Vector3;

/// Solver-facing description of one lifting surface.
///
/// This is the plain data carrier handed to the solver boundary: an
/// ordered run of sections plus the discretization the solver should
/// apply. Parametric models such as
/// [`TrapezoidalLiftingSurface`](crate::geometry::TrapezoidalLiftingSurface)
/// build one of these via their conversion methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub name: String,
    pub n_chordwise: usize,
    pub n_spanwise: usize,
    pub chord_spacing: Spacing,
    pub span_spacing: Spacing,
    /// Mirror plane offset; `0.0` duplicates the surface across y = 0.
    pub y_duplicate: f64,
    /// Whole-surface translation applied by the solver, if any.
    pub translation: Option<Vector3>,
    pub sections: Vec<Section>,
}
