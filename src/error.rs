use thiserror::Error;

/// Errors raised by geometry construction and the vector utilities.
///
/// All variants are raised synchronously at the point of violation;
/// nothing is defaulted or deferred. Solver-side failures live in
/// [`crate::solver::SolverError`] and are deliberately kept out of this
/// taxonomy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A primary parameter violated its positivity constraint.
    #[error("invalid parameter {name}: {value} (must be positive)")]
    InvalidParameter { name: &'static str, value: f64 },

    /// Rotation axis has zero length.
    #[error("rotation axis has zero length")]
    InvalidAxis,

    /// A geometry was composed without any surfaces.
    #[error("geometry requires at least one surface")]
    EmptyGeometry,
}
