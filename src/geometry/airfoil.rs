use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Airfoil description attached to a section.
///
/// The solver accepts three styles of airfoil input; which one applies
/// is the caller's choice and none affects the planform geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Airfoil {
    /// Four-digit NACA designation, e.g. `"0012"`.
    Naca(String),
    /// Coordinate file on disk in the solver's airfoil format.
    File(PathBuf),
    /// Inline coordinates as (x, z) pairs from trailing edge around the
    /// nose and back.
    Data(Vec<(f64, f64)>),
}
