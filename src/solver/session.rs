use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Geometry;
use crate::solver::Case;

/// Where the solver binary lives and how chatty it should be.
///
/// The binary location is an explicit value handed to whichever
/// [`Solver`] implementation runs the process; there is no global
/// configuration state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub bin_path: PathBuf,
    pub show_output: bool,
}

impl SolverConfig {
    pub fn new(bin_path: impl Into<PathBuf>) -> Self {
        Self {
            bin_path: bin_path.into(),
            show_output: false,
        }
    }

    pub fn show_output(mut self, show: bool) -> Self {
        self.show_output = show;
        self
    }
}

/// Total force and moment coefficients for one converged case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub cl: f64,
    pub cd: f64,
    pub cd_induced: f64,
    pub cm: f64,
    /// Span efficiency derived from the induced drag, Oswald's "e".
    pub e: f64,
}

/// Stability derivatives for one converged case, per radian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StabilityDerivatives {
    /// Lift-curve slope dCL/dα.
    pub cl_alpha: f64,
    pub cm_alpha: f64,
    pub cl_beta: f64,
    pub cn_beta: f64,
}

/// Result table for one case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaseResult {
    pub totals: Totals,
    pub stability_derivatives: StabilityDerivatives,
}

/// Per-case result tables keyed by case name.
pub type SolverResults = BTreeMap<String, CaseResult>;

/// Failures at the solver boundary.
///
/// These belong to the external collaborator running the process;
/// geometry construction never produces them.
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("failed to launch solver at {path}: {source}")]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("case {0} did not converge")]
    NonConvergence(String),

    #[error("malformed solver output: {0}")]
    MalformedOutput(String),
}

/// The boundary to the external vortex-lattice process.
///
/// An implementation accepts a composed [`Geometry`] and a batch of
/// [`Case`] definitions and returns one result table per case, keyed by
/// case name. Nothing in this crate assumes anything about the solver
/// internals beyond this contract; writing the geometry input format,
/// spawning the process and parsing its output all live behind it.
pub trait Solver {
    fn run_all_cases(
        &self,
        geometry: &Geometry,
        cases: &[Case],
    ) -> Result<SolverResults, SolverError>;
}
