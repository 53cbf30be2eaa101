//! Parametric lifting-surface geometry for vortex-lattice analysis.
//!
//! The crate turns a small set of design parameters (root chord, span,
//! taper, sweep, dihedral, twist) into the point geometry and aerodynamic
//! reference quantities of a straight-tapered trapezoidal planform, and
//! composes one or more such surfaces into an aircraft geometry ready to
//! hand to an external vortex-lattice solver.
//!
//! ```
//! use liftgeom::{Geometry, TrapezoidalLiftingSurface};
//!
//! let wing = TrapezoidalLiftingSurface::builder("wing", 5.5, 14.0, 2.0 / 5.5)
//!     .le_sweep(14.036)
//!     .build()?;
//!
//! let geometry = Geometry::new(
//!     "aircraft",
//!     2.0 * wing.surface_area(),
//!     wing.mac(),
//!     2.0 * wing.half_span(),
//!     wing.reference_point(),
//!     vec![wing.to_surface()],
//! )?;
//! assert_eq!(geometry.surfaces().len(), 1);
//! # Ok::<(), liftgeom::GeometryError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod solver;

pub use error::GeometryError;
pub use geometry::{
    Airfoil, Geometry, Section, Spacing, Surface, SurfaceBuilder, TrapezoidalLiftingSurface,
};
pub use math::{normalize, rotate_3d, Point3, Vector3};
pub use solver::{
    partitioned_cases, sweep_cases, Case, CaseResult, Parameter, Solver, SolverConfig,
    SolverError, SolverResults, StabilityDerivatives, Totals,
};
