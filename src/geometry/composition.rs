use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::Surface;
use crate::math::Point3;

/// A named collection of lifting surfaces plus the global reference
/// quantities the solver uses to non-dimensionalize force and moment
/// coefficients.
///
/// Composition performs no geometric computation of its own; it
/// validates its inputs once and is a pure data carrier afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    name: String,
    reference_area: f64,
    reference_chord: f64,
    reference_span: f64,
    reference_point: Point3,
    surfaces: Vec<Surface>,
}

impl Geometry {
    /// Composes `surfaces` under shared reference quantities.
    ///
    /// Fails with [`GeometryError::EmptyGeometry`] when no surface is
    /// given and [`GeometryError::InvalidParameter`] when a reference
    /// quantity is not positive.
    pub fn new(
        name: &str,
        reference_area: f64,
        reference_chord: f64,
        reference_span: f64,
        reference_point: Point3,
        surfaces: Vec<Surface>,
    ) -> Result<Self, GeometryError> {
        if surfaces.is_empty() {
            return Err(GeometryError::EmptyGeometry);
        }
        if !(reference_area > 0.0) {
            return Err(GeometryError::InvalidParameter {
                name: "reference_area",
                value: reference_area,
            });
        }
        if !(reference_chord > 0.0) {
            return Err(GeometryError::InvalidParameter {
                name: "reference_chord",
                value: reference_chord,
            });
        }
        if !(reference_span > 0.0) {
            return Err(GeometryError::InvalidParameter {
                name: "reference_span",
                value: reference_span,
            });
        }

        log::debug!("composed geometry {} with {} surfaces", name, surfaces.len());

        Ok(Self {
            name: name.to_string(),
            reference_area,
            reference_chord,
            reference_span,
            reference_point,
            surfaces,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference area in square meters, typically the full planform area.
    pub fn reference_area(&self) -> f64 {
        self.reference_area
    }

    /// Reference chord in meters, typically the main wing's MAC.
    pub fn reference_chord(&self) -> f64 {
        self.reference_chord
    }

    /// Reference span in meters, typically the full wing span.
    pub fn reference_span(&self) -> f64 {
        self.reference_span
    }

    /// Moment reference location.
    pub fn reference_point(&self) -> Point3 {
        self.reference_point
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }
}
