use serde::{Deserialize, Serialize};

use crate::geometry::Airfoil;
use crate::math::Point3;

/// Panel distribution along a chord or span.
///
/// The numeric codes are the ones the solver expects in its input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Spacing {
    #[default]
    Cosine,
    Sine,
    Equal,
    NegSine,
}

impl Spacing {
    pub fn code(self) -> f64 {
        match self {
            Spacing::Cosine => 1.0,
            Spacing::Sine => 2.0,
            Spacing::Equal => 0.0,
            Spacing::NegSine => -2.0,
        }
    }
}

/// A single spanwise cross-section of a lifting surface.
///
/// Chord lengths are descriptive data here; a pointed tip (chord zero)
/// is a legal section, so no positivity check happens at this level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    leading_edge_point: Point3,
    chord: f64,
    angle: f64,
    airfoil: Option<Airfoil>,
}

impl Section {
    pub fn new(leading_edge_point: Point3, chord: f64, angle: f64) -> Self {
        Self {
            leading_edge_point,
            chord,
            angle,
            airfoil: None,
        }
    }

    pub fn with_airfoil(mut self, airfoil: Airfoil) -> Self {
        self.airfoil = Some(airfoil);
        self
    }

    pub fn leading_edge_point(&self) -> Point3 {
        self.leading_edge_point
    }

    /// Chord length in meters.
    pub fn chord(&self) -> f64 {
        self.chord
    }

    /// Incidence angle in degrees.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn airfoil(&self) -> Option<&Airfoil> {
        self.airfoil.as_ref()
    }
}
