use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::{Airfoil, Section, Spacing, Surface};
use crate::math::{rotate_3d, Point3, Vector3};

/// A straight-tapered trapezoidal lifting surface built from two
/// cross-sections, root and tip.
///
/// All derived quantities (leading edges, tip chord, mean aerodynamic
/// chord and its leading edge, 25%-MAC reference point, half-wing area)
/// are pure functions of the primary parameters and are computed once
/// when [`SurfaceBuilder::build`] runs. After that the surface is
/// sealed: every field is private and no mutating method exists, so
/// repeated reads of a derived quantity return bit-identical values.
///
/// ```compile_fail
/// use liftgeom::TrapezoidalLiftingSurface;
///
/// let wing = TrapezoidalLiftingSurface::builder("wing", 5.5, 14.0, 0.4)
///     .build()
///     .unwrap();
/// wing.root_chord = 1.0; // fields are private; there is no mutation path
/// ```
///
/// Leading-edge points are expressed in the surface-local frame with the
/// root leading edge at the origin; a [`translation`](Self::translation)
/// set on the builder is carried through to the solver untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrapezoidalLiftingSurface {
    name: String,
    root_chord: f64,
    half_span: f64,
    taper_ratio: f64,
    le_sweep: f64,
    dihedral: f64,
    root_angle: f64,
    tip_angle: f64,
    n_chordwise: usize,
    n_spanwise: usize,
    chord_spacing: Spacing,
    span_spacing: Spacing,
    y_duplicate: f64,
    translation: Option<Vector3>,

    root_le: Point3,
    tip_le: Point3,
    tip_chord: f64,
    root_section: Section,
    tip_section: Section,
    mac: f64,
    mac_le: Point3,
    reference_point: Point3,
    surface_area: f64,
}

/// Mutable staging area for a [`TrapezoidalLiftingSurface`].
///
/// Angles default to zero, panel counts to 20 with cosine spacing and
/// the surface mirrored across y = 0.
#[derive(Debug, Clone)]
pub struct SurfaceBuilder {
    name: String,
    root_chord: f64,
    half_span: f64,
    taper_ratio: f64,
    le_sweep: f64,
    dihedral: f64,
    root_angle: f64,
    tip_angle: f64,
    n_chordwise: usize,
    n_spanwise: usize,
    chord_spacing: Spacing,
    span_spacing: Spacing,
    y_duplicate: f64,
    translation: Option<Vector3>,
    airfoil: Option<Airfoil>,
}

impl SurfaceBuilder {
    pub fn new(name: &str, root_chord: f64, half_span: f64, taper_ratio: f64) -> Self {
        Self {
            name: name.to_string(),
            root_chord,
            half_span,
            taper_ratio,
            le_sweep: 0.0,
            dihedral: 0.0,
            root_angle: 0.0,
            tip_angle: 0.0,
            n_chordwise: 20,
            n_spanwise: 20,
            chord_spacing: Spacing::Cosine,
            span_spacing: Spacing::Cosine,
            y_duplicate: 0.0,
            translation: None,
            airfoil: None,
        }
    }

    /// Leading-edge sweep in degrees.
    pub fn le_sweep(mut self, degrees: f64) -> Self {
        self.le_sweep = degrees;
        self
    }

    /// Dihedral in degrees, about the root leading-edge x-axis.
    pub fn dihedral(mut self, degrees: f64) -> Self {
        self.dihedral = degrees;
        self
    }

    /// Root incidence angle in degrees.
    pub fn root_angle(mut self, degrees: f64) -> Self {
        self.root_angle = degrees;
        self
    }

    /// Tip incidence angle in degrees.
    pub fn tip_angle(mut self, degrees: f64) -> Self {
        self.tip_angle = degrees;
        self
    }

    pub fn n_chordwise(mut self, panels: usize) -> Self {
        self.n_chordwise = panels;
        self
    }

    pub fn n_spanwise(mut self, panels: usize) -> Self {
        self.n_spanwise = panels;
        self
    }

    pub fn chord_spacing(mut self, spacing: Spacing) -> Self {
        self.chord_spacing = spacing;
        self
    }

    pub fn span_spacing(mut self, spacing: Spacing) -> Self {
        self.span_spacing = spacing;
        self
    }

    pub fn y_duplicate(mut self, offset: f64) -> Self {
        self.y_duplicate = offset;
        self
    }

    /// Whole-surface translation, carried to the solver untouched.
    pub fn translation(mut self, offset: Vector3) -> Self {
        self.translation = Some(offset);
        self
    }

    /// Airfoil applied to both the root and tip sections.
    pub fn airfoil(mut self, airfoil: Airfoil) -> Self {
        self.airfoil = Some(airfoil);
        self
    }

    /// Validates the primary parameters and computes every derived
    /// quantity, sealing the result.
    ///
    /// Fails with [`GeometryError::InvalidParameter`] if `root_chord` or
    /// `half_span` is not positive or a panel count is zero. A taper
    /// ratio of zero (pointed tip) or one and above (untapered, reverse
    /// taper) is accepted; the closed forms remain well defined there.
    pub fn build(self) -> Result<TrapezoidalLiftingSurface, GeometryError> {
        if !(self.root_chord > 0.0) {
            return Err(GeometryError::InvalidParameter {
                name: "root_chord",
                value: self.root_chord,
            });
        }
        if !(self.half_span > 0.0) {
            return Err(GeometryError::InvalidParameter {
                name: "half_span",
                value: self.half_span,
            });
        }
        if self.n_chordwise == 0 {
            return Err(GeometryError::InvalidParameter {
                name: "n_chordwise",
                value: 0.0,
            });
        }
        if self.n_spanwise == 0 {
            return Err(GeometryError::InvalidParameter {
                name: "n_spanwise",
                value: 0.0,
            });
        }

        let c = self.root_chord;
        let t = self.taper_ratio;
        let b = 2.0 * self.half_span;
        let sweep_tan = self.le_sweep.to_radians().tan();
        let dihedral_axis = Vector3::x_axis();

        let root_le = Point3::origin();
        let tip_le = rotate_3d(
            Point3::new(self.half_span * sweep_tan, self.half_span, 0.0),
            dihedral_axis,
            self.dihedral,
        )?;
        let tip_chord = c * t;

        let mac = 2.0 * c * (1.0 + t + t * t) / (3.0 * (1.0 + t));
        let y_mac = b * (1.0 + 2.0 * t) / (6.0 * (1.0 + t));
        let x_mac = sweep_tan * y_mac;
        let mac_le = rotate_3d(Point3::new(x_mac, y_mac, 0.0), dihedral_axis, self.dihedral)?;

        let reference_point = Point3::new(mac_le.x + 0.25 * mac, mac_le.y, mac_le.z);
        let surface_area = self.half_span * c * (1.0 + t) / 2.0;

        let mut root_section = Section::new(root_le, c, self.root_angle);
        let mut tip_section = Section::new(tip_le, tip_chord, self.tip_angle);
        if let Some(airfoil) = &self.airfoil {
            root_section = root_section.with_airfoil(airfoil.clone());
            tip_section = tip_section.with_airfoil(airfoil.clone());
        }

        log::debug!(
            "built surface {}: mac {:.4} m, half-wing area {:.4} m^2",
            self.name,
            mac,
            surface_area
        );

        Ok(TrapezoidalLiftingSurface {
            name: self.name,
            root_chord: self.root_chord,
            half_span: self.half_span,
            taper_ratio: self.taper_ratio,
            le_sweep: self.le_sweep,
            dihedral: self.dihedral,
            root_angle: self.root_angle,
            tip_angle: self.tip_angle,
            n_chordwise: self.n_chordwise,
            n_spanwise: self.n_spanwise,
            chord_spacing: self.chord_spacing,
            span_spacing: self.span_spacing,
            y_duplicate: self.y_duplicate,
            translation: self.translation,
            root_le,
            tip_le,
            tip_chord,
            root_section,
            tip_section,
            mac,
            mac_le,
            reference_point,
            surface_area,
        })
    }
}

impl TrapezoidalLiftingSurface {
    pub fn builder(
        name: &str,
        root_chord: f64,
        half_span: f64,
        taper_ratio: f64,
    ) -> SurfaceBuilder {
        SurfaceBuilder::new(name, root_chord, half_span, taper_ratio)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Root chord length in meters.
    pub fn root_chord(&self) -> f64 {
        self.root_chord
    }

    /// Half-span in meters.
    pub fn half_span(&self) -> f64 {
        self.half_span
    }

    /// Tip chord over root chord.
    pub fn taper_ratio(&self) -> f64 {
        self.taper_ratio
    }

    /// Leading-edge sweep in degrees.
    pub fn le_sweep(&self) -> f64 {
        self.le_sweep
    }

    /// Dihedral angle in degrees.
    pub fn dihedral(&self) -> f64 {
        self.dihedral
    }

    pub fn root_angle(&self) -> f64 {
        self.root_angle
    }

    pub fn tip_angle(&self) -> f64 {
        self.tip_angle
    }

    pub fn n_chordwise(&self) -> usize {
        self.n_chordwise
    }

    pub fn n_spanwise(&self) -> usize {
        self.n_spanwise
    }

    pub fn chord_spacing(&self) -> Spacing {
        self.chord_spacing
    }

    pub fn span_spacing(&self) -> Spacing {
        self.span_spacing
    }

    pub fn y_duplicate(&self) -> f64 {
        self.y_duplicate
    }

    pub fn translation(&self) -> Option<Vector3> {
        self.translation
    }

    /// Root leading edge, the surface-local origin.
    pub fn root_le(&self) -> Point3 {
        self.root_le
    }

    /// Tip leading edge after sweep and dihedral.
    pub fn tip_le(&self) -> Point3 {
        self.tip_le
    }

    /// Tip chord length in meters, `root_chord * taper_ratio`.
    pub fn tip_chord(&self) -> f64 {
        self.tip_chord
    }

    pub fn root_section(&self) -> &Section {
        &self.root_section
    }

    pub fn tip_section(&self) -> &Section {
        &self.tip_section
    }

    /// The two sections presented to the solver, root first.
    pub fn sections(&self) -> (&Section, &Section) {
        (&self.root_section, &self.tip_section)
    }

    /// Mean aerodynamic chord in meters.
    pub fn mac(&self) -> f64 {
        self.mac
    }

    /// Leading edge of the mean aerodynamic chord.
    pub fn mac_le(&self) -> Point3 {
        self.mac_le
    }

    /// Aerodynamic-center proxy at 25% of the mean aerodynamic chord.
    pub fn reference_point(&self) -> Point3 {
        self.reference_point
    }

    /// Area of the half-wing in square meters, not the full planform.
    pub fn surface_area(&self) -> f64 {
        self.surface_area
    }

    /// Builds the solver-facing [`Surface`] for this planform.
    pub fn to_surface(&self) -> Surface {
        Surface {
            name: self.name.clone(),
            n_chordwise: self.n_chordwise,
            n_spanwise: self.n_spanwise,
            chord_spacing: self.chord_spacing,
            span_spacing: self.span_spacing,
            y_duplicate: self.y_duplicate,
            translation: self.translation,
            sections: vec![self.root_section.clone(), self.tip_section.clone()],
        }
    }
}
