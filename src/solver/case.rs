use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::math::AIR_DENSITY_SEA_LEVEL;

/// The solver rejects run files with more cases than this.
pub const MAX_CASES_PER_RUN: usize = 25;

/// One run-case variable, either pinned directly or trimmed against a
/// constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    variable: String,
    setting: String,
    value: f64,
}

impl Parameter {
    /// Fixes `variable` directly at `value`.
    pub fn fixed(variable: &str, value: f64) -> Self {
        Self {
            variable: variable.to_string(),
            setting: variable.to_string(),
            value,
        }
    }

    /// Drives `variable` until `setting` reaches `value`, e.g. trim
    /// alpha such that CL = 0.6:
    ///
    /// ```
    /// use liftgeom::Parameter;
    ///
    /// let trim = Parameter::trimmed("alpha", "CL", 0.6);
    /// assert_eq!(trim.setting(), "CL");
    /// ```
    pub fn trimmed(variable: &str, setting: &str, value: f64) -> Self {
        Self {
            variable: variable.to_string(),
            setting: setting.to_string(),
            value,
        }
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    pub fn setting(&self) -> &str {
        &self.setting
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// A named analysis condition: run-case variables plus flow conditions.
///
/// Construction is chaining-only; once bound, a case has no mutating
/// methods. Flow conditions default to still sea-level air at unit
/// velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    name: String,
    parameters: BTreeMap<String, Parameter>,
    control_deflections: BTreeMap<String, f64>,
    mach: f64,
    density: f64,
    velocity: f64,
}

impl Case {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parameters: BTreeMap::new(),
            control_deflections: BTreeMap::new(),
            mach: 0.0,
            density: AIR_DENSITY_SEA_LEVEL,
            velocity: 1.0,
        }
    }

    /// Angle of attack in degrees.
    pub fn alpha(self, degrees: f64) -> Self {
        self.parameter(Parameter::fixed("alpha", degrees))
    }

    /// Sideslip angle in degrees.
    pub fn beta(self, degrees: f64) -> Self {
        self.parameter(Parameter::fixed("beta", degrees))
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters
            .insert(parameter.variable().to_string(), parameter);
        self
    }

    /// Control surface deflection in degrees, keyed by control name.
    pub fn control_deflection(mut self, control: &str, degrees: f64) -> Self {
        self.control_deflections.insert(control.to_string(), degrees);
        self
    }

    pub fn mach(mut self, mach: f64) -> Self {
        self.mach = mach;
        self
    }

    /// Air density in kg/m^3.
    pub fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Freestream velocity in m/s.
    pub fn velocity(mut self, velocity: f64) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &BTreeMap<String, Parameter> {
        &self.parameters
    }

    pub fn control_deflections(&self) -> &BTreeMap<String, f64> {
        &self.control_deflections
    }

    pub fn mach_number(&self) -> f64 {
        self.mach
    }

    pub fn air_density(&self) -> f64 {
        self.density
    }

    pub fn freestream_velocity(&self) -> f64 {
        self.velocity
    }
}

/// Expands `base` into one case per combination of the swept variables.
///
/// Each swept value is pinned with [`Parameter::fixed`] and the case
/// name extended with `-{variable}={value}`, so every generated case
/// keeps a unique name.
pub fn sweep_cases(base: &Case, sweeps: &[(&str, Vec<f64>)]) -> Vec<Case> {
    let mut cases = vec![base.clone()];
    for (variable, values) in sweeps {
        let mut expanded = Vec::with_capacity(cases.len() * values.len());
        for case in &cases {
            for &value in values {
                let name = format!("{}-{}={}", case.name(), variable, value);
                let mut swept = case.clone().parameter(Parameter::fixed(variable, value));
                swept.name = name;
                expanded.push(swept);
            }
        }
        cases = expanded;
    }
    cases
}

/// Splits `cases` into batches the solver will accept in a single run.
pub fn partitioned_cases(cases: &[Case]) -> Vec<Vec<Case>> {
    let partitions: Vec<Vec<Case>> = cases
        .chunks(MAX_CASES_PER_RUN)
        .map(|chunk| chunk.to_vec())
        .collect();
    if partitions.len() > 1 {
        log::debug!(
            "partitioned {} cases into {} solver runs",
            cases.len(),
            partitions.len()
        );
    }
    partitions
}
