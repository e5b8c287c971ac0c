//! Simulation inputs and the bounds of each parameter.

use ah_core::{AhError, AhResult, ensure_finite};
use serde::{Deserialize, Serialize};

use crate::error::{KineticsError, KineticsResult};

/// Bounds, step and default for one input parameter, as offered by the
/// parameter surfaces (sliders, CLI flags, presets).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub unit: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

impl ParameterSpec {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reject non-finite values and values outside `[min, max]`.
    pub fn check(&self, value: f64) -> AhResult<f64> {
        let value = ensure_finite(value, self.key)?;
        if self.contains(value) {
            Ok(value)
        } else {
            Err(AhError::OutOfRange {
                what: self.key,
                value,
                min: self.min,
                max: self.max,
            })
        }
    }
}

const LIQUID_RATIO: ParameterSpec = ParameterSpec {
    key: "liquid_ratio",
    label: "Fracción líquida (L)",
    unit: "",
    min: 0.0,
    max: 20.0,
    step: 1.0,
    default: 10.0,
};

const SOLID_MASS: ParameterSpec = ParameterSpec {
    key: "solid_mass_kg",
    label: "Biomasa sólida (kg)",
    unit: "kg",
    min: 0.0,
    max: 10.0,
    step: 0.5,
    default: 2.0,
};

const ACID_CONCENTRATION: ParameterSpec = ParameterSpec {
    key: "acid_concentration",
    label: "Concentración de ácido (% v/v)",
    unit: "% v/v",
    min: 0.0,
    max: 10.0,
    step: 0.1,
    default: 0.5,
};

const RESIDENCE_TIME: ParameterSpec = ParameterSpec {
    key: "residence_time_min",
    label: "Tiempo de residencia (min)",
    unit: "min",
    min: 0.0,
    max: 200.0,
    step: 10.0,
    default: 120.0,
};

/// The four free parameters, in the order the input surfaces present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    LiquidRatio,
    SolidMass,
    AcidConcentration,
    ResidenceTime,
}

impl Parameter {
    pub const ALL: [Parameter; 4] = [
        Parameter::LiquidRatio,
        Parameter::SolidMass,
        Parameter::AcidConcentration,
        Parameter::ResidenceTime,
    ];

    pub fn spec(self) -> &'static ParameterSpec {
        match self {
            Parameter::LiquidRatio => &LIQUID_RATIO,
            Parameter::SolidMass => &SOLID_MASS,
            Parameter::AcidConcentration => &ACID_CONCENTRATION,
            Parameter::ResidenceTime => &RESIDENCE_TIME,
        }
    }
}

/// Inputs for one simulation run. Immutable once built; passed by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInputs {
    /// Liquid fraction L (dimensionless).
    pub liquid_ratio: f64,
    /// Solid biomass S, kg.
    pub solid_mass_kg: f64,
    /// Acid concentration C, % v/v.
    pub acid_concentration: f64,
    /// Residence time τ, minutes.
    pub residence_time_min: f64,
}

impl Default for SimulationInputs {
    fn default() -> Self {
        Self {
            liquid_ratio: LIQUID_RATIO.default,
            solid_mass_kg: SOLID_MASS.default,
            acid_concentration: ACID_CONCENTRATION.default,
            residence_time_min: RESIDENCE_TIME.default,
        }
    }
}

impl SimulationInputs {
    pub fn new(
        liquid_ratio: f64,
        solid_mass_kg: f64,
        acid_concentration: f64,
        residence_time_min: f64,
    ) -> Self {
        Self {
            liquid_ratio,
            solid_mass_kg,
            acid_concentration,
            residence_time_min,
        }
    }

    pub fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::LiquidRatio => self.liquid_ratio,
            Parameter::SolidMass => self.solid_mass_kg,
            Parameter::AcidConcentration => self.acid_concentration,
            Parameter::ResidenceTime => self.residence_time_min,
        }
    }

    pub fn get_mut(&mut self, parameter: Parameter) -> &mut f64 {
        match parameter {
            Parameter::LiquidRatio => &mut self.liquid_ratio,
            Parameter::SolidMass => &mut self.solid_mass_kg,
            Parameter::AcidConcentration => &mut self.acid_concentration,
            Parameter::ResidenceTime => &mut self.residence_time_min,
        }
    }

    /// Check every parameter against its surface bounds.
    pub fn check_ranges(&self) -> AhResult<()> {
        for parameter in Parameter::ALL {
            parameter.spec().check(self.get(parameter))?;
        }
        Ok(())
    }

    /// Preconditions of the rate model itself: finite, non-negative values
    /// and a strictly positive solid mass (Φ divides by S).
    pub fn validate(&self) -> KineticsResult<()> {
        for parameter in Parameter::ALL {
            let value = ensure_finite(self.get(parameter), parameter.spec().key)?;
            if value < 0.0 {
                return Err(KineticsError::InvalidInput {
                    what: format!("{} must be non-negative (got {value})", parameter.spec().key),
                });
            }
        }
        if self.solid_mass_kg <= 0.0 {
            return Err(KineticsError::InvalidInput {
                what: "solid mass must be positive".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_parameter_specs() {
        let inputs = SimulationInputs::default();
        for parameter in Parameter::ALL {
            assert_eq!(inputs.get(parameter), parameter.spec().default);
        }
        assert_eq!(inputs, SimulationInputs::new(10.0, 2.0, 0.5, 120.0));
    }

    #[test]
    fn defaults_are_in_range() {
        SimulationInputs::default().check_ranges().unwrap();
    }

    #[test]
    fn out_of_range_reports_key() {
        let inputs = SimulationInputs {
            residence_time_min: 250.0,
            ..Default::default()
        };
        let err = inputs.check_ranges().unwrap_err();
        assert!(format!("{err}").contains("residence_time_min"));
    }

    #[test]
    fn zero_solid_mass_is_rejected() {
        let inputs = SimulationInputs {
            solid_mass_kg: 0.0,
            ..Default::default()
        };
        let err = inputs.validate().unwrap_err();
        assert!(matches!(err, KineticsError::InvalidInput { .. }));
    }

    #[test]
    fn negative_and_nan_are_rejected() {
        let negative = SimulationInputs {
            acid_concentration: -0.1,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let nan = SimulationInputs {
            liquid_ratio: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan.validate().unwrap_err(),
            KineticsError::Core(AhError::NonFinite { .. })
        ));
    }

    #[test]
    fn get_mut_writes_through() {
        let mut inputs = SimulationInputs::default();
        *inputs.get_mut(Parameter::AcidConcentration) = 1.5;
        assert_eq!(inputs.acid_concentration, 1.5);
    }
}
