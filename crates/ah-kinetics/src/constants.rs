//! Fixed physical constants of the hydrolysis model.

use ah_core::units::constants::{R_CAL_PER_MOL_K, ZERO_CELSIUS_K};
use ah_core::{Temperature, k, kelvin_of};

/// Hemicellulose concentration at t = 0, in g/L.
pub const INITIAL_HEMICELLULOSE: f64 = 70.0;

/// Mass fraction of xylose reported as furfural.
pub const FURFURAL_YIELD: f64 = 0.7;

/// Number of samples on the time grid, both endpoints included.
pub const SAMPLE_COUNT: usize = 100;

/// Reactor temperature in °C.
const REACTOR_TEMPERATURE_C: f64 = 121.1;

/// Kinetic and physical constants for the two-step hydrolysis scheme
/// (hemicellulose -> xylose -> furfural).
///
/// Not user-configurable at the application surfaces; [`Default`] carries the
/// reference parameter set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConstants {
    /// Pre-exponential factor for hemicellulose hydrolysis (kH0).
    pub k_h0: f64,
    /// Activation energy for hemicellulose hydrolysis, cal/mol (EH).
    pub e_h: f64,
    /// Reaction order on acid concentration for hemicellulose (βH).
    pub beta_h: f64,
    /// Gas constant, cal/(mol·K).
    pub gas_constant: f64,
    /// Pre-exponential factor for xylose degradation (kX0).
    pub k_x0: f64,
    /// Activation energy for xylose degradation, cal/mol (EX).
    pub e_x: f64,
    /// Reaction order on acid concentration for xylose (βX).
    pub beta_x: f64,
    /// Absolute reactor temperature.
    pub temperature: Temperature,
    /// Acid density, g/mL (ρa).
    pub acid_density: f64,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            k_h0: 7.709e8,
            e_h: 20301.9,
            beta_h: 1.0,
            gas_constant: R_CAL_PER_MOL_K,
            k_x0: 2.6e8,
            e_x: 20312.0,
            beta_x: 0.15,
            temperature: k(REACTOR_TEMPERATURE_C + ZERO_CELSIUS_K),
            acid_density: 1.84,
        }
    }
}

impl ModelConstants {
    /// Temperature factor exp(-E / (R·T)) for an activation energy in cal/mol.
    pub fn arrhenius(&self, activation_energy: f64) -> f64 {
        (-activation_energy / (self.gas_constant * kelvin_of(self.temperature))).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_temperature_in_kelvin() {
        let c = ModelConstants::default();
        assert_eq!(kelvin_of(c.temperature), 121.1 + 273.15);
    }

    #[test]
    fn arrhenius_factor_is_small_and_positive() {
        let c = ModelConstants::default();
        let f = c.arrhenius(c.e_h);
        assert!(f > 0.0 && f < 1e-10);
        assert!(c.arrhenius(0.0) == 1.0);
    }
}
