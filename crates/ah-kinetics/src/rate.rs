//! Effective rate constants for one set of inputs.

use serde::{Deserialize, Serialize};

use crate::constants::ModelConstants;
use crate::inputs::SimulationInputs;

/// Time-independent quantities of a run, computed once per call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConstants {
    /// kH0 · C^βH · exp(-EH / (R·T)), 1/min.
    pub k_hemicellulose: f64,
    /// kX0 · C^βX · exp(-EX / (R·T)), 1/min.
    pub k_xylose: f64,
    /// Liquid-to-solid ratio scaled by acid density, (L · ρa) / S.
    pub phi: f64,
}

impl RateConstants {
    pub fn new(inputs: &SimulationInputs, constants: &ModelConstants) -> Self {
        let c = inputs.acid_concentration;
        Self {
            k_hemicellulose: constants.k_h0
                * c.powf(constants.beta_h)
                * constants.arrhenius(constants.e_h),
            k_xylose: constants.k_x0 * c.powf(constants.beta_x) * constants.arrhenius(constants.e_x),
            phi: inputs.liquid_ratio * constants.acid_density / inputs.solid_mass_kg,
        }
    }
}
