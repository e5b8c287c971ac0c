//! Dilute-acid hydrolysis kinetics for acidhydrochem.
//!
//! Provides:
//! - Fixed model constants (pre-exponential factors, activation energies, reaction orders)
//! - Simulation inputs with the bounds, steps and defaults of each parameter
//! - Arrhenius rate constants and the liquid-to-solid ratio
//! - Closed-form evaluation of hemicellulose, xylose and furfural over a uniform time grid

pub mod constants;
pub mod error;
pub mod inputs;
pub mod rate;
pub mod record;
pub mod simulate;

// Re-exports for public API
pub use constants::{FURFURAL_YIELD, INITIAL_HEMICELLULOSE, ModelConstants, SAMPLE_COUNT};
pub use error::{KineticsError, KineticsResult};
pub use inputs::{Parameter, ParameterSpec, SimulationInputs};
pub use rate::RateConstants;
pub use record::{SamplePoint, SimulationResult, Species};
pub use simulate::{simulate, simulate_with};
