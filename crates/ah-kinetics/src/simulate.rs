//! Closed-form evaluation of the hydrolysis model over the time grid.

use ah_core::linspace;

use crate::constants::{FURFURAL_YIELD, INITIAL_HEMICELLULOSE, ModelConstants, SAMPLE_COUNT};
use crate::error::KineticsResult;
use crate::inputs::SimulationInputs;
use crate::rate::RateConstants;
use crate::record::{SamplePoint, SimulationResult};

/// Run the model with the reference constants.
pub fn simulate(inputs: &SimulationInputs) -> KineticsResult<SimulationResult> {
    simulate_with(inputs, &ModelConstants::default())
}

/// Run the model with explicit constants.
///
/// Samples `SAMPLE_COUNT` points on `[0, τ]`. Each sample is independent:
///
/// ```text
/// H(t) = 70 · exp(-kH · Φ · t)
/// X(t) = kH · Φ · H(t) · t - kX · Φ · t
/// F(t) = 0.7 · X(t)
/// ```
///
/// Fails with `InvalidInput` when the solid mass is not positive or any
/// input is negative or non-finite.
pub fn simulate_with(
    inputs: &SimulationInputs,
    constants: &ModelConstants,
) -> KineticsResult<SimulationResult> {
    inputs.validate()?;

    let rates = RateConstants::new(inputs, constants);
    let points = linspace(0.0, inputs.residence_time_min, SAMPLE_COUNT)
        .into_iter()
        .map(|t| sample(&rates, t))
        .collect();

    Ok(SimulationResult {
        inputs: *inputs,
        rates,
        points,
    })
}

fn sample(rates: &RateConstants, t: f64) -> SamplePoint {
    let hemicellulose = INITIAL_HEMICELLULOSE * (-rates.k_hemicellulose * rates.phi * t).exp();
    // X uses the already-decayed H(t) times t, not the integrated consecutive-reaction solution.
    let xylose = rates.k_hemicellulose * rates.phi * hemicellulose * t
        - rates.k_xylose * rates.phi * t;
    SamplePoint {
        time: t,
        hemicellulose,
        xylose,
        furfural: xylose * FURFURAL_YIELD,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KineticsError;
    use ah_core::{Tolerances, nearly_equal};

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-12,
            rel: 1e-12,
        }
    }

    #[test]
    fn default_scenario() {
        let result = simulate(&SimulationInputs::default()).unwrap();
        assert_eq!(result.len(), 100);
        assert_eq!(result.points[0].hemicellulose, 70.0);
        assert_eq!(result.points[99].time, 120.0);
        for p in result.iter() {
            assert!(nearly_equal(p.furfural, 0.7 * p.xylose, tol()));
        }
    }

    #[test]
    fn default_scenario_reference_values() {
        let result = simulate(&SimulationInputs::default()).unwrap();
        let last = result.points[99];
        assert!(nearly_equal(last.hemicellulose, 8.091286526331434, tol()));
        assert!(nearly_equal(last.xylose, 16.163765340507094, tol()));
        let mid = result.points[50];
        assert!(nearly_equal(mid.hemicellulose, 23.541009397204487, tol()));
        assert!(nearly_equal(mid.xylose, 24.99987283016953, tol()));
    }

    #[test]
    fn zero_residence_time_collapses_grid() {
        let inputs = SimulationInputs {
            residence_time_min: 0.0,
            ..Default::default()
        };
        let result = simulate(&inputs).unwrap();
        assert_eq!(result.len(), 100);
        for p in result.iter() {
            assert_eq!(p.time, 0.0);
            assert_eq!(p.hemicellulose, 70.0);
            assert_eq!(p.xylose, 0.0);
            assert_eq!(p.furfural, 0.0);
        }
    }

    #[test]
    fn zero_liquid_ratio_means_no_reaction() {
        let inputs = SimulationInputs {
            liquid_ratio: 0.0,
            ..Default::default()
        };
        let result = simulate(&inputs).unwrap();
        for p in result.iter() {
            assert_eq!(p.hemicellulose, 70.0);
            assert_eq!(p.xylose, 0.0);
            assert_eq!(p.furfural, 0.0);
        }
    }

    #[test]
    fn zero_solid_mass_is_an_error() {
        let inputs = SimulationInputs {
            solid_mass_kg: 0.0,
            ..Default::default()
        };
        let err = simulate(&inputs).unwrap_err();
        assert!(matches!(err, KineticsError::InvalidInput { .. }));
        assert!(format!("{err}").contains("solid mass must be positive"));
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let inputs = SimulationInputs::new(7.0, 3.5, 2.3, 170.0);
        let a = simulate(&inputs).unwrap();
        let b = simulate(&inputs).unwrap();
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa.time.to_bits(), pb.time.to_bits());
            assert_eq!(pa.hemicellulose.to_bits(), pb.hemicellulose.to_bits());
            assert_eq!(pa.xylose.to_bits(), pb.xylose.to_bits());
            assert_eq!(pa.furfural.to_bits(), pb.furfural.to_bits());
        }
    }

    #[test]
    fn result_carries_its_inputs() {
        let inputs = SimulationInputs::new(4.0, 1.0, 1.0, 60.0);
        assert_eq!(simulate(&inputs).unwrap().inputs, inputs);
    }

    #[test]
    fn result_carries_the_rates_it_was_sampled_with() {
        let inputs = SimulationInputs::new(12.0, 1.5, 3.4, 90.0);
        let constants = ModelConstants {
            temperature: ah_core::k(410.0),
            ..Default::default()
        };
        let result = simulate_with(&inputs, &constants).unwrap();
        assert_eq!(result.rates, RateConstants::new(&inputs, &constants));

        let rates = result.rates;
        for p in result.iter() {
            let k = rates.k_hemicellulose * rates.phi;
            assert_eq!(p.hemicellulose, INITIAL_HEMICELLULOSE * (-k * p.time).exp());
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use ah_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn inputs_strategy() -> impl Strategy<Value = SimulationInputs> {
        (0.0_f64..=20.0, 0.5_f64..=10.0, 0.0_f64..=10.0, 0.0_f64..=200.0)
            .prop_map(|(l, s, c, tau)| SimulationInputs::new(l, s, c, tau))
    }

    proptest! {
        #[test]
        fn time_grid_is_uniform_and_closed(inputs in inputs_strategy()) {
            let result = simulate(&inputs).unwrap();
            let times = result.times();
            prop_assert_eq!(times.len(), SAMPLE_COUNT);
            prop_assert_eq!(times[0], 0.0);
            prop_assert_eq!(times[SAMPLE_COUNT - 1], inputs.residence_time_min);

            let step = inputs.residence_time_min / (SAMPLE_COUNT - 1) as f64;
            let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
            for pair in times.windows(2) {
                prop_assert!(pair[1] >= pair[0]);
                prop_assert!(nearly_equal(pair[1] - pair[0], step, tol));
            }
        }

        #[test]
        fn furfural_tracks_xylose(inputs in inputs_strategy()) {
            let result = simulate(&inputs).unwrap();
            let tol = Tolerances { abs: 1e-12, rel: 1e-12 };
            for p in result.iter() {
                prop_assert!(nearly_equal(p.furfural, 0.7 * p.xylose, tol));
            }
        }

        #[test]
        fn hemicellulose_never_increases(inputs in inputs_strategy()) {
            let result = simulate(&inputs).unwrap();
            let h = result.series(crate::Species::Hemicellulose);
            for pair in h.windows(2) {
                prop_assert!(pair[1] <= pair[0]);
            }
            for value in h {
                prop_assert!(value.is_finite());
            }
        }
    }
}
