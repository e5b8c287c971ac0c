//! Smoke test for the ah-app run service.

use ah_app::{AppError, ExportFormat, RunRequest, export, run, summarize};
use ah_kinetics::SimulationInputs;

#[test]
fn run_defaults_and_export_csv() {
    let response = run(&RunRequest::new(SimulationInputs::default())).unwrap();
    assert_eq!(response.result.len(), 100);
    assert!(response.timing.solve_time_s >= 0.0);
    assert!(response.result.rates.phi > 9.19 && response.result.rates.phi < 9.21);

    let path = std::env::temp_dir().join(ah_results::CSV_FILE_NAME);
    export(&response.result, ExportFormat::Csv, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("time,Hemicellulose,Xylose,Furfural\n"));
    assert_eq!(content.lines().count(), 101);
}

#[test]
fn export_json_matches_render() {
    let response = run(&RunRequest::new(SimulationInputs::new(5.0, 1.0, 2.0, 60.0))).unwrap();
    let path = std::env::temp_dir().join("ah_app_run_smoke.json");
    export(&response.result, ExportFormat::Json, &path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let rendered = ExportFormat::Json.render(&response.result).unwrap();
    assert_eq!(written, rendered);
}

#[test]
fn zero_biomass_is_invalid_input() {
    let inputs = SimulationInputs {
        solid_mass_kg: 0.0,
        ..Default::default()
    };
    let err = run(&RunRequest::new(inputs)).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}

#[test]
fn summary_after_run() {
    let response = run(&RunRequest::new(SimulationInputs::default())).unwrap();
    let summary = summarize(&response.result).unwrap();
    assert_eq!(summary.point_count, 100);
    assert!(summary.last.hemicellulose < summary.initial.hemicellulose);
}

#[test]
fn reported_rates_are_the_ones_used_for_the_curves() {
    let inputs = SimulationInputs::new(8.0, 2.5, 1.7, 150.0);
    let response = run(&RunRequest::new(inputs)).unwrap();
    let rates = response.result.rates;
    assert_eq!(
        rates,
        ah_kinetics::RateConstants::new(&inputs, &ah_kinetics::ModelConstants::default())
    );

    let last = ah_results::final_point(&response.result).unwrap();
    let k = rates.k_hemicellulose * rates.phi;
    assert_eq!(last.hemicellulose, 70.0 * (-k * last.time).exp());
}
