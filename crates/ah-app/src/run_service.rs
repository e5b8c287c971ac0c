//! Simulation execution and export service.

use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use ah_kinetics::{ModelConstants, SimulationInputs, SimulationResult};

use crate::error::{AppError, AppResult};
use crate::preset_service;

/// Options for running simulations.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Reject parameters outside the slider bounds before solving.
    pub enforce_ranges: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            enforce_ranges: true,
        }
    }
}

/// Request to execute a run.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    pub inputs: SimulationInputs,
    pub options: RunOptions,
}

impl RunRequest {
    pub fn new(inputs: SimulationInputs) -> Self {
        Self {
            inputs,
            options: RunOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunTiming {
    pub solve_time_s: f64,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub result: SimulationResult,
    pub timing: RunTiming,
}

/// Execute one simulation. Stateless: nothing is cached between calls.
pub fn run(request: &RunRequest) -> AppResult<RunResponse> {
    tracing::debug!(inputs = ?request.inputs, "starting simulation");

    if request.options.enforce_ranges {
        preset_service::validate_inputs(&request.inputs)?;
    }

    let constants = ModelConstants::default();
    let started = Instant::now();
    let result = ah_kinetics::simulate_with(&request.inputs, &constants)?;
    let timing = RunTiming {
        solve_time_s: started.elapsed().as_secs_f64(),
    };

    tracing::info!(
        points = result.len(),
        solve_time_s = timing.solve_time_s,
        "simulation completed"
    );

    Ok(RunResponse { result, timing })
}

/// Export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Render the result in this format.
    pub fn render(self, result: &SimulationResult) -> AppResult<String> {
        match self {
            ExportFormat::Csv => Ok(ah_results::to_csv_string(result)),
            ExportFormat::Json => Ok(ah_results::to_json_string(result)?),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(AppError::InvalidInput(format!(
                "unknown export format '{other}' (expected csv or json)"
            ))),
        }
    }
}

/// Write the result to `path` in the requested format.
pub fn export(result: &SimulationResult, format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => ah_results::write_csv(result, path)?,
        ExportFormat::Json => ah_results::write_json(result, path)?,
    }
    tracing::info!(path = %path.display(), format = format.extension(), "exported results");
    Ok(())
}
