//! JSON export: an array of sample objects.

use std::fs;
use std::path::Path;

use ah_kinetics::SimulationResult;

use crate::ResultsResult;

pub fn to_json_string(result: &SimulationResult) -> ResultsResult<String> {
    Ok(serde_json::to_string_pretty(&result.points)?)
}

pub fn write_json(result: &SimulationResult, path: &Path) -> ResultsResult<()> {
    fs::write(path, to_json_string(result)?)?;
    Ok(())
}
