//! Run summaries for display.

use ah_kinetics::{SamplePoint, SimulationResult, Species};
use ah_results::SeriesPeak;

use crate::error::AppResult;

/// Summary of a finished run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub point_count: usize,
    pub time_range: (f64, f64),
    pub initial: SamplePoint,
    pub last: SamplePoint,
    pub xylose_peak: SeriesPeak,
    pub furfural_peak: SeriesPeak,
}

pub fn summarize(result: &SimulationResult) -> AppResult<RunSummary> {
    let time_range = ah_results::time_range(result)?;
    let initial = result.points[0];
    Ok(RunSummary {
        point_count: result.len(),
        time_range,
        initial,
        last: ah_results::final_point(result)?,
        xylose_peak: ah_results::peak(result, Species::Xylose)?,
        furfural_peak: ah_results::peak(result, Species::Furfural)?,
    })
}
