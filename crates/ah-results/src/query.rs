//! Series queries over a finished run.

use ah_kinetics::{SamplePoint, SimulationResult, Species};

use crate::{ResultsError, ResultsResult};

/// Largest value of one curve and the grid time it occurs at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPeak {
    pub species: Species,
    pub time: f64,
    pub value: f64,
}

pub fn time_range(result: &SimulationResult) -> ResultsResult<(f64, f64)> {
    match (result.points.first(), result.points.last()) {
        (Some(first), Some(last)) => Ok((first.time, last.time)),
        _ => Err(ResultsError::Empty),
    }
}

pub fn final_point(result: &SimulationResult) -> ResultsResult<SamplePoint> {
    result.points.last().copied().ok_or(ResultsError::Empty)
}

/// Earliest sample holding the maximum of `species`.
pub fn peak(result: &SimulationResult, species: Species) -> ResultsResult<SeriesPeak> {
    let mut best: Option<&SamplePoint> = None;
    for p in result.iter() {
        if best.is_none_or(|b| species.value_of(p) > species.value_of(b)) {
            best = Some(p);
        }
    }
    let p = best.ok_or(ResultsError::Empty)?;
    Ok(SeriesPeak {
        species,
        time: p.time,
        value: species.value_of(p),
    })
}
