//! Fixed-schema simulation output.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::inputs::SimulationInputs;
use crate::rate::RateConstants;

/// Modeled chemical species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Hemicellulose,
    Xylose,
    Furfural,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Hemicellulose, Species::Xylose, Species::Furfural];

    /// Column header used in tables, charts and CSV files.
    pub fn column_name(self) -> &'static str {
        match self {
            Species::Hemicellulose => "Hemicellulose",
            Species::Xylose => "Xylose",
            Species::Furfural => "Furfural",
        }
    }

    pub fn value_of(self, point: &SamplePoint) -> f64 {
        match self {
            Species::Hemicellulose => point.hemicellulose,
            Species::Xylose => point.xylose,
            Species::Furfural => point.furfural,
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Species::ALL
            .into_iter()
            .find(|species| species.column_name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown species '{s}' (expected Hemicellulose, Xylose or Furfural)")
            })
    }
}

/// One row of the output table. Concentrations in g/L, time in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub time: f64,
    pub hemicellulose: f64,
    pub xylose: f64,
    pub furfural: f64,
}

/// Concentration curves of one run, aligned on a shared uniform time grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub inputs: SimulationInputs,
    /// Rates the samples were evaluated with.
    pub rates: RateConstants,
    pub points: Vec<SamplePoint>,
}

impl SimulationResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SamplePoint> {
        self.points.iter()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.time).collect()
    }

    pub fn series(&self, species: Species) -> Vec<f64> {
        self.points.iter().map(|p| species.value_of(p)).collect()
    }

    /// `(time, value)` pairs for one species, ready for plotting.
    pub fn series_points(&self, species: Species) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [p.time, species.value_of(p)])
            .collect()
    }
}
