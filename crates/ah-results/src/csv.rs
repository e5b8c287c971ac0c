//! CSV export.
//!
//! Layout: one header row, one row per sample, comma separated, no index
//! column, `\n` line endings, UTF-8. Floats use the shortest representation
//! that round-trips (`70.0`, `1.2121212121212122`), with exponents written
//! signed and at least two digits wide (`1.8738321709042943e-06`, `1e+16`).

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use ah_kinetics::{SimulationResult, Species};

use crate::ResultsResult;

/// File name offered by the download surfaces.
pub const CSV_FILE_NAME: &str = "simulacion_acidhydrochem.csv";

pub const CSV_HEADER: &str = "time,Hemicellulose,Xylose,Furfural";

pub fn to_csv_string(result: &SimulationResult) -> String {
    let mut csv = String::with_capacity(64 * (result.len() + 1));
    csv.push_str(CSV_HEADER);
    csv.push('\n');
    for p in result.iter() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            csv,
            "{},{},{},{}",
            format_float(p.time),
            format_float(p.hemicellulose),
            format_float(p.xylose),
            format_float(p.furfural)
        );
    }
    csv
}

/// Two-column `time,<Species>` view of one curve.
pub fn series_to_csv(result: &SimulationResult, species: Species) -> String {
    let mut csv = format!("time,{}\n", species.column_name());
    for p in result.iter() {
        let _ = writeln!(
            csv,
            "{},{}",
            format_float(p.time),
            format_float(species.value_of(p))
        );
    }
    csv
}

/// Shortest round-trip text of `v`, laid out like Python's `repr`.
///
/// `Debug` already picks the same digits and the same switch to exponent
/// form (below 1e-4 or from 1e16), but writes `e-6` and `e16` where
/// Python writes `e-06` and `e+16`.
pub fn format_float(v: f64) -> String {
    let text = format!("{v:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

pub fn write_csv(result: &SimulationResult, path: &Path) -> ResultsResult<()> {
    fs::write(path, to_csv_string(result))?;
    Ok(())
}
