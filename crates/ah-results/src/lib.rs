//! ah-results: series queries and file export for simulation results.

pub mod csv;
pub mod json;
pub mod query;

pub use csv::{CSV_FILE_NAME, CSV_HEADER, format_float, series_to_csv, to_csv_string, write_csv};
pub use json::{to_json_string, write_json};
pub use query::{SeriesPeak, final_point, peak, time_range};

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Result has no samples")]
    Empty,
}
