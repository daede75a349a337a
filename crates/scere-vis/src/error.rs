//! Visualization error types.

use scere_common::ApiError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, VisError>;

#[derive(Debug, Error)]
pub enum VisError {
    #[error("unknown coloring column: {0:?}")]
    UnknownColumn(String),

    #[error("unknown color scale: {0:?}")]
    UnknownColorScale(String),

    #[error("values and colors differ in length: {values} values, {colors} colors")]
    MismatchedPalette { values: usize, colors: usize },
}

impl From<VisError> for ApiError {
    fn from(err: VisError) -> Self {
        // Coloring arguments come straight from the request.
        ApiError::BadRequest(err.to_string())
    }
}
