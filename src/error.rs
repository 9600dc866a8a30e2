use crate::fetch::error::FetchError;
use crate::normalize::error::DataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("Coordinate ({latitude}, {longitude}) is outside the valid range")]
    InvalidCoordinate { latitude: f64, longitude: f64 },
}
