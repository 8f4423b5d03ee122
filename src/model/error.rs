use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid dimension size 0 at axis {axis}")]
    ZeroSizedDimension { axis: usize },

    #[error("volume must have 3 dimensions after padding, found {ndim}")]
    Dimensionality { ndim: usize },

    #[error("invalid volume shape: {0}")]
    InvalidShape(String),
}
