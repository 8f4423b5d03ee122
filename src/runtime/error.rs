use crate::config::ConfigError;
use crate::formats::IoError;
use crate::model::CoreError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("volume error: {0}")]
    Core(#[from] CoreError),

    #[error("I/O service error: {0}")]
    Io(#[from] IoError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("nothing to render: {0}")]
    Render(String),

    #[error("viewer window failure: {0}")]
    Ui(String),
}
