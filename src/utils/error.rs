use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, LevelsError>;
