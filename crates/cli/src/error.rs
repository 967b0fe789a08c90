// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("unable to parse the LFOPTS environment variable: {0}")]
    Lfopts(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
