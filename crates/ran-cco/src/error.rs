use thiserror::Error;

#[derive(Debug, Error)]
pub enum CcoError {
    #[error("optimizer configuration error: {0}")]
    Config(String),
}

pub type CcoResult<T> = Result<T, CcoError>;
