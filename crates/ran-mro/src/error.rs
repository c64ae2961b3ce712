use ran_core::{AntennaId, UserId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MroError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("user {user} is connected to unknown antenna {antenna}")]
    UnknownServingAntenna { user: UserId, antenna: AntennaId },
}

pub type MroResult<T> = Result<T, MroError>;
