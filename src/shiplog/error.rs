use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShiplogError {
    #[error("Entry text cannot be empty")]
    EmptyEntry,

    #[error("Invalid index: {0}")]
    InvalidIndex(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ShiplogError>;
