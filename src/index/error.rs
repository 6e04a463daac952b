use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IndexError - Unavailable: {0}")]
    Unavailable(String),
    #[error("IndexError - Io: {0}")]
    Io(#[from] std::io::Error),
    #[error("IndexError - Decode: {0}")]
    Decode(#[from] serde_json::Error),
}
