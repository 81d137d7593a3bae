use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZapError {
    #[error("Failed to read storage: {0}")]
    StorageRead(String),

    #[error("Stored history is corrupt: {0}")]
    CorruptData(#[source] serde_json::Error),

    #[error("Failed to write storage: {0}")]
    StorageWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl ZapError {
    /// True for failures that the load policy degrades to an empty history.
    pub fn is_degradable(&self) -> bool {
        matches!(self, ZapError::StorageRead(_) | ZapError::CorruptData(_))
    }
}

pub type Result<T> = std::result::Result<T, ZapError>;
