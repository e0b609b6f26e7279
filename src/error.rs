use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("trade not found: {0}")]
    TradeNotFound(String),

    #[error("deleting a trade requires explicit confirmation")]
    DeleteNotConfirmed,

    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),
}
