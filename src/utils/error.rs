use thiserror::Error;

#[derive(Error, Debug)]
pub enum RtbError {
    #[error("bid is missing ID")]
    MissingBidId,

    #[error("bid is missing impression ID")]
    MissingImpressionId,

    #[error("unknown type: {kind}")]
    UnknownType { kind: &'static str },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RtbError>;
