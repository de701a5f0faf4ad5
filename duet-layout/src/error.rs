use std::io;

use thiserror::Error;

/// Errors raised by a storage medium while reading or writing entries.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("storage file is not a valid key-value document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("storage entry {0} does not hold a string")]
    NotAString(String),

    #[error("storage medium is unavailable")]
    Unavailable,
}

/// Errors raised while decoding a persisted sidebar state blob.
#[derive(Debug, Error)]
pub enum StateDecodeError {
    #[error("sidebar state is not valid JSON or does not match the schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("sidebar state must be a JSON object")]
    NotAnObject,
}

/// Errors raised by misuse of the keyboard dispatcher lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KeyboardError {
    #[error("keyboard dispatcher is already subscribed")]
    AlreadySubscribed,

    #[error("keyboard subscription {0} is not active")]
    UnknownSubscription(u64),
}
