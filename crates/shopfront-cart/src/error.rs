use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("storage I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("storage file {path} is not a JSON object of string values: {source}")]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("value under key \"{key}\" is not a JSON array of products: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize cart: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("total price of {count} cart item(s) is out of range")]
    TotalOverflow { count: usize },

    #[error("cart lock poisoned by a panicked writer")]
    Poisoned,
}
