use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Schema shape error: {0}")]
    Shape(String),

    #[error("Expected at least 3 items (one flag plus the COUNT and INVALID sentinels), found {0}")]
    TooFewItems(usize),

    #[error("Flag values are not a dense 0-based run: item {index} ({name:?}) has value {value}")]
    SparseValues {
        index: usize,
        name:  String,
        value: u64,
    },

    #[error("Sentinel error: {0}")]
    Sentinel(String),

    #[error("Invalid flag name(s): {0}")]
    InvalidName(String),

    #[error("Duplicate flag name {0:?}")]
    DuplicateName(String),

    #[error("Flag names {first:?} and {second:?} both normalize to {normalized:?}")]
    NameCollision {
        first:      String,
        second:     String,
        normalized: String,
    },
}
