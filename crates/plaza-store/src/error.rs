use plaza_types::RecordAddress;

use crate::record::RecordKind;

/// Errors from account-store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record already occupies the derived address.
    ///
    /// This is the substrate-level face of every uniqueness constraint:
    /// duplicate posts, duplicate comments, and double reactions all
    /// surface here.
    #[error("address already occupied: {0}")]
    AddressOccupied(RecordAddress),

    /// An in-place update targeted an address with no record.
    #[error("no record at address: {0}")]
    MissingRecord(RecordAddress),

    /// The encoded record exceeds its schema's size ceiling.
    #[error("record too large for {kind}: {actual} bytes exceeds ceiling {limit}")]
    RecordTooLarge {
        kind: RecordKind,
        limit: usize,
        actual: usize,
    },

    /// A record decoded to a different kind than the caller expected.
    #[error("record kind mismatch: expected {expected}, found {found}")]
    KindMismatch {
        expected: RecordKind,
        found: RecordKind,
    },

    /// A record's contents violate an invariant the caller relies on
    /// (e.g. a reaction counter that would underflow).
    #[error("invalid record state: {0}")]
    InvalidState(String),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
