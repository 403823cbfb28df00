use plaza_crypto::DeriveError;
use plaza_store::StoreError;

use crate::validation::Field;

/// Errors produced by ledger operations.
///
/// Every failure is detected before any mutation; an operation that
/// returns an error has persisted nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// A record already occupies the derived address: duplicate post,
    /// duplicate comment, or double reaction.
    #[error("a record already exists at the derived address")]
    AlreadyExists,

    /// The target address holds no record.
    #[error("no record exists at the target address")]
    NotFound,

    /// The caller's identity does not control the target record, either
    /// because the stored owner differs or because the supplied address
    /// does not match the caller's derivation.
    #[error("caller identity does not control the target record")]
    Unauthorized,

    /// A text field exceeds its byte ceiling.
    #[error("{field} is {actual} bytes; limit is {limit}")]
    FieldTooLong {
        field: Field,
        limit: usize,
        actual: usize,
    },

    /// A derivation component exceeded the substrate addressing limit.
    ///
    /// Ledger operations validate field sizes first, so this surfaces only
    /// for callers driving the deriver directly.
    #[error(transparent)]
    SeedTooLong(#[from] DeriveError),

    /// A stored record failed to decode or decoded to the wrong kind.
    #[error("corrupt record: {0}")]
    CorruptRecord(String),

    /// The storage substrate failed.
    #[error("store error: {0}")]
    Store(String),
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AddressOccupied(_) => Self::AlreadyExists,
            StoreError::MissingRecord(_) => Self::NotFound,
            StoreError::KindMismatch { .. }
            | StoreError::Serialization(_)
            | StoreError::InvalidState(_) => Self::CorruptRecord(err.to_string()),
            StoreError::RecordTooLarge { .. } | StoreError::Io(_) => Self::Store(err.to_string()),
        }
    }
}
