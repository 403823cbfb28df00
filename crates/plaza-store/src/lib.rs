//! Record schemas and the storage-substrate boundary for Plaza.
//!
//! This crate defines:
//! - The fixed-layout record types ([`PostRecord`], [`CommentRecord`],
//!   [`ReactionRecord`]) and their encoded form ([`StoredRecord`])
//! - The [`AccountStore`] trait — the interface the lifecycle controller
//!   consumes from whatever substrate physically persists records
//! - [`InMemoryAccountStore`] for tests and embedding

pub mod error;
pub mod memory;
pub mod record;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryAccountStore;
pub use record::{
    CommentRecord, PostRecord, ReactionKind, ReactionRecord, RecordKind, StoredRecord,
    COMMENT_RECORD_CEILING, MAX_CONTENT_BYTES, MAX_TOPIC_BYTES, POST_RECORD_CEILING,
    REACTION_RECORD_CEILING,
};
pub use traits::AccountStore;
