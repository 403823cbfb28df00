use serde::{Deserialize, Serialize};
use plaza_types::{AuthorId, RecordAddress};

use crate::error::{StoreError, StoreResult};

/// Maximum topic length in bytes.
///
/// The topic is used raw as an address-derivation component, so it is
/// capped at the substrate's 32-byte component limit.
pub const MAX_TOPIC_BYTES: usize = 32;

/// Maximum post or comment content length in bytes.
pub const MAX_CONTENT_BYTES: usize = 500;

/// Encoded-size ceiling for a post record.
///
/// Layout: author (32) + topic (8-byte length prefix + 32) + content
/// (8 + 500) + two counters (8 + 8) + salt (1).
pub const POST_RECORD_CEILING: usize = 597;

/// Encoded-size ceiling for a comment record.
///
/// Layout: author (32) + parent post (32) + content (8 + 500) + two
/// counters (8 + 8) + salt (1).
pub const COMMENT_RECORD_CEILING: usize = 589;

/// Encoded-size ceiling for a reaction record.
///
/// Layout: reactor (32) + target (32) + kind tag (4) + salt (1).
pub const REACTION_RECORD_CEILING: usize = 69;

/// Discriminator for the kind of record stored at an address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// A published post.
    Post,
    /// A comment on a post.
    Comment,
    /// A like/dislike on a post.
    PostReaction,
    /// A like/dislike on a comment.
    CommentReaction,
}

impl RecordKind {
    /// Returns `true` for the two reaction kinds.
    pub fn is_reaction(&self) -> bool {
        matches!(self, Self::PostReaction | Self::CommentReaction)
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Post => write!(f, "post"),
            Self::Comment => write!(f, "comment"),
            Self::PostReaction => write!(f, "post-reaction"),
            Self::CommentReaction => write!(f, "comment-reaction"),
        }
    }
}

/// The direction of a reaction. Immutable for the life of the record;
/// changing it requires removing the reaction and adding a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReactionKind {
    Like,
    Dislike,
}

impl std::fmt::Display for ReactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Like => write!(f, "like"),
            Self::Dislike => write!(f, "dislike"),
        }
    }
}

/// A stored record: discriminator tag + encoded body + cached size.
///
/// `StoredRecord` is the unit of storage. The store never interprets the
/// body — it is a pure keyed map from derived address to record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredRecord {
    /// The kind of record this is.
    pub kind: RecordKind,
    /// The bincode-encoded record body.
    pub data: Vec<u8>,
    /// The size of `data` in bytes.
    pub size: u64,
}

impl StoredRecord {
    /// Create a stored record from kind and encoded body.
    pub fn new(kind: RecordKind, data: Vec<u8>) -> Self {
        let size = data.len() as u64;
        Self { kind, data, size }
    }
}

// ---------------------------------------------------------------------------
// PostRecord
// ---------------------------------------------------------------------------

/// A published post.
///
/// Address = derive("post", topic, author). Uniqueness per (author, topic)
/// falls out of the derivation: a second post with the same pair lands on
/// an occupied slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Identity that authored and owns this post.
    pub author: AuthorId,
    /// Topic line, at most [`MAX_TOPIC_BYTES`] bytes.
    pub topic: String,
    /// Body text, at most [`MAX_CONTENT_BYTES`] bytes.
    pub content: String,
    /// Number of live Like reactions.
    pub like_count: u64,
    /// Number of live Dislike reactions.
    pub dislike_count: u64,
    /// Re-derivation salt recorded at creation.
    pub salt: u8,
}

impl PostRecord {
    /// Create a fresh post record with zeroed counters.
    pub fn new(
        author: AuthorId,
        topic: impl Into<String>,
        content: impl Into<String>,
        salt: u8,
    ) -> Self {
        Self {
            author,
            topic: topic.into(),
            content: content.into(),
            like_count: 0,
            dislike_count: 0,
            salt,
        }
    }

    /// Encode into a [`StoredRecord`], enforcing the size ceiling.
    pub fn to_stored_record(&self) -> StoreResult<StoredRecord> {
        let data =
            bincode::serialize(self).map_err(|e| StoreError::Serialization(e.to_string()))?;
        if data.len() > POST_RECORD_CEILING {
            return Err(StoreError::RecordTooLarge {
                kind: RecordKind::Post,
                limit: POST_RECORD_CEILING,
                actual: data.len(),
            });
        }
        Ok(StoredRecord::new(RecordKind::Post, data))
    }

    /// Decode from a [`StoredRecord`].
    pub fn from_stored_record(record: &StoredRecord) -> StoreResult<Self> {
        if record.kind != RecordKind::Post {
            return Err(StoreError::KindMismatch {
                expected: RecordKind::Post,
                found: record.kind,
            });
        }
        bincode::deserialize(&record.data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// CommentRecord
// ---------------------------------------------------------------------------

/// A comment on a post.
///
/// Address = derive("comment", author, digest(content), parent post). The
/// digest keying lets the same author leave multiple distinct comments on
/// one post, but not the identical text twice while the first stands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentRecord {
    /// Identity that authored and owns this comment.
    pub author: AuthorId,
    /// Address of the post this comment is attached to.
    pub parent_post: RecordAddress,
    /// Body text, at most [`MAX_CONTENT_BYTES`] bytes.
    pub content: String,
    /// Number of live Like reactions.
    pub like_count: u64,
    /// Number of live Dislike reactions.
    pub dislike_count: u64,
    /// Re-derivation salt recorded at creation.
    pub salt: u8,
}

impl CommentRecord {
    /// Create a fresh comment record with zeroed counters.
    pub fn new(
        author: AuthorId,
        parent_post: RecordAddress,
        content: impl Into<String>,
        salt: u8,
    ) -> Self {
        Self {
            author,
            parent_post,
            content: content.into(),
            like_count: 0,
            dislike_count: 0,
            salt,
        }
    }

    /// Encode into a [`StoredRecord`], enforcing the size ceiling.
    pub fn to_stored_record(&self) -> StoreResult<StoredRecord> {
        let data =
            bincode::serialize(self).map_err(|e| StoreError::Serialization(e.to_string()))?;
        if data.len() > COMMENT_RECORD_CEILING {
            return Err(StoreError::RecordTooLarge {
                kind: RecordKind::Comment,
                limit: COMMENT_RECORD_CEILING,
                actual: data.len(),
            });
        }
        Ok(StoredRecord::new(RecordKind::Comment, data))
    }

    /// Decode from a [`StoredRecord`].
    pub fn from_stored_record(record: &StoredRecord) -> StoreResult<Self> {
        if record.kind != RecordKind::Comment {
            return Err(StoreError::KindMismatch {
                expected: RecordKind::Comment,
                found: record.kind,
            });
        }
        bincode::deserialize(&record.data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// ReactionRecord
// ---------------------------------------------------------------------------

/// A like or dislike, on either a post or a comment.
///
/// Address = derive(namespace, reactor, target) — the kind is not a
/// derivation component, so opposite reactions from the same reactor
/// collide, enforcing "at most one reaction per (reactor, target)".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRecord {
    /// Identity that placed and owns this reaction.
    pub reactor: AuthorId,
    /// Address of the post or comment reacted to.
    pub target: RecordAddress,
    /// Like or Dislike. Immutable once set.
    pub kind: ReactionKind,
    /// Re-derivation salt recorded at creation.
    pub salt: u8,
}

impl ReactionRecord {
    /// Create a reaction record.
    pub fn new(reactor: AuthorId, target: RecordAddress, kind: ReactionKind, salt: u8) -> Self {
        Self {
            reactor,
            target,
            kind,
            salt,
        }
    }

    /// Encode into a [`StoredRecord`] of the given reaction kind,
    /// enforcing the size ceiling.
    pub fn to_stored_record(&self, record_kind: RecordKind) -> StoreResult<StoredRecord> {
        if !record_kind.is_reaction() {
            return Err(StoreError::KindMismatch {
                expected: RecordKind::PostReaction,
                found: record_kind,
            });
        }
        let data =
            bincode::serialize(self).map_err(|e| StoreError::Serialization(e.to_string()))?;
        if data.len() > REACTION_RECORD_CEILING {
            return Err(StoreError::RecordTooLarge {
                kind: record_kind,
                limit: REACTION_RECORD_CEILING,
                actual: data.len(),
            });
        }
        Ok(StoredRecord::new(record_kind, data))
    }

    /// Decode from a [`StoredRecord`], checking the expected kind.
    pub fn from_stored_record(
        record: &StoredRecord,
        expected: RecordKind,
    ) -> StoreResult<Self> {
        if record.kind != expected {
            return Err(StoreError::KindMismatch {
                expected,
                found: record.kind,
            });
        }
        bincode::deserialize(&record.data).map_err(|e| StoreError::Serialization(e.to_string()))
    }
}
