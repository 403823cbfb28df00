//! Field-size validation, performed before any derivation or mutation.
//!
//! The reference for the limits:
//! - topics are used raw as a derivation component, so they are capped at
//!   the substrate's 32-byte component limit;
//! - post and comment content is capped at 500 bytes so records stay
//!   fixed-size and small.
//!
//! Topic overflow is reported here as [`LedgerError::FieldTooLong`] rather
//! than leaking out of the deriver as a low-level addressing error.

use plaza_store::{MAX_CONTENT_BYTES, MAX_TOPIC_BYTES};

use crate::error::LedgerError;

/// The text field a size limit applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Topic,
    PostContent,
    CommentContent,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Topic => write!(f, "topic"),
            Self::PostContent => write!(f, "post content"),
            Self::CommentContent => write!(f, "comment content"),
        }
    }
}

/// Validate a post topic (0–32 bytes).
pub fn validate_topic(topic: &str) -> Result<(), LedgerError> {
    check_limit(Field::Topic, topic, MAX_TOPIC_BYTES)
}

/// Validate post content (0–500 bytes).
pub fn validate_post_content(content: &str) -> Result<(), LedgerError> {
    check_limit(Field::PostContent, content, MAX_CONTENT_BYTES)
}

/// Validate comment content (0–500 bytes).
pub fn validate_comment_content(content: &str) -> Result<(), LedgerError> {
    check_limit(Field::CommentContent, content, MAX_CONTENT_BYTES)
}

fn check_limit(field: Field, value: &str, limit: usize) -> Result<(), LedgerError> {
    let actual = value.len();
    if actual > limit {
        return Err(LedgerError::FieldTooLong {
            field,
            limit,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_valid() {
        assert!(validate_topic("").is_ok());
        assert!(validate_post_content("").is_ok());
        assert!(validate_comment_content("").is_ok());
    }

    #[test]
    fn fields_at_limit_are_valid() {
        assert!(validate_topic(&"t".repeat(MAX_TOPIC_BYTES)).is_ok());
        assert!(validate_post_content(&"c".repeat(MAX_CONTENT_BYTES)).is_ok());
        assert!(validate_comment_content(&"c".repeat(MAX_CONTENT_BYTES)).is_ok());
    }

    #[test]
    fn oversized_topic_is_rejected() {
        let err = validate_topic(&"t".repeat(MAX_TOPIC_BYTES + 1)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::FieldTooLong {
                field: Field::Topic,
                limit: MAX_TOPIC_BYTES,
                actual: MAX_TOPIC_BYTES + 1,
            }
        );
    }

    #[test]
    fn oversized_content_is_rejected() {
        let err = validate_post_content(&"c".repeat(MAX_CONTENT_BYTES + 1)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::FieldTooLong {
                field: Field::PostContent,
                ..
            }
        ));

        let err = validate_comment_content(&"c".repeat(MAX_CONTENT_BYTES + 1)).unwrap_err();
        assert!(matches!(
            err,
            LedgerError::FieldTooLong {
                field: Field::CommentContent,
                ..
            }
        ));
    }

    #[test]
    fn limits_count_bytes_not_chars() {
        // 17 four-byte scorpions exceed a 32-byte topic despite being
        // well under 32 characters.
        let topic: String = "\u{1f982}".repeat(17);
        assert!(validate_topic(&topic).is_err());
    }
}
