//! Foundation types for the Plaza social ledger.
//!
//! This crate provides the identity and addressing types used throughout
//! Plaza. Every other Plaza crate depends on `plaza-types`.
//!
//! # Key Types
//!
//! - [`AuthorId`] — Persistent author identity derived from key material
//! - [`RecordAddress`] — Derived storage slot for a ledger record
//! - [`ContentDigest`] — Fixed-width fingerprint of variable-length text

pub mod address;
pub mod author;
pub mod digest;
pub mod error;

pub use address::RecordAddress;
pub use author::AuthorId;
pub use digest::ContentDigest;
pub use error::TypeError;
