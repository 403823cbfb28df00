//! Cryptographic primitives for the Plaza social ledger.
//!
//! This crate provides:
//! - [`AddressDeriver`] — deterministic mapping from (namespace, components)
//!   to a [`Derivation`] (storage address plus verification salt)
//! - [`digest_content`] — fixed-width fingerprint of long-form text
//! - [`AuthorKeypair`] / [`VerifyingKey`] — ed25519 keys bound to [`AuthorId`]s
//!
//! [`AuthorId`]: plaza_types::AuthorId

pub mod deriver;
pub mod digest;
pub mod signer;

pub use deriver::{AddressDeriver, Derivation, DeriveError, MAX_SEED_BYTES};
pub use digest::digest_content;
pub use signer::{AuthorKeypair, Signature, SignatureError, VerifyingKey};
