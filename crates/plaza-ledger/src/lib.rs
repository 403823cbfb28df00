//! Core lifecycle logic for the Plaza social ledger.
//!
//! This crate is the heart of Plaza. It provides:
//! - [`SocialLedger`] — the four operation families (add, react,
//!   remove-reaction, remove-entity) for posts and comments
//! - The authorization guard: address re-derivation plus owner matching,
//!   in place of any access-control list
//! - Field validation and the [`LedgerError`] taxonomy
//! - The [`SignerVerifier`] boundary to whatever checks caller signatures

pub mod error;
pub mod guard;
pub mod ledger;
pub mod traits;
pub mod validation;

pub use error::LedgerError;
pub use ledger::SocialLedger;
pub use traits::{
    OpenSignerVerifier, SignatureSignerVerifier, SignerVerifier, StaticSignerVerifier,
};
pub use validation::Field;
