use std::collections::HashSet;

use plaza_crypto::{Signature, VerifyingKey};
use plaza_types::AuthorId;

/// Boundary to whatever verifies the caller's signature.
///
/// The ledger never checks signatures itself; it asks this trait whether
/// the invoking identity has proven control of its key. Every mutating
/// operation calls it before anything else.
pub trait SignerVerifier: Send + Sync {
    /// Returns `true` if the identity has a verified signature on the
    /// current operation.
    fn verify_signer(&self, author: &AuthorId) -> bool;
}

/// Verifier that accepts every identity.
///
/// For embeddings where the surrounding substrate has already verified
/// transaction signatures before the ledger is invoked.
#[derive(Debug, Default)]
pub struct OpenSignerVerifier;

impl SignerVerifier for OpenSignerVerifier {
    fn verify_signer(&self, _author: &AuthorId) -> bool {
        true
    }
}

/// Verifier backed by an explicit allow-set of identities.
///
/// The test double for signature verification: identities registered at
/// construction count as signed, everyone else is rejected.
#[derive(Debug, Default)]
pub struct StaticSignerVerifier {
    allowed: HashSet<AuthorId>,
}

impl StaticSignerVerifier {
    /// Create a verifier accepting exactly the given identities.
    pub fn new(allowed: impl IntoIterator<Item = AuthorId>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    /// Register an additional identity.
    pub fn allow(&mut self, author: AuthorId) {
        self.allowed.insert(author);
    }
}

impl SignerVerifier for StaticSignerVerifier {
    fn verify_signer(&self, author: &AuthorId) -> bool {
        self.allowed.contains(author)
    }
}

/// Verifier backed by Ed25519 signatures over an operation payload.
///
/// Built per operation: the caller fixes the payload bytes, attaches one
/// proof per invoking identity, and hands the verifier to the ledger. An
/// identity counts as signed only if an attached proof carries its public
/// key and that key verifies the signature against the payload.
#[derive(Debug)]
pub struct SignatureSignerVerifier {
    payload: Vec<u8>,
    proofs: Vec<(VerifyingKey, Signature)>,
}

impl SignatureSignerVerifier {
    /// Create a verifier for the given operation payload.
    pub fn new(payload: impl Into<Vec<u8>>) -> Self {
        Self {
            payload: payload.into(),
            proofs: Vec::new(),
        }
    }

    /// Attach a signing proof for one identity.
    pub fn attach(&mut self, key: VerifyingKey, signature: Signature) {
        self.proofs.push((key, signature));
    }
}

impl SignerVerifier for SignatureSignerVerifier {
    fn verify_signer(&self, author: &AuthorId) -> bool {
        self.proofs.iter().any(|(key, signature)| {
            key.to_author_id() == *author && key.verify(&self.payload, signature).is_ok()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_verifier_accepts_everyone() {
        let verifier = OpenSignerVerifier;
        assert!(verifier.verify_signer(&AuthorId::ephemeral()));
    }

    #[test]
    fn static_verifier_checks_membership() {
        let known = AuthorId::from_public_key(&[1u8; 32]);
        let unknown = AuthorId::from_public_key(&[2u8; 32]);
        let verifier = StaticSignerVerifier::new([known]);
        assert!(verifier.verify_signer(&known));
        assert!(!verifier.verify_signer(&unknown));
    }

    #[test]
    fn static_verifier_allow_adds_identity() {
        let author = AuthorId::ephemeral();
        let mut verifier = StaticSignerVerifier::default();
        assert!(!verifier.verify_signer(&author));
        verifier.allow(author);
        assert!(verifier.verify_signer(&author));
    }

    #[test]
    fn signature_verifier_accepts_valid_proof() {
        use plaza_crypto::AuthorKeypair;

        let key = AuthorKeypair::generate();
        let mut verifier = SignatureSignerVerifier::new(&b"add post: rust"[..]);
        verifier.attach(key.verifying_key(), key.sign(b"add post: rust"));
        assert!(verifier.verify_signer(&key.author_id()));
    }

    #[test]
    fn signature_verifier_rejects_wrong_payload() {
        use plaza_crypto::AuthorKeypair;

        let key = AuthorKeypair::generate();
        let mut verifier = SignatureSignerVerifier::new(&b"add post: rust"[..]);
        // Signature over a different payload does not prove this operation.
        verifier.attach(key.verifying_key(), key.sign(b"remove post: rust"));
        assert!(!verifier.verify_signer(&key.author_id()));
    }

    #[test]
    fn signature_verifier_rejects_borrowed_proof() {
        use plaza_crypto::AuthorKeypair;

        let alice = AuthorKeypair::generate();
        let mallory = AuthorKeypair::generate();
        let mut verifier = SignatureSignerVerifier::new(&b"payload"[..]);
        verifier.attach(alice.verifying_key(), alice.sign(b"payload"));
        // Alice's proof does not cover mallory's identity.
        assert!(!verifier.verify_signer(&mallory.author_id()));
    }
}
