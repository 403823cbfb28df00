use plaza_types::AuthorId;

/// An author's ed25519 keypair.
///
/// Held client-side; the ledger never persists private key material. The
/// author identity is derived from the public half, so whoever holds the
/// keypair controls every record published under that identity.
pub struct AuthorKeypair {
    signing: ed25519_dalek::SigningKey,
}

/// The public half of an [`AuthorKeypair`].
#[derive(Clone, PartialEq, Eq)]
pub struct VerifyingKey(ed25519_dalek::VerifyingKey);

/// Ed25519 signature over an operation payload.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(ed25519_dalek::Signature);

impl AuthorKeypair {
    /// Generate a fresh random keypair.
    pub fn generate() -> Self {
        let mut csprng = rand::thread_rng();
        Self {
            signing: ed25519_dalek::SigningKey::generate(&mut csprng),
        }
    }

    /// Rebuild a keypair from its 32-byte secret seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing: ed25519_dalek::SigningKey::from_bytes(&seed),
        }
    }

    /// The public half.
    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey(self.signing.verifying_key())
    }

    /// The author identity this keypair controls.
    pub fn author_id(&self) -> AuthorId {
        self.verifying_key().to_author_id()
    }

    /// Sign an operation payload.
    pub fn sign(&self, payload: &[u8]) -> Signature {
        use ed25519_dalek::Signer;
        Signature(self.signing.sign(payload))
    }
}

impl VerifyingKey {
    /// Verify a signature over a payload.
    pub fn verify(&self, payload: &[u8], signature: &Signature) -> Result<(), SignatureError> {
        use ed25519_dalek::Verifier;
        self.0
            .verify(payload, &signature.0)
            .map_err(|_| SignatureError::InvalidSignature)
    }

    /// The author identity bound to this public key.
    pub fn to_author_id(&self) -> AuthorId {
        AuthorId::from_public_key(&self.0.to_bytes())
    }

    /// Raw public key bytes.
    pub fn as_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    /// Parse a raw 32-byte public key.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, SignatureError> {
        let key = ed25519_dalek::VerifyingKey::from_bytes(&bytes)
            .map_err(|_| SignatureError::InvalidKey)?;
        Ok(Self(key))
    }
}

impl Signature {
    /// Raw 64-byte signature.
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0.to_bytes()
    }

    /// Parse a raw 64-byte signature.
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(ed25519_dalek::Signature::from_bytes(&bytes))
    }
}

// Debug for the keypair shows the identity, never the secret.
impl std::fmt::Debug for AuthorKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AuthorKeypair({})", self.author_id())
    }
}

impl std::fmt::Debug for VerifyingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VerifyingKey({})", hex::encode(self.0.to_bytes()))
    }
}

impl std::fmt::Debug for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Signature({}...)", hex::encode(&self.0.to_bytes()[..8]))
    }
}

/// Errors from signature operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("invalid key")]
    InvalidKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signed_payload_verifies() {
        let keypair = AuthorKeypair::generate();
        let sig = keypair.sign(b"add post: rust");
        assert!(keypair.verifying_key().verify(b"add post: rust", &sig).is_ok());
    }

    #[test]
    fn tampered_payload_is_rejected() {
        let keypair = AuthorKeypair::generate();
        let sig = keypair.sign(b"original");
        let err = keypair.verifying_key().verify(b"tampered", &sig).unwrap_err();
        assert_eq!(err, SignatureError::InvalidSignature);
    }

    #[test]
    fn foreign_key_is_rejected() {
        let keypair = AuthorKeypair::generate();
        let other = AuthorKeypair::generate();
        let sig = keypair.sign(b"payload");
        assert!(other.verifying_key().verify(b"payload", &sig).is_err());
    }

    #[test]
    fn author_id_is_stable_per_seed() {
        let a = AuthorKeypair::from_seed([11u8; 32]);
        let b = AuthorKeypair::from_seed([11u8; 32]);
        assert_eq!(a.author_id(), b.author_id());
        assert_ne!(a.author_id(), AuthorKeypair::from_seed([12u8; 32]).author_id());
    }

    #[test]
    fn verifying_key_bytes_roundtrip() {
        let key = AuthorKeypair::generate().verifying_key();
        let parsed = VerifyingKey::from_bytes(key.as_bytes()).unwrap();
        assert_eq!(key, parsed);
    }

    #[test]
    fn signature_bytes_roundtrip() {
        let keypair = AuthorKeypair::generate();
        let sig = keypair.sign(b"payload");
        assert_eq!(sig, Signature::from_bytes(sig.to_bytes()));
    }

    #[test]
    fn keypair_debug_shows_identity_not_secret() {
        let keypair = AuthorKeypair::from_seed([7u8; 32]);
        let debug = format!("{keypair:?}");
        assert!(debug.contains(&keypair.author_id().to_string()));
        assert!(!debug.contains(&hex::encode([7u8; 32])));
    }
}
