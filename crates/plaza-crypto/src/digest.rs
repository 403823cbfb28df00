use plaza_types::ContentDigest;

/// Collapse a variable-length text body into a fixed-width fingerprint.
///
/// Domain-separated BLAKE3. Used exclusively to produce a bounded
/// derivation component for comment addresses; it is pure, deterministic,
/// and carries no secret key.
pub fn digest_content(text: &[u8]) -> ContentDigest {
    let mut hasher = blake3::Hasher::new();
    hasher.update(b"plaza-content-v1:");
    hasher.update(text);
    ContentDigest::from_raw(*hasher.finalize().as_bytes())
}
