use plaza_types::RecordAddress;

/// Maximum length of a single derivation component, in bytes.
///
/// This mirrors the addressing limit of the storage substrate. It is the
/// reason post topics are capped at 32 bytes (they are used raw as a
/// component) and why comment content is collapsed to a digest first.
pub const MAX_SEED_BYTES: usize = 32;

/// The result of an address derivation.
///
/// The salt is an auxiliary byte drawn from the same derivation stream as
/// the address. It is persisted inside the record and re-checked before
/// mutation, confirming the record really was created by the expected
/// derivation rather than planted at an arbitrary slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Derivation {
    /// The derived storage slot.
    pub address: RecordAddress,
    /// Disambiguation salt, stored alongside the record.
    pub salt: u8,
}

/// Namespace-tagged address deriver.
///
/// Each deriver carries a namespace tag (e.g. `"post"`, `"comment"`) that
/// is folded into every derivation, so records of different kinds can never
/// collide even when their components are byte-identical. Components are
/// length-prefixed before hashing, so `("ab", "c")` and `("a", "bc")`
/// derive distinct addresses.
pub struct AddressDeriver {
    namespace: &'static str,
}

impl AddressDeriver {
    /// Deriver for post records: components (topic, author).
    pub const POST: Self = Self { namespace: "post" };
    /// Deriver for post reactions: components (reactor, post).
    ///
    /// The reaction kind is deliberately not a component: Like and Dislike
    /// from the same reactor collide on the same slot, which is the sole
    /// mechanism preventing simultaneous opposite reactions.
    pub const POST_REACTION: Self = Self {
        namespace: "post-reaction",
    };
    /// Deriver for comment records: components (author, content digest, post).
    pub const COMMENT: Self = Self {
        namespace: "comment",
    };
    /// Deriver for comment reactions: components (reactor, comment).
    pub const COMMENT_REACTION: Self = Self {
        namespace: "comment-reaction",
    };

    /// Create a deriver with a custom namespace tag.
    pub const fn new(namespace: &'static str) -> Self {
        Self { namespace }
    }

    /// Derive the storage slot and salt for the given components.
    ///
    /// Deterministic: identical inputs always yield the identical
    /// derivation. Fails with [`DeriveError::SeedTooLong`] if any component
    /// exceeds [`MAX_SEED_BYTES`].
    pub fn derive(&self, components: &[&[u8]]) -> Result<Derivation, DeriveError> {
        for (index, component) in components.iter().enumerate() {
            if component.len() > MAX_SEED_BYTES {
                return Err(DeriveError::SeedTooLong {
                    index,
                    len: component.len(),
                });
            }
        }

        let mut hasher = blake3::Hasher::new();
        hasher.update(b"plaza-addr-v1:");
        hasher.update(self.namespace.as_bytes());
        for component in components {
            // One-byte length prefix; components are capped at 32 bytes.
            hasher.update(&[component.len() as u8]);
            hasher.update(component);
        }

        // One XOF stream yields both the address and the salt byte.
        let mut out = [0u8; 33];
        hasher.finalize_xof().fill(&mut out);
        let mut address = [0u8; 32];
        address.copy_from_slice(&out[..32]);
        Ok(Derivation {
            address: RecordAddress::from_raw(address),
            salt: out[32],
        })
    }

    /// Check that an (address, salt) pair was produced by deriving the
    /// given components in this namespace.
    pub fn verify(&self, components: &[&[u8]], address: &RecordAddress, salt: u8) -> bool {
        match self.derive(components) {
            Ok(derivation) => derivation.address == *address && derivation.salt == salt,
            Err(_) => false,
        }
    }

    /// The namespace tag used by this deriver.
    pub fn namespace(&self) -> &str {
        self.namespace
    }
}

/// Errors from address derivation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeriveError {
    /// A derivation component exceeded the substrate addressing limit.
    #[error("derivation component {index} is {len} bytes; limit is {MAX_SEED_BYTES}")]
    SeedTooLong { index: usize, len: usize },
}
