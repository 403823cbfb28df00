use plaza_crypto::{digest_content, AddressDeriver, Derivation};
use plaza_store::{
    AccountStore, CommentRecord, PostRecord, ReactionKind, ReactionRecord, RecordKind, StoreError,
    StoreResult,
};
use plaza_types::{AuthorId, RecordAddress};
use tracing::debug;

use crate::error::LedgerError;
use crate::guard;
use crate::traits::SignerVerifier;
use crate::validation::{validate_comment_content, validate_post_content, validate_topic};

/// The lifecycle controller for the Plaza social ledger.
///
/// Owns the four operation families (add, react, remove-reaction,
/// remove-entity) for posts and comments. Every record lives at an address
/// derived from its identifying fields, so uniqueness constraints are
/// enforced by the store's insert-if-absent primitive rather than lookups,
/// and authorization by re-derivation rather than access lists.
///
/// Operations are synchronous pure computation plus store calls; the store
/// is responsible for serializing concurrent writers to the same address.
pub struct SocialLedger<S, V> {
    store: S,
    verifier: V,
}

impl<S: AccountStore, V: SignerVerifier> SocialLedger<S, V> {
    /// Create a ledger over a storage substrate and a signer verifier.
    pub fn new(store: S, verifier: V) -> Self {
        Self { store, verifier }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // -----------------------------------------------------------------------
    // Posts
    // -----------------------------------------------------------------------

    /// Publish a post.
    ///
    /// Fails `AlreadyExists` if this author already has a live post with
    /// this topic, `FieldTooLong` on oversized fields.
    pub fn add_post(
        &self,
        author: &AuthorId,
        topic: &str,
        content: &str,
    ) -> Result<RecordAddress, LedgerError> {
        self.require_signer(author)?;
        validate_topic(topic)?;
        validate_post_content(content)?;

        let derivation = derive_post(author, topic)?;
        let record = PostRecord::new(*author, topic, content, derivation.salt);
        self.store.create(&derivation.address, &record.to_stored_record()?)?;

        debug!(address = %derivation.address.short_hex(), author = %author, topic, "post added");
        Ok(derivation.address)
    }

    /// Remove a post, freeing its address for reuse.
    ///
    /// Only the post's author may remove it. Fails `NotFound` if the
    /// address is empty, `Unauthorized` on owner or derivation mismatch.
    pub fn remove_post(&self, author: &AuthorId, post: &RecordAddress) -> Result<(), LedgerError> {
        self.require_signer(author)?;
        let stored = self.store.read(post)?.ok_or(LedgerError::NotFound)?;
        let record = PostRecord::from_stored_record(&stored)?;

        guard::check_owner(&record.author, author)?;
        guard::check_derivation(
            &AddressDeriver::POST,
            &[record.topic.as_bytes(), record.author.as_bytes()],
            post,
            record.salt,
        )?;

        if !self.store.close(post)? {
            return Err(LedgerError::NotFound);
        }
        debug!(address = %post.short_hex(), author = %author, "post removed");
        Ok(())
    }

    /// Like a post.
    pub fn like_post(
        &self,
        reactor: &AuthorId,
        post: &RecordAddress,
    ) -> Result<RecordAddress, LedgerError> {
        self.react_to_post(reactor, post, ReactionKind::Like)
    }

    /// Dislike a post.
    pub fn dislike_post(
        &self,
        reactor: &AuthorId,
        post: &RecordAddress,
    ) -> Result<RecordAddress, LedgerError> {
        self.react_to_post(reactor, post, ReactionKind::Dislike)
    }

    /// React to a post.
    ///
    /// Like and Dislike derive the same reaction address, so a reactor
    /// holds at most one reaction per post; the second attempt fails
    /// `AlreadyExists` whatever its kind. On success the matching counter
    /// on the post is incremented.
    pub fn react_to_post(
        &self,
        reactor: &AuthorId,
        post: &RecordAddress,
        kind: ReactionKind,
    ) -> Result<RecordAddress, LedgerError> {
        self.require_signer(reactor)?;
        let stored_post = self.store.read(post)?.ok_or(LedgerError::NotFound)?;
        PostRecord::from_stored_record(&stored_post)?;

        let derivation = derive_reaction(&AddressDeriver::POST_REACTION, reactor, post)?;
        let reaction = ReactionRecord::new(*reactor, *post, kind, derivation.salt);
        let stored_reaction = reaction.to_stored_record(RecordKind::PostReaction)?;

        // The create is the uniqueness gate; only the winner of the slot
        // increments. The increment itself is an atomic read-modify-write,
        // so concurrent reactors on the same post are all counted.
        self.store.create(&derivation.address, &stored_reaction)?;
        self.store.update(post, &mut |stored| {
            let mut parent = PostRecord::from_stored_record(&stored)?;
            match kind {
                ReactionKind::Like => parent.like_count += 1,
                ReactionKind::Dislike => parent.dislike_count += 1,
            }
            parent.to_stored_record()
        })?;

        debug!(
            reaction = %derivation.address.short_hex(),
            post = %post.short_hex(),
            kind = %kind,
            "post reaction added"
        );
        Ok(derivation.address)
    }

    /// Remove a post reaction, decrementing the matching counter.
    ///
    /// Only the reactor that placed it may remove it. The counter is read
    /// from the stored reaction kind, never supplied by the caller.
    pub fn remove_post_reaction(
        &self,
        reactor: &AuthorId,
        reaction: &RecordAddress,
    ) -> Result<(), LedgerError> {
        self.require_signer(reactor)?;
        let stored = self.store.read(reaction)?.ok_or(LedgerError::NotFound)?;
        let record = ReactionRecord::from_stored_record(&stored, RecordKind::PostReaction)?;

        guard::check_owner(&record.reactor, reactor)?;
        guard::check_derivation(
            &AddressDeriver::POST_REACTION,
            &[record.reactor.as_bytes(), record.target.as_bytes()],
            reaction,
            record.salt,
        )?;

        // Close first: only the caller that frees the slot decrements, so
        // a raced double-removal cannot decrement twice.
        if !self.store.close(reaction)? {
            return Err(LedgerError::NotFound);
        }
        self.decrement_counters(&record, RecordKind::PostReaction)?;

        debug!(
            reaction = %reaction.short_hex(),
            post = %record.target.short_hex(),
            kind = %record.kind,
            "post reaction removed"
        );
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Comments
    // -----------------------------------------------------------------------

    /// Comment on a post.
    ///
    /// The address is keyed by the content digest, so the same author may
    /// leave multiple distinct comments on one post but not the identical
    /// text twice while the first stands. Fails `NotFound` if the post is
    /// absent.
    pub fn add_comment(
        &self,
        author: &AuthorId,
        post: &RecordAddress,
        content: &str,
    ) -> Result<RecordAddress, LedgerError> {
        self.require_signer(author)?;
        validate_comment_content(content)?;

        let stored_post = self.store.read(post)?.ok_or(LedgerError::NotFound)?;
        PostRecord::from_stored_record(&stored_post)?;

        let digest = digest_content(content.as_bytes());
        let derivation = AddressDeriver::COMMENT.derive(&[
            author.as_bytes(),
            digest.as_bytes(),
            post.as_bytes(),
        ])?;
        let record = CommentRecord::new(*author, *post, content, derivation.salt);
        self.store.create(&derivation.address, &record.to_stored_record()?)?;

        debug!(
            address = %derivation.address.short_hex(),
            post = %post.short_hex(),
            author = %author,
            "comment added"
        );
        Ok(derivation.address)
    }

    /// Remove a comment, freeing its address for reuse.
    pub fn remove_comment(
        &self,
        author: &AuthorId,
        comment: &RecordAddress,
    ) -> Result<(), LedgerError> {
        self.require_signer(author)?;
        let stored = self.store.read(comment)?.ok_or(LedgerError::NotFound)?;
        let record = CommentRecord::from_stored_record(&stored)?;

        guard::check_owner(&record.author, author)?;
        let digest = digest_content(record.content.as_bytes());
        guard::check_derivation(
            &AddressDeriver::COMMENT,
            &[
                record.author.as_bytes(),
                digest.as_bytes(),
                record.parent_post.as_bytes(),
            ],
            comment,
            record.salt,
        )?;

        if !self.store.close(comment)? {
            return Err(LedgerError::NotFound);
        }
        debug!(address = %comment.short_hex(), author = %author, "comment removed");
        Ok(())
    }

    /// Like a comment.
    pub fn like_comment(
        &self,
        reactor: &AuthorId,
        comment: &RecordAddress,
    ) -> Result<RecordAddress, LedgerError> {
        self.react_to_comment(reactor, comment, ReactionKind::Like)
    }

    /// Dislike a comment.
    pub fn dislike_comment(
        &self,
        reactor: &AuthorId,
        comment: &RecordAddress,
    ) -> Result<RecordAddress, LedgerError> {
        self.react_to_comment(reactor, comment, ReactionKind::Dislike)
    }

    /// React to a comment. Same collision rule as post reactions.
    pub fn react_to_comment(
        &self,
        reactor: &AuthorId,
        comment: &RecordAddress,
        kind: ReactionKind,
    ) -> Result<RecordAddress, LedgerError> {
        self.require_signer(reactor)?;
        let stored_comment = self.store.read(comment)?.ok_or(LedgerError::NotFound)?;
        CommentRecord::from_stored_record(&stored_comment)?;

        let derivation = derive_reaction(&AddressDeriver::COMMENT_REACTION, reactor, comment)?;
        let reaction = ReactionRecord::new(*reactor, *comment, kind, derivation.salt);
        let stored_reaction = reaction.to_stored_record(RecordKind::CommentReaction)?;

        self.store.create(&derivation.address, &stored_reaction)?;
        self.store.update(comment, &mut |stored| {
            let mut parent = CommentRecord::from_stored_record(&stored)?;
            match kind {
                ReactionKind::Like => parent.like_count += 1,
                ReactionKind::Dislike => parent.dislike_count += 1,
            }
            parent.to_stored_record()
        })?;

        debug!(
            reaction = %derivation.address.short_hex(),
            comment = %comment.short_hex(),
            kind = %kind,
            "comment reaction added"
        );
        Ok(derivation.address)
    }

    /// Remove a comment reaction, decrementing the matching counter.
    pub fn remove_comment_reaction(
        &self,
        reactor: &AuthorId,
        reaction: &RecordAddress,
    ) -> Result<(), LedgerError> {
        self.require_signer(reactor)?;
        let stored = self.store.read(reaction)?.ok_or(LedgerError::NotFound)?;
        let record = ReactionRecord::from_stored_record(&stored, RecordKind::CommentReaction)?;

        guard::check_owner(&record.reactor, reactor)?;
        guard::check_derivation(
            &AddressDeriver::COMMENT_REACTION,
            &[record.reactor.as_bytes(), record.target.as_bytes()],
            reaction,
            record.salt,
        )?;

        if !self.store.close(reaction)? {
            return Err(LedgerError::NotFound);
        }
        self.decrement_counters(&record, RecordKind::CommentReaction)?;

        debug!(
            reaction = %reaction.short_hex(),
            comment = %record.target.short_hex(),
            kind = %record.kind,
            "comment reaction removed"
        );
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Read accessors
    // -----------------------------------------------------------------------

    /// Fetch the post at an address, if present.
    pub fn post(&self, address: &RecordAddress) -> Result<Option<PostRecord>, LedgerError> {
        match self.store.read(address)? {
            Some(stored) => Ok(Some(PostRecord::from_stored_record(&stored)?)),
            None => Ok(None),
        }
    }

    /// Fetch the comment at an address, if present.
    pub fn comment(&self, address: &RecordAddress) -> Result<Option<CommentRecord>, LedgerError> {
        match self.store.read(address)? {
            Some(stored) => Ok(Some(CommentRecord::from_stored_record(&stored)?)),
            None => Ok(None),
        }
    }

    /// Fetch the post reaction at an address, if present.
    pub fn post_reaction(
        &self,
        address: &RecordAddress,
    ) -> Result<Option<ReactionRecord>, LedgerError> {
        match self.store.read(address)? {
            Some(stored) => Ok(Some(ReactionRecord::from_stored_record(
                &stored,
                RecordKind::PostReaction,
            )?)),
            None => Ok(None),
        }
    }

    /// Fetch the comment reaction at an address, if present.
    pub fn comment_reaction(
        &self,
        address: &RecordAddress,
    ) -> Result<Option<ReactionRecord>, LedgerError> {
        match self.store.read(address)? {
            Some(stored) => Ok(Some(ReactionRecord::from_stored_record(
                &stored,
                RecordKind::CommentReaction,
            )?)),
            None => Ok(None),
        }
    }

    // -----------------------------------------------------------------------
    // Address helpers
    // -----------------------------------------------------------------------

    /// The address a post by `author` on `topic` would occupy.
    ///
    /// Records hold no child lists; clients reconstruct relationships by
    /// re-deriving expected addresses like this.
    pub fn post_address(
        &self,
        author: &AuthorId,
        topic: &str,
    ) -> Result<RecordAddress, LedgerError> {
        validate_topic(topic)?;
        Ok(derive_post(author, topic)?.address)
    }

    /// The address a comment by `author` with `content` on `post` would occupy.
    pub fn comment_address(
        &self,
        author: &AuthorId,
        post: &RecordAddress,
        content: &str,
    ) -> Result<RecordAddress, LedgerError> {
        let digest = digest_content(content.as_bytes());
        let derivation = AddressDeriver::COMMENT.derive(&[
            author.as_bytes(),
            digest.as_bytes(),
            post.as_bytes(),
        ])?;
        Ok(derivation.address)
    }

    /// The address `reactor`'s reaction on `post` would occupy.
    pub fn post_reaction_address(
        &self,
        reactor: &AuthorId,
        post: &RecordAddress,
    ) -> Result<RecordAddress, LedgerError> {
        Ok(derive_reaction(&AddressDeriver::POST_REACTION, reactor, post)?.address)
    }

    /// The address `reactor`'s reaction on `comment` would occupy.
    pub fn comment_reaction_address(
        &self,
        reactor: &AuthorId,
        comment: &RecordAddress,
    ) -> Result<RecordAddress, LedgerError> {
        Ok(derive_reaction(&AddressDeriver::COMMENT_REACTION, reactor, comment)?.address)
    }

    fn require_signer(&self, author: &AuthorId) -> Result<(), LedgerError> {
        if !self.verifier.verify_signer(author) {
            return Err(LedgerError::Unauthorized);
        }
        Ok(())
    }

    /// Atomically decrement the counter matching a removed reaction on its
    /// parent.
    ///
    /// The parent may already have been removed; its counters went with
    /// it, so a missing parent is not an error.
    fn decrement_counters(
        &self,
        record: &ReactionRecord,
        reaction_kind: RecordKind,
    ) -> Result<(), LedgerError> {
        let result = self.store.update(&record.target, &mut |stored| {
            if reaction_kind == RecordKind::PostReaction {
                let mut parent = PostRecord::from_stored_record(&stored)?;
                decrement(&mut parent.like_count, &mut parent.dislike_count, record.kind)?;
                parent.to_stored_record()
            } else {
                let mut parent = CommentRecord::from_stored_record(&stored)?;
                decrement(&mut parent.like_count, &mut parent.dislike_count, record.kind)?;
                parent.to_stored_record()
            }
        });
        match result {
            Ok(()) | Err(StoreError::MissingRecord(_)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn derive_post(author: &AuthorId, topic: &str) -> Result<Derivation, LedgerError> {
    Ok(AddressDeriver::POST.derive(&[topic.as_bytes(), author.as_bytes()])?)
}

fn derive_reaction(
    deriver: &AddressDeriver,
    reactor: &AuthorId,
    target: &RecordAddress,
) -> Result<Derivation, LedgerError> {
    Ok(deriver.derive(&[reactor.as_bytes(), target.as_bytes()])?)
}

fn decrement(
    like_count: &mut u64,
    dislike_count: &mut u64,
    kind: ReactionKind,
) -> StoreResult<()> {
    let counter = match kind {
        ReactionKind::Like => like_count,
        ReactionKind::Dislike => dislike_count,
    };
    *counter = counter
        .checked_sub(1)
        .ok_or_else(|| StoreError::InvalidState("reaction counter underflow".into()))?;
    Ok(())
}
