use plaza_types::RecordAddress;

use crate::error::StoreResult;
use crate::record::StoredRecord;

/// Keyed record store — the boundary to the storage substrate.
///
/// All implementations must satisfy these invariants:
/// - `create` is atomic insert-if-absent: between the existence check and
///   the insert no other writer can claim the address. This is the single
///   primitive every uniqueness constraint in the ledger rests on.
/// - The substrate serializes concurrent writers to the same address;
///   operations on different addresses are unordered relative to each other.
/// - The store never interprets record bodies — it is a pure keyed map.
/// - All I/O errors are propagated, never silently ignored.
pub trait AccountStore: Send + Sync {
    /// Create a record at a derived address.
    ///
    /// Fails with `AddressOccupied` if a record is already present. This
    /// failure leaves the existing record completely unmodified.
    fn create(&self, address: &RecordAddress, record: &StoredRecord) -> StoreResult<()>;

    /// Read the record at an address.
    ///
    /// Returns `Ok(None)` if the address holds no record.
    /// Returns `Err` on I/O failure or data corruption.
    fn read(&self, address: &RecordAddress) -> StoreResult<Option<StoredRecord>>;

    /// Replace the record at an occupied address.
    ///
    /// Fails with `MissingRecord` if the address is empty — updates never
    /// create.
    fn write(&self, address: &RecordAddress, record: &StoredRecord) -> StoreResult<()>;

    /// Atomically read, transform, and replace the record at an address.
    ///
    /// The closure runs under the store's per-address exclusion: no other
    /// mutator of the same address can interleave between the read and the
    /// replace. Counter mutation on posts and comments goes through here —
    /// a plain read-then-write pair would let concurrent reactors overwrite
    /// each other's increment. Fails with `MissingRecord` if the address is
    /// empty; a closure error leaves the record unchanged.
    fn update(
        &self,
        address: &RecordAddress,
        mutate: &mut dyn FnMut(StoredRecord) -> StoreResult<StoredRecord>,
    ) -> StoreResult<()>;

    /// Free the slot at an address. Returns `true` if a record existed.
    ///
    /// After closing, the same derived address is available for reuse.
    fn close(&self, address: &RecordAddress) -> StoreResult<bool>;

    /// Check whether an address holds a record.
    fn exists(&self, address: &RecordAddress) -> StoreResult<bool> {
        Ok(self.read(address)?.is_some())
    }
}
