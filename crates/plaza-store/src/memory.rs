use std::collections::HashMap;
use std::sync::RwLock;

use plaza_types::RecordAddress;

use crate::error::{StoreError, StoreResult};
use crate::record::StoredRecord;
use crate::traits::AccountStore;

/// In-memory, HashMap-based account store.
///
/// Intended for tests and embedding. All records are held in memory behind
/// a `RwLock`, which also gives `create` its insert-if-absent atomicity:
/// the existence check and the insert happen under one write lock.
pub struct InMemoryAccountStore {
    records: RwLock<HashMap<RecordAddress, StoredRecord>>,
}

impl InMemoryAccountStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored record bodies.
    pub fn total_bytes(&self) -> u64 {
        self.records
            .read()
            .expect("lock poisoned")
            .values()
            .map(|record| record.size)
            .sum()
    }

    /// Remove all records from the store.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all occupied addresses.
    ///
    /// This is the hook an off-ledger indexer would scan to reconstruct
    /// parent/child relationships; records themselves hold no child lists.
    pub fn all_addresses(&self) -> Vec<RecordAddress> {
        let map = self.records.read().expect("lock poisoned");
        let mut addresses: Vec<RecordAddress> = map.keys().copied().collect();
        addresses.sort();
        addresses
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for InMemoryAccountStore {
    fn create(&self, address: &RecordAddress, record: &StoredRecord) -> StoreResult<()> {
        let mut map = self.records.write().expect("lock poisoned");
        if map.contains_key(address) {
            return Err(StoreError::AddressOccupied(*address));
        }
        map.insert(*address, record.clone());
        Ok(())
    }

    fn read(&self, address: &RecordAddress) -> StoreResult<Option<StoredRecord>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.get(address).cloned())
    }

    fn write(&self, address: &RecordAddress, record: &StoredRecord) -> StoreResult<()> {
        let mut map = self.records.write().expect("lock poisoned");
        match map.get_mut(address) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(StoreError::MissingRecord(*address)),
        }
    }

    fn update(
        &self,
        address: &RecordAddress,
        mutate: &mut dyn FnMut(StoredRecord) -> StoreResult<StoredRecord>,
    ) -> StoreResult<()> {
        // One write-lock acquisition spans the read, the closure, and the
        // replace, so updates to the same address serialize.
        let mut map = self.records.write().expect("lock poisoned");
        let existing = map
            .get(address)
            .ok_or(StoreError::MissingRecord(*address))?;
        let updated = mutate(existing.clone())?;
        map.insert(*address, updated);
        Ok(())
    }

    fn close(&self, address: &RecordAddress) -> StoreResult<bool> {
        let mut map = self.records.write().expect("lock poisoned");
        Ok(map.remove(address).is_some())
    }

    fn exists(&self, address: &RecordAddress) -> StoreResult<bool> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.contains_key(address))
    }
}

impl std::fmt::Debug for InMemoryAccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryAccountStore")
            .field("record_count", &count)
            .finish()
    }
}
