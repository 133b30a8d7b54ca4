//! Thread-safe in-memory storage for testing.

use crate::treasury::TreasuryStore;
use crate::StoreError;
use ember_types::CurrencyCode;
use std::collections::HashMap;
use std::sync::Mutex;

/// An in-memory treasury store.
pub struct MemoryStore {
    vaults: Mutex<HashMap<CurrencyCode, Vec<u8>>>,
    meta: Mutex<HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            vaults: Mutex::new(HashMap::new()),
            meta: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TreasuryStore for MemoryStore {
    fn get_vault(&self, currency: CurrencyCode) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.vaults.lock().unwrap().get(&currency).cloned())
    }

    fn put_vault(&self, currency: CurrencyCode, state: &[u8]) -> Result<(), StoreError> {
        self.vaults.lock().unwrap().insert(currency, state.to_vec());
        Ok(())
    }

    fn iter_vaults(&self) -> Result<Vec<(CurrencyCode, Vec<u8>)>, StoreError> {
        Ok(self
            .vaults
            .lock()
            .unwrap()
            .iter()
            .map(|(code, bytes)| (*code, bytes.clone()))
            .collect())
    }

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.meta.lock().unwrap().get(key).cloned())
    }

    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError> {
        self.meta.lock().unwrap().insert(key.to_vec(), value.to_vec());
        Ok(())
    }
}
