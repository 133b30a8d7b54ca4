//! Treasury storage trait.

use crate::StoreError;
use ember_types::CurrencyCode;

/// Store trait for persisting treasury state to durable storage.
///
/// Vault state is an opaque `Vec<u8>` so the store doesn't depend on the
/// `ember-treasury` crate (which would create a circular dependency). The
/// treasury serializes/deserializes its own types.
pub trait TreasuryStore {
    fn get_vault(&self, currency: CurrencyCode) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_vault(&self, currency: CurrencyCode, state: &[u8]) -> Result<(), StoreError>;
    fn iter_vaults(&self) -> Result<Vec<(CurrencyCode, Vec<u8>)>, StoreError>;

    fn get_meta(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StoreError>;
    fn put_meta(&self, key: &[u8], value: &[u8]) -> Result<(), StoreError>;
}
