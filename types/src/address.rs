//! Account address type with `emb_` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An ember account address, always prefixed with `emb_`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// The standard prefix for all ember account addresses.
    pub const PREFIX: &'static str = "emb_";

    /// Create a new account address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `emb_`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with emb_");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        self.0.starts_with(Self::PREFIX) && self.0.len() > Self::PREFIX.len()
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AccountAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_prefixed_address() {
        let addr = AccountAddress::new("emb_1treasury");
        assert!(addr.is_valid());
        assert_eq!(addr.as_str(), "emb_1treasury");
    }

    #[test]
    #[should_panic(expected = "address must start with emb_")]
    fn rejects_unprefixed_address() {
        AccountAddress::new("acct_1treasury");
    }

    #[test]
    fn bare_prefix_is_not_valid() {
        let addr = AccountAddress::new("emb_");
        assert!(!addr.is_valid());
    }
}
