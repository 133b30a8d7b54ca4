//! Abstract storage for the ember fee treasury.
//!
//! Backends implement the `TreasuryStore` trait; the rest of the
//! workspace depends only on the trait. An in-memory implementation is
//! provided for tests and hosts that persist elsewhere.

pub mod error;
pub mod memory;
pub mod treasury;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use treasury::TreasuryStore;
