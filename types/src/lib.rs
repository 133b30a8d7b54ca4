//! Fundamental types for the ember fee treasury.
//!
//! This crate defines the types shared by every other crate in the
//! workspace: account addresses and currency codes.

pub mod address;
pub mod currency;

pub use address::AccountAddress;
pub use currency::CurrencyCode;
