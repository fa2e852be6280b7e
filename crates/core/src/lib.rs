//! Bicicletário core domain types.
//!
//! Identifier and status enumerations plus the domain error type shared by
//! the store and API layers.

pub mod error;
pub mod status;
pub mod types;
