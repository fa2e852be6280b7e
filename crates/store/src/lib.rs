//! In-memory equipment store.
//!
//! Owns the entity models, the generic id-keyed repository, and the
//! [`Store`] aggregate that carries the cross-entity transition logic
//! (lock/unlock, network integration, delete policy).

pub mod models;
pub mod repositories;
mod store;

pub use store::Store;
