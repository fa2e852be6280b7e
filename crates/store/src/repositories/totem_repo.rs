//! Totem repository: CRUD plus the registered-lock list.

use bicicletario_core::error::CoreError;
use bicicletario_core::types::DbId;

use crate::models::Totem;
use crate::repositories::Repository;

pub type TotemRepo = Repository<Totem>;

impl Repository<Totem> {
    /// Register a lock with a totem. Appending twice is a no-op.
    pub fn attach_lock(&self, totem_id: DbId, lock_id: DbId) -> Result<Totem, CoreError> {
        self.try_mutate(totem_id, |totem| {
            if !totem.trancas.contains(&lock_id) {
                totem.trancas.push(lock_id);
            }
            Ok(totem.clone())
        })
    }

    /// Remove a lock from a totem's list.
    pub fn detach_lock(&self, totem_id: DbId, lock_id: DbId) -> Result<Totem, CoreError> {
        self.try_mutate(totem_id, |totem| {
            totem.trancas.retain(|id| *id != lock_id);
            Ok(totem.clone())
        })
    }

    /// Find which totem, if any, a lock is registered to.
    pub fn totem_of_lock(&self, lock_id: DbId) -> Option<Totem> {
        self.list()
            .into_iter()
            .find(|totem| totem.trancas.contains(&lock_id))
    }
}
