//! Lock repository: CRUD plus the free/occupied state machine.
//!
//! `engage` and `release` run read-decide-write atomically under the
//! repository mutex, so two concurrent `engage` calls on the same free
//! lock cannot both succeed.

use bicicletario_core::error::CoreError;
use bicicletario_core::status::LockStatus;
use bicicletario_core::types::DbId;

use crate::models::Lock;
use crate::repositories::Repository;

pub type LockRepo = Repository<Lock>;

impl Repository<Lock> {
    /// Close the lock: status becomes `OCUPADA`.
    ///
    /// Fails with `InvalidTransition` if the lock is already occupied.
    /// When a bicycle id is supplied it is recorded as the docked bicycle;
    /// the caller is responsible for checking that the bicycle exists.
    pub fn engage(&self, id: DbId, bicycle: Option<DbId>) -> Result<Lock, CoreError> {
        self.try_mutate(id, |lock| {
            if lock.status == LockStatus::Occupied {
                return Err(CoreError::InvalidTransition(format!(
                    "lock {id} is already occupied"
                )));
            }
            lock.status = LockStatus::Occupied;
            if bicycle.is_some() {
                lock.bicicleta = bicycle;
            }
            Ok(lock.clone())
        })
    }

    /// Open the lock: status becomes `LIVRE`.
    ///
    /// Fails with `InvalidTransition` if the lock is already free. The
    /// bicycle reference is cleared only when the supplied id matches the
    /// stored one; a mismatched or absent id leaves the stale reference in
    /// place (`GET /locks/{id}/bicycle` treats a dangling reference as
    /// not found).
    pub fn release(&self, id: DbId, bicycle: Option<DbId>) -> Result<Lock, CoreError> {
        self.try_mutate(id, |lock| {
            if lock.status == LockStatus::Free {
                return Err(CoreError::InvalidTransition(format!(
                    "lock {id} is already free"
                )));
            }
            lock.status = LockStatus::Free;
            if bicycle.is_some() && lock.bicicleta == bicycle {
                lock.bicicleta = None;
            }
            Ok(lock.clone())
        })
    }

    /// Administrative status overwrite. The coarse counterpart of
    /// [`engage`](Self::engage)/[`release`](Self::release): writes the same
    /// status field but performs no bicycle-reference bookkeeping and no
    /// occupancy guard.
    pub fn set_status(&self, id: DbId, status: LockStatus) -> Result<Lock, CoreError> {
        self.try_mutate(id, |lock| {
            lock.status = status;
            Ok(lock.clone())
        })
    }
}
