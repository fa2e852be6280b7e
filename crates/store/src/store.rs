//! The [`Store`] aggregate: one repository per equipment kind plus the
//! operations that span collections (lock/unlock with bicycle validation,
//! network integrate/withdraw, the delete policy).
//!
//! Constructed once per process (or per test) and shared via `Arc`; there
//! is no ambient global state to reset between runs.

use bicicletario_core::error::CoreError;
use bicicletario_core::status::{BicycleStatus, LockStatus};
use bicicletario_core::types::DbId;

use crate::models::{
    Bicycle, BicycleIntegration, BicycleWithdrawal, Lock, LockIntegration, LockWithdrawal, Totem,
};
use crate::repositories::{BicycleRepo, LockRepo, TotemRepo};

#[derive(Default)]
pub struct Store {
    pub bicycles: BicycleRepo,
    pub locks: LockRepo,
    pub totems: TotemRepo,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Administrative reset: clear all three collections.
    pub fn reset(&self) {
        self.bicycles.clear();
        self.locks.clear();
        self.totems.clear();
        tracing::info!("store reset to empty state");
    }

    fn ensure_bicycle(&self, id: DbId) -> Result<Bicycle, CoreError> {
        self.bicycles
            .find_by_id(id)
            .ok_or(CoreError::NotFound { entity: "Bicycle", id })
    }

    fn ensure_lock(&self, id: DbId) -> Result<Lock, CoreError> {
        self.locks
            .find_by_id(id)
            .ok_or(CoreError::NotFound { entity: "Lock", id })
    }

    fn ensure_totem(&self, id: DbId) -> Result<Totem, CoreError> {
        self.totems
            .find_by_id(id)
            .ok_or(CoreError::NotFound { entity: "Totem", id })
    }

    // -----------------------------------------------------------------------
    // Lock/unlock with bicycle validation
    // -----------------------------------------------------------------------

    /// Close a lock, optionally recording the docked bicycle.
    ///
    /// A supplied bicycle id must resolve to an existing bicycle. The
    /// occupancy guard itself runs atomically inside the lock repository.
    pub fn engage_lock(&self, lock_id: DbId, bicycle: Option<DbId>) -> Result<Lock, CoreError> {
        if let Some(bicycle_id) = bicycle {
            self.ensure_bicycle(bicycle_id)?;
        }
        self.locks.engage(lock_id, bicycle)
    }

    /// Open a lock. The supplied bicycle id is only compared against the
    /// stored reference, so no existence check is needed here.
    pub fn release_lock(&self, lock_id: DbId, bicycle: Option<DbId>) -> Result<Lock, CoreError> {
        self.locks.release(lock_id, bicycle)
    }

    /// Resolve the bicycle currently docked in a lock.
    ///
    /// Not found when the lock is unknown, when no bicycle is referenced,
    /// or when the reference dangles (the bicycle was deleted while a
    /// stale reference survived an unlock mismatch).
    pub fn docked_bicycle(&self, lock_id: DbId) -> Result<Bicycle, CoreError> {
        let lock = self.ensure_lock(lock_id)?;
        let bicycle_id = lock.bicicleta.ok_or(CoreError::NotFound {
            entity: "docked bicycle",
            id: lock_id,
        })?;
        self.ensure_bicycle(bicycle_id)
    }

    // -----------------------------------------------------------------------
    // Network integrate / withdraw
    // -----------------------------------------------------------------------

    /// Put a bicycle on the network: dock it in a free lock and mark it
    /// available.
    pub fn integrate_bicycle(&self, req: &BicycleIntegration) -> Result<Lock, CoreError> {
        self.ensure_bicycle(req.id_bicicleta)?;
        let lock = self.locks.engage(req.id_tranca, Some(req.id_bicicleta))?;
        self.bicycles
            .set_status(req.id_bicicleta, BicycleStatus::Available)?;

        tracing::info!(
            bicicleta = req.id_bicicleta,
            tranca = req.id_tranca,
            funcionario = req.id_funcionario,
            "bicycle integrated into the network"
        );
        Ok(lock)
    }

    /// Take a bicycle off the network for retirement or repair.
    ///
    /// The lock must currently hold exactly that bicycle.
    pub fn withdraw_bicycle(&self, req: &BicycleWithdrawal) -> Result<Bicycle, CoreError> {
        let lock = self.ensure_lock(req.id_tranca)?;
        self.ensure_bicycle(req.id_bicicleta)?;

        if lock.bicicleta != Some(req.id_bicicleta) {
            return Err(CoreError::InvalidTransition(format!(
                "lock {} does not hold bicycle {}",
                req.id_tranca, req.id_bicicleta
            )));
        }

        self.locks.release(req.id_tranca, Some(req.id_bicicleta))?;
        let bicycle = self
            .bicycles
            .set_status(req.id_bicicleta, req.status_acao.as_bicycle_status())?;

        tracing::info!(
            bicicleta = req.id_bicicleta,
            tranca = req.id_tranca,
            funcionario = req.id_funcionario,
            status = bicycle.status.as_str(),
            "bicycle withdrawn from the network"
        );
        Ok(bicycle)
    }

    /// Register a lock with a totem and mark it free for use.
    pub fn integrate_lock(&self, req: &LockIntegration) -> Result<Totem, CoreError> {
        self.ensure_totem(req.id_totem)?;
        self.ensure_lock(req.id_tranca)?;

        if let Some(owner) = self.totems.totem_of_lock(req.id_tranca) {
            return Err(CoreError::Conflict(format!(
                "lock {} is already registered to totem {}",
                req.id_tranca, owner.id
            )));
        }

        let totem = self.totems.attach_lock(req.id_totem, req.id_tranca)?;
        self.locks.set_status(req.id_tranca, LockStatus::Free)?;

        tracing::info!(
            tranca = req.id_tranca,
            totem = req.id_totem,
            funcionario = req.id_funcionario,
            "lock integrated into the network"
        );
        Ok(totem)
    }

    /// Remove a lock from its totem for retirement or repair.
    ///
    /// The lock must be registered to that totem and must not be holding a
    /// bicycle.
    pub fn withdraw_lock(&self, req: &LockWithdrawal) -> Result<Lock, CoreError> {
        let totem = self.ensure_totem(req.id_totem)?;
        let lock = self.ensure_lock(req.id_tranca)?;

        if lock.status == LockStatus::Occupied {
            return Err(CoreError::InvalidTransition(format!(
                "lock {} is occupied and cannot be withdrawn",
                req.id_tranca
            )));
        }
        if !totem.trancas.contains(&req.id_tranca) {
            return Err(CoreError::InvalidTransition(format!(
                "lock {} is not registered to totem {}",
                req.id_tranca, req.id_totem
            )));
        }

        self.totems.detach_lock(req.id_totem, req.id_tranca)?;
        let lock = self
            .locks
            .set_status(req.id_tranca, req.status_acao.as_lock_status())?;

        tracing::info!(
            tranca = req.id_tranca,
            totem = req.id_totem,
            funcionario = req.id_funcionario,
            status = lock.status.as_str(),
            "lock withdrawn from the network"
        );
        Ok(lock)
    }

    // -----------------------------------------------------------------------
    // Delete policy
    // -----------------------------------------------------------------------

    /// Delete a bicycle. Rejected while an occupied lock references it;
    /// stale references on free locks do not block deletion.
    pub fn delete_bicycle(&self, id: DbId) -> Result<(), CoreError> {
        self.ensure_bicycle(id)?;

        if let Some(lock) = self
            .locks
            .list()
            .into_iter()
            .find(|l| l.status == LockStatus::Occupied && l.bicicleta == Some(id))
        {
            return Err(CoreError::Conflict(format!(
                "bicycle {id} is docked in lock {}",
                lock.id
            )));
        }

        self.bicycles.delete(id);
        Ok(())
    }

    /// Delete a lock. Rejected while occupied; a free lock is detached
    /// from its totem before removal.
    pub fn delete_lock(&self, id: DbId) -> Result<(), CoreError> {
        let lock = self.ensure_lock(id)?;

        if lock.status == LockStatus::Occupied {
            return Err(CoreError::Conflict(format!(
                "lock {id} is occupied and cannot be deleted"
            )));
        }

        if let Some(totem) = self.totems.totem_of_lock(id) {
            self.totems.detach_lock(totem.id, id)?;
        }
        self.locks.delete(id);
        Ok(())
    }

    /// Delete a totem. Its locks survive; only the grouping is forgotten.
    pub fn delete_totem(&self, id: DbId) -> Result<(), CoreError> {
        self.ensure_totem(id)?;
        self.totems.delete(id);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Totem queries
    // -----------------------------------------------------------------------

    /// The locks registered to a totem, in registration order. Dangling
    /// ids (deleted locks) are skipped.
    pub fn locks_of_totem(&self, totem_id: DbId) -> Result<Vec<Lock>, CoreError> {
        let totem = self.ensure_totem(totem_id)?;
        Ok(totem
            .trancas
            .iter()
            .filter_map(|id| self.locks.find_by_id(*id))
            .collect())
    }

    /// The bicycles currently docked in a totem's occupied locks.
    pub fn bicycles_of_totem(&self, totem_id: DbId) -> Result<Vec<Bicycle>, CoreError> {
        let locks = self.locks_of_totem(totem_id)?;
        Ok(locks
            .iter()
            .filter(|lock| lock.status == LockStatus::Occupied)
            .filter_map(|lock| lock.bicicleta)
            .filter_map(|id| self.bicycles.find_by_id(id))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
