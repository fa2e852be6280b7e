//! Repository layer.
//!
//! A single generic [`Repository`] provides the CRUD surface for every
//! entity kind; the per-entity modules add the operations that only make
//! sense for one kind (status transitions, the totem lock list).
//!
//! Each repository owns its id→entity map behind a mutex. Guard-checked
//! transitions (see `lock_repo`) run their whole read-decide-write cycle
//! under that mutex, so two concurrent transitions on the same entity
//! cannot both pass the guard.

pub mod bicycle_repo;
pub mod lock_repo;
pub mod totem_repo;

pub use bicycle_repo::BicycleRepo;
pub use lock_repo::LockRepo;
pub use totem_repo::TotemRepo;

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use bicicletario_core::error::CoreError;
use bicicletario_core::types::DbId;

/// An entity kind storable in a [`Repository`].
///
/// `Create` carries all business fields and no id; `Update` carries every
/// business field as an `Option` and is applied as a field-level merge.
pub trait Entity: Clone + Send + Sync + 'static {
    type Create;
    type Update;

    /// Entity name used in error messages.
    const NAME: &'static str;

    fn id(&self) -> DbId;

    /// Build the full entity from a creation payload and a freshly
    /// allocated id.
    fn from_create(id: DbId, input: Self::Create) -> Self;

    /// Merge a partial update: only fields present in `input` overwrite.
    fn apply_update(&mut self, input: Self::Update);
}

struct Inner<T> {
    /// Monotonic id counter; never reused within the repository's
    /// lifetime, including after deletes. Reset only by [`Repository::clear`].
    next_id: DbId,
    items: BTreeMap<DbId, T>,
}

/// Generic in-memory repository keyed by [`DbId`].
///
/// Ids are allocated sequentially starting at 1, so iteration in key order
/// is insertion order.
pub struct Repository<T: Entity> {
    inner: Mutex<Inner<T>>,
}

impl<T: Entity> Repository<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: 1,
                items: BTreeMap::new(),
            }),
        }
    }

    fn guard(&self) -> MutexGuard<'_, Inner<T>> {
        // Poisoning means a panic mid-mutation; the map may be torn.
        self.inner.lock().expect("repository mutex poisoned")
    }

    /// Allocate an id, construct and store the entity, and return the
    /// stored copy.
    ///
    /// `DuplicateId` means the counter handed out an id that is already
    /// present, which is a logic bug surfaced instead of silently
    /// overwriting.
    pub fn create(&self, input: T::Create) -> Result<T, CoreError> {
        let mut inner = self.guard();
        let id = inner.next_id;
        if inner.items.contains_key(&id) {
            return Err(CoreError::DuplicateId { entity: T::NAME, id });
        }
        inner.next_id += 1;
        let entity = T::from_create(id, input);
        inner.items.insert(id, entity.clone());
        Ok(entity)
    }

    /// Every stored entity, in insertion order.
    pub fn list(&self) -> Vec<T> {
        self.guard().items.values().cloned().collect()
    }

    /// Lookup by id. `None` is a normal outcome, not an error.
    pub fn find_by_id(&self, id: DbId) -> Option<T> {
        self.guard().items.get(&id).cloned()
    }

    /// Merge a partial update into the stored entity and return the
    /// result. `None` if the id is unknown.
    pub fn update(&self, id: DbId, input: T::Update) -> Option<T> {
        let mut inner = self.guard();
        let entity = inner.items.get_mut(&id)?;
        entity.apply_update(input);
        Some(entity.clone())
    }

    /// Remove an entity. `false` if the id was unknown. No cascading
    /// effects on other collections at this layer.
    pub fn delete(&self, id: DbId) -> bool {
        self.guard().items.remove(&id).is_some()
    }

    /// Administrative reset: drop all entities and restart the id counter.
    pub fn clear(&self) {
        let mut inner = self.guard();
        inner.items.clear();
        inner.next_id = 1;
    }

    pub fn len(&self) -> usize {
        self.guard().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().items.is_empty()
    }

    /// Run a guard-checked mutation on one entity under the repository
    /// mutex. `NotFound` if the id is unknown; the closure decides whether
    /// the transition is allowed and performs it atomically.
    pub(crate) fn try_mutate<R>(
        &self,
        id: DbId,
        f: impl FnOnce(&mut T) -> Result<R, CoreError>,
    ) -> Result<R, CoreError> {
        let mut inner = self.guard();
        match inner.items.get_mut(&id) {
            Some(entity) => f(entity),
            None => Err(CoreError::NotFound { entity: T::NAME, id }),
        }
    }
}

impl<T: Entity> Default for Repository<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
