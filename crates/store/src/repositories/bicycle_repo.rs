//! Bicycle repository.

use bicicletario_core::error::CoreError;
use bicicletario_core::status::BicycleStatus;
use bicicletario_core::types::DbId;

use crate::models::Bicycle;
use crate::repositories::Repository;

pub type BicycleRepo = Repository<Bicycle>;

impl Repository<Bicycle> {
    /// Administrative status overwrite. No pair-wise transition guards are
    /// enforced at this layer; unknown ids fail with `NotFound`.
    pub fn set_status(&self, id: DbId, status: BicycleStatus) -> Result<Bicycle, CoreError> {
        self.try_mutate(id, |bicycle| {
            bicycle.status = status;
            Ok(bicycle.clone())
        })
    }
}
