//! Entity models and DTOs.
//!
//! Each entity has three shapes: the full stored entity, a `Create*` DTO
//! (all business fields, no id) and an `Update*` DTO (every field optional,
//! applied as a field-level merge). Wire field names follow the public API
//! contract, which uses Portuguese names (`marca`, `localizacao`, ...).

pub mod bicycle;
pub mod lock;
pub mod network;
pub mod totem;

pub use bicycle::{Bicycle, CreateBicycle, UpdateBicycle};
pub use lock::{CreateLock, Lock, UpdateLock};
pub use network::{BicycleIntegration, BicycleWithdrawal, LockIntegration, LockWithdrawal};
pub use totem::{CreateTotem, Totem, UpdateTotem};
