//! Closed status enumerations for bike-share equipment.
//!
//! Wire values are the Portuguese status strings of the public API
//! contract (`DISPONIVEL`, `OCUPADA`, ...); the Rust variants use English
//! names. Parsing from a path segment goes through `from_str`, which turns
//! an out-of-enumeration value into a [`CoreError::Validation`] instead of
//! an unchecked cast.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Bicycle status
// ---------------------------------------------------------------------------

/// Operational status of a bicycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BicycleStatus {
    #[serde(rename = "NOVA")]
    New,
    #[serde(rename = "DISPONIVEL")]
    Available,
    #[serde(rename = "EM_USO")]
    InUse,
    #[serde(rename = "APOSENTADA")]
    Retired,
    #[serde(rename = "REPARO_SOLICITADO")]
    RepairRequested,
    #[serde(rename = "EM_REPARO")]
    InRepair,
}

const BICYCLE_STATUS_STRINGS: &[&str] = &[
    "NOVA",
    "DISPONIVEL",
    "EM_USO",
    "APOSENTADA",
    "REPARO_SOLICITADO",
    "EM_REPARO",
];

impl BicycleStatus {
    /// Return the wire-format status string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NOVA",
            Self::Available => "DISPONIVEL",
            Self::InUse => "EM_USO",
            Self::Retired => "APOSENTADA",
            Self::RepairRequested => "REPARO_SOLICITADO",
            Self::InRepair => "EM_REPARO",
        }
    }

    /// Parse a status from a wire-format string (e.g. a path segment).
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "NOVA" => Ok(Self::New),
            "DISPONIVEL" => Ok(Self::Available),
            "EM_USO" => Ok(Self::InUse),
            "APOSENTADA" => Ok(Self::Retired),
            "REPARO_SOLICITADO" => Ok(Self::RepairRequested),
            "EM_REPARO" => Ok(Self::InRepair),
            _ => Err(CoreError::Validation(format!(
                "Invalid bicycle status '{s}'. Must be one of: {}",
                BICYCLE_STATUS_STRINGS.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Lock status
// ---------------------------------------------------------------------------

/// Occupancy / lifecycle status of a lock (tranca).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockStatus {
    #[serde(rename = "NOVA")]
    New,
    #[serde(rename = "LIVRE")]
    Free,
    #[serde(rename = "OCUPADA")]
    Occupied,
    #[serde(rename = "APOSENTADA")]
    Retired,
    #[serde(rename = "EM_REPARO")]
    InRepair,
}

const LOCK_STATUS_STRINGS: &[&str] =
    &["NOVA", "LIVRE", "OCUPADA", "APOSENTADA", "EM_REPARO"];

impl LockStatus {
    /// Return the wire-format status string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NOVA",
            Self::Free => "LIVRE",
            Self::Occupied => "OCUPADA",
            Self::Retired => "APOSENTADA",
            Self::InRepair => "EM_REPARO",
        }
    }

    /// Parse a status from a wire-format string.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "NOVA" => Ok(Self::New),
            "LIVRE" => Ok(Self::Free),
            "OCUPADA" => Ok(Self::Occupied),
            "APOSENTADA" => Ok(Self::Retired),
            "EM_REPARO" => Ok(Self::InRepair),
            _ => Err(CoreError::Validation(format!(
                "Invalid lock status '{s}'. Must be one of: {}",
                LOCK_STATUS_STRINGS.join(", ")
            ))),
        }
    }
}

/// Target of the coarse `POST /locks/{id}/status/{value}` endpoint.
///
/// Accepts every plain [`LockStatus`] value plus the `TRANCAR` and
/// `DESTRANCAR` directives, which map to `OCUPADA` and `LIVRE` without the
/// bicycle-reference bookkeeping of the lock/unlock operations.
pub fn parse_lock_status_target(s: &str) -> Result<LockStatus, CoreError> {
    match s {
        "TRANCAR" => Ok(LockStatus::Occupied),
        "DESTRANCAR" => Ok(LockStatus::Free),
        other => LockStatus::from_str(other),
    }
}

// ---------------------------------------------------------------------------
// Withdrawal reason
// ---------------------------------------------------------------------------

/// Reason a piece of equipment is withdrawn from the network: retirement or
/// repair. Doubles as the status the equipment is left in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepairAction {
    #[serde(rename = "APOSENTADA")]
    Retire,
    #[serde(rename = "EM_REPARO")]
    Repair,
}

impl RepairAction {
    pub fn as_bicycle_status(&self) -> BicycleStatus {
        match self {
            Self::Retire => BicycleStatus::Retired,
            Self::Repair => BicycleStatus::InRepair,
        }
    }

    pub fn as_lock_status(&self) -> LockStatus {
        match self {
            Self::Retire => LockStatus::Retired,
            Self::Repair => LockStatus::InRepair,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
