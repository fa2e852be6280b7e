//! Lock (tranca) entity model and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use bicicletario_core::status::LockStatus;
use bicicletario_core::types::DbId;

use crate::repositories::Entity;

/// A docking lock. Holds at most one bicycle, referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lock {
    pub id: DbId,
    pub numero: i64,
    pub localizacao: String,
    #[serde(rename = "anoDeFabricacao")]
    pub ano_de_fabricacao: String,
    pub modelo: String,
    pub status: LockStatus,
    /// Id of the docked bicycle, if any. Maintained by the lock/unlock
    /// operations; only meaningful while the lock is occupied.
    pub bicicleta: Option<DbId>,
}

/// DTO for registering a new lock.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLock {
    #[validate(range(min = 0, message = "numero must not be negative"))]
    pub numero: i64,
    #[validate(length(min = 1, message = "localizacao must not be empty"))]
    pub localizacao: String,
    #[serde(rename = "anoDeFabricacao")]
    #[validate(length(min = 1, message = "anoDeFabricacao must not be empty"))]
    pub ano_de_fabricacao: String,
    #[validate(length(min = 1, message = "modelo must not be empty"))]
    pub modelo: String,
    pub status: LockStatus,
}

/// DTO for updating an existing lock. All fields are optional; the
/// bicycle reference is not updatable here, only via lock/unlock.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateLock {
    pub numero: Option<i64>,
    pub localizacao: Option<String>,
    #[serde(rename = "anoDeFabricacao")]
    pub ano_de_fabricacao: Option<String>,
    pub modelo: Option<String>,
    pub status: Option<LockStatus>,
}

impl Entity for Lock {
    type Create = CreateLock;
    type Update = UpdateLock;

    const NAME: &'static str = "Lock";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateLock) -> Self {
        Self {
            id,
            numero: input.numero,
            localizacao: input.localizacao,
            ano_de_fabricacao: input.ano_de_fabricacao,
            modelo: input.modelo,
            status: input.status,
            bicicleta: None,
        }
    }

    fn apply_update(&mut self, input: UpdateLock) {
        if let Some(numero) = input.numero {
            self.numero = numero;
        }
        if let Some(localizacao) = input.localizacao {
            self.localizacao = localizacao;
        }
        if let Some(ano) = input.ano_de_fabricacao {
            self.ano_de_fabricacao = ano;
        }
        if let Some(modelo) = input.modelo {
            self.modelo = modelo;
        }
        if let Some(status) = input.status {
            self.status = status;
        }
    }
}
