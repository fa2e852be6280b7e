//! Bicycle entity model and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use bicicletario_core::status::BicycleStatus;
use bicicletario_core::types::DbId;

use crate::repositories::Entity;

/// A registered bicycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bicycle {
    pub id: DbId,
    /// Brand.
    pub marca: String,
    pub modelo: String,
    /// Manufacture year, kept as text per the API contract.
    pub ano: String,
    /// Registration number.
    pub numero: i64,
    pub status: BicycleStatus,
}

/// DTO for registering a new bicycle.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBicycle {
    #[validate(length(min = 1, message = "marca must not be empty"))]
    pub marca: String,
    #[validate(length(min = 1, message = "modelo must not be empty"))]
    pub modelo: String,
    #[validate(length(min = 1, message = "ano must not be empty"))]
    pub ano: String,
    #[validate(range(min = 0, message = "numero must not be negative"))]
    pub numero: i64,
    pub status: BicycleStatus,
}

/// DTO for updating an existing bicycle. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBicycle {
    pub marca: Option<String>,
    pub modelo: Option<String>,
    pub ano: Option<String>,
    pub numero: Option<i64>,
    pub status: Option<BicycleStatus>,
}

impl Entity for Bicycle {
    type Create = CreateBicycle;
    type Update = UpdateBicycle;

    const NAME: &'static str = "Bicycle";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateBicycle) -> Self {
        Self {
            id,
            marca: input.marca,
            modelo: input.modelo,
            ano: input.ano,
            numero: input.numero,
            status: input.status,
        }
    }

    fn apply_update(&mut self, input: UpdateBicycle) {
        if let Some(marca) = input.marca {
            self.marca = marca;
        }
        if let Some(modelo) = input.modelo {
            self.modelo = modelo;
        }
        if let Some(ano) = input.ano {
            self.ano = ano;
        }
        if let Some(numero) = input.numero {
            self.numero = numero;
        }
        if let Some(status) = input.status {
            self.status = status;
        }
    }
}
