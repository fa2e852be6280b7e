//! Totem (docking station) entity model and DTOs.

use serde::{Deserialize, Serialize};
use validator::Validate;

use bicicletario_core::types::DbId;

use crate::repositories::Entity;

/// A physical station grouping multiple locks at one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totem {
    pub id: DbId,
    pub localizacao: String,
    pub descricao: String,
    /// Ids of the locks registered to this totem, in registration order.
    /// Written by the lock network-integration action.
    pub trancas: Vec<DbId>,
}

/// DTO for registering a new totem.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTotem {
    #[validate(length(min = 1, message = "localizacao must not be empty"))]
    pub localizacao: String,
    #[validate(length(min = 1, message = "descricao must not be empty"))]
    pub descricao: String,
}

/// DTO for updating an existing totem. The lock list is not updatable
/// here, only via the lock integrate/withdraw actions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTotem {
    pub localizacao: Option<String>,
    pub descricao: Option<String>,
}

impl Entity for Totem {
    type Create = CreateTotem;
    type Update = UpdateTotem;

    const NAME: &'static str = "Totem";

    fn id(&self) -> DbId {
        self.id
    }

    fn from_create(id: DbId, input: CreateTotem) -> Self {
        Self {
            id,
            localizacao: input.localizacao,
            descricao: input.descricao,
            trancas: Vec::new(),
        }
    }

    fn apply_update(&mut self, input: UpdateTotem) {
        if let Some(localizacao) = input.localizacao {
            self.localizacao = localizacao;
        }
        if let Some(descricao) = input.descricao {
            self.descricao = descricao;
        }
    }
}
