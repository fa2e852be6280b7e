//! Request payloads for the network integrate/withdraw actions.

use serde::Deserialize;

use bicicletario_core::status::RepairAction;
use bicicletario_core::types::DbId;

/// Put a bicycle (new, or back from repair) into a dock on the network.
#[derive(Debug, Clone, Deserialize)]
pub struct BicycleIntegration {
    #[serde(rename = "idTranca")]
    pub id_tranca: DbId,
    #[serde(rename = "idBicicleta")]
    pub id_bicicleta: DbId,
    /// Employee performing the action; recorded in the log only.
    #[serde(rename = "idFuncionario")]
    pub id_funcionario: DbId,
}

/// Take a bicycle off the network for retirement or repair.
#[derive(Debug, Clone, Deserialize)]
pub struct BicycleWithdrawal {
    #[serde(rename = "idTranca")]
    pub id_tranca: DbId,
    #[serde(rename = "idBicicleta")]
    pub id_bicicleta: DbId,
    #[serde(rename = "idFuncionario")]
    pub id_funcionario: DbId,
    #[serde(rename = "statusAcaoReparador")]
    pub status_acao: RepairAction,
}

/// Register a lock with a totem, putting it on the network.
#[derive(Debug, Clone, Deserialize)]
pub struct LockIntegration {
    #[serde(rename = "idTotem")]
    pub id_totem: DbId,
    #[serde(rename = "idTranca")]
    pub id_tranca: DbId,
    #[serde(rename = "idFuncionario")]
    pub id_funcionario: DbId,
}

/// Take a lock off the network for retirement or repair.
#[derive(Debug, Clone, Deserialize)]
pub struct LockWithdrawal {
    #[serde(rename = "idTotem")]
    pub id_totem: DbId,
    #[serde(rename = "idTranca")]
    pub id_tranca: DbId,
    #[serde(rename = "idFuncionario")]
    pub id_funcionario: DbId,
    #[serde(rename = "statusAcaoReparador")]
    pub status_acao: RepairAction,
}
