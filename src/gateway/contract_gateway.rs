use std::sync::Arc;

use async_trait::async_trait;

use super::core_gateway::CoreGateway;
use super::{ContractApi, GatewayError};
use crate::models::{Contract, ContractPayload, ContractWithTotals};

/// HTTP implementation of the contract collection operations.
pub struct ContractGateway {
    core: Arc<CoreGateway>,
}

impl ContractGateway {
    pub fn new(core: Arc<CoreGateway>) -> Self {
        Self { core }
    }
}

#[async_trait]
impl ContractApi for ContractGateway {
    async fn fetch_contracts(&self) -> Result<Vec<Contract>, GatewayError> {
        self.core.get_json("/contracts").await
    }

    async fn fetch_contracts_with_totals(&self) -> Result<Vec<ContractWithTotals>, GatewayError> {
        self.core.get_json("/contracts_with_points").await
    }

    async fn create_contract(&self, payload: &ContractPayload) -> Result<(), GatewayError> {
        self.core.post_json("/add_contract", payload).await
    }

    async fn update_contract(&self, id: i64, payload: &ContractPayload) -> Result<(), GatewayError> {
        self.core
            .put_json(&format!("/update_contract/{}", id), payload)
            .await
    }

    async fn delete_contract(&self, id: i64) -> Result<(), GatewayError> {
        self.core.delete(&format!("/delete_contract/{}", id)).await
    }
}
