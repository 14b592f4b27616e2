use async_trait::async_trait;

use crate::models::{Contract, ContractPayload, ContractWithTotals, Point, PointPayload};

pub mod contract_gateway;
pub mod core_gateway;
pub mod point_gateway;

pub use contract_gateway::ContractGateway;
pub use core_gateway::CoreGateway;
pub use point_gateway::PointGateway;

/// Contract collection operations the console issues against the gateway.
///
/// Mutations return no body: the gateway answers creates and updates with a
/// status message, and the console reloads the affected collection after
/// every mutation instead of reading it.
#[async_trait]
pub trait ContractApi: Send + Sync {
    async fn fetch_contracts(&self) -> Result<Vec<Contract>, GatewayError>;
    async fn fetch_contracts_with_totals(&self) -> Result<Vec<ContractWithTotals>, GatewayError>;
    async fn create_contract(&self, payload: &ContractPayload) -> Result<(), GatewayError>;
    async fn update_contract(&self, id: i64, payload: &ContractPayload) -> Result<(), GatewayError>;
    async fn delete_contract(&self, id: i64) -> Result<(), GatewayError>;
}

/// Point collection operations, always scoped to an owning contract.
#[async_trait]
pub trait PointApi: Send + Sync {
    async fn fetch_points(&self, contract_id: i64) -> Result<Vec<Point>, GatewayError>;
    async fn create_point(&self, payload: &PointPayload) -> Result<(), GatewayError>;
    async fn update_point(&self, id: i64, payload: &PointPayload) -> Result<(), GatewayError>;
    async fn delete_point(&self, id: i64) -> Result<(), GatewayError>;
}

/// The console makes no distinction between these beyond logging: any
/// variant means the call failed and nothing was committed locally.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Gateway returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Invalid gateway response: {0}")]
    Decode(String),
}
