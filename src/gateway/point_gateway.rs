use std::sync::Arc;

use async_trait::async_trait;

use super::core_gateway::CoreGateway;
use super::{GatewayError, PointApi};
use crate::models::{Point, PointPayload};

/// HTTP implementation of the point collection operations.
pub struct PointGateway {
    core: Arc<CoreGateway>,
}

impl PointGateway {
    pub fn new(core: Arc<CoreGateway>) -> Self {
        Self { core }
    }
}

#[async_trait]
impl PointApi for PointGateway {
    async fn fetch_points(&self, contract_id: i64) -> Result<Vec<Point>, GatewayError> {
        self.core
            .get_json(&format!("/get_points/{}", contract_id))
            .await
    }

    async fn create_point(&self, payload: &PointPayload) -> Result<(), GatewayError> {
        self.core.post_json("/add_point", payload).await
    }

    async fn update_point(&self, id: i64, payload: &PointPayload) -> Result<(), GatewayError> {
        self.core
            .put_json(&format!("/update_point/{}", id), payload)
            .await
    }

    async fn delete_point(&self, id: i64) -> Result<(), GatewayError> {
        self.core.delete(&format!("/delete_point/{}", id)).await
    }
}
