use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::gateway::{ContractApi, PointApi};
use crate::handlers::SelectionHandler;
use crate::models::{ContractWithTotals, Point};

/// Total value of a point sequence: the sum of each value parsed as a float,
/// with non-numeric or empty values counting as zero. Never written back.
pub fn aggregate_total(points: &[Point]) -> f64 {
    points.iter().map(Point::numeric_value).sum()
}

/// Detail popup for one contract's invoice.
///
/// `total_value` is recomputed from the popup's own point sequence rather
/// than taken from the gateway's composite view, so the displayed total
/// always matches exactly the points shown in the popup table.
#[derive(Debug, Clone)]
pub struct InvoicePopup {
    pub contract: ContractWithTotals,
    pub points: Vec<Point>,
    pub total_value: f64,
}

/// The invoice view: contracts decorated with gateway-computed totals, and
/// the optional detail popup for the selected contract.
pub struct InvoiceService {
    contract_gateway: Arc<dyn ContractApi>,
    point_gateway: Arc<dyn PointApi>,
    contracts: Vec<ContractWithTotals>,
    selection: SelectionHandler,
    popup: Option<InvoicePopup>,
}

impl InvoiceService {
    pub fn new(contract_gateway: Arc<dyn ContractApi>, point_gateway: Arc<dyn PointApi>) -> Self {
        Self {
            contract_gateway,
            point_gateway,
            contracts: Vec::new(),
            selection: SelectionHandler::new(),
            popup: None,
        }
    }

    pub fn contracts(&self) -> &[ContractWithTotals] {
        &self.contracts
    }

    pub fn popup(&self) -> Option<&InvoicePopup> {
        self.popup.as_ref()
    }

    /// Replace the invoice table with the gateway's composite view. A failed
    /// load is logged and the stale table is kept.
    pub async fn load(&mut self) {
        match self.contract_gateway.fetch_contracts_with_totals().await {
            Ok(contracts) => self.contracts = contracts,
            Err(e) => tracing::error!("Failed to load invoice contracts: {}", e),
        }
    }

    /// Select a contract row and open its detail popup. The previous popup is
    /// cleared before the fetch resolves; a fetch that raced a newer
    /// selection leaves the popup to that newer selection. A failed points
    /// fetch is logged and the popup opens with an empty table.
    pub async fn open_popup(&mut self, contract_id: i64) -> Result<()> {
        let contract = self
            .contracts
            .iter()
            .find(|c| c.id == contract_id)
            .cloned()
            .ok_or(AppError::UnknownContract(contract_id))?;

        self.popup = None;
        let ticket = self.selection.select(contract_id);

        let points = match self.point_gateway.fetch_points(contract_id).await {
            Ok(points) => {
                if !self.selection.is_current(&ticket) {
                    tracing::debug!(contract_id, "Discarding popup fetch for a stale selection");
                    return Ok(());
                }
                points
            }
            Err(e) => {
                tracing::error!("Failed to load points: {}", e);
                Vec::new()
            }
        };

        let total_value = aggregate_total(&points);
        self.popup = Some(InvoicePopup {
            contract,
            points,
            total_value,
        });
        Ok(())
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
        self.selection.clear();
    }
}
