use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::gateway::{ContractApi, PointApi};
use crate::handlers::{EditState, FetchTicket, SelectionHandler};
use crate::models::{Contract, Point, PointDraft, PointPayload};

/// Which point the shared draft pair belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointTarget {
    /// A point being created for the active contract.
    New,
    /// An existing point being edited, by gateway id.
    Existing(i64),
}

/// The point ledger: the points loaded for the active contract, the contract
/// options the selection is made from, and the single shared draft pair.
///
/// The ledger's contents are valid only for the currently selected contract.
/// Switching the selection replaces them; a fetch that raced a newer
/// selection is discarded via its ticket rather than committed.
pub struct PointService {
    contract_gateway: Arc<dyn ContractApi>,
    point_gateway: Arc<dyn PointApi>,
    contracts: Vec<Contract>,
    selection: SelectionHandler,
    points: Vec<Point>,
    edit: EditState<PointTarget, PointDraft>,
}

impl PointService {
    pub fn new(contract_gateway: Arc<dyn ContractApi>, point_gateway: Arc<dyn PointApi>) -> Self {
        Self {
            contract_gateway,
            point_gateway,
            contracts: Vec::new(),
            selection: SelectionHandler::new(),
            points: Vec::new(),
            edit: EditState::default(),
        }
    }

    /// The contract options the operator selects from.
    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn selected_contract(&self) -> Option<i64> {
        self.selection.selected()
    }

    /// Ticket for re-fetching the active contract's points, if one is
    /// selected.
    pub fn current_ticket(&self) -> Option<FetchTicket> {
        self.selection.ticket()
    }

    pub fn editing(&self) -> Option<PointTarget> {
        self.edit.target().copied()
    }

    pub fn draft(&self) -> Option<&PointDraft> {
        self.edit.draft()
    }

    /// Refresh the contract options. A failed load is logged and the stale
    /// options are kept.
    pub async fn load_contracts(&mut self) {
        match self.contract_gateway.fetch_contracts().await {
            Ok(contracts) => self.contracts = contracts,
            Err(e) => tracing::error!("Failed to load contracts: {}", e),
        }
    }

    /// Make `contract_id` the active contract. Any draft and the previous
    /// contract's points are cleared before the new fetch resolves, so the
    /// ledger never shows points mixed across two contracts.
    pub async fn select_contract(&mut self, contract_id: i64) -> Result<()> {
        if !self
            .contracts
            .iter()
            .any(|c| c.id == Some(contract_id))
        {
            return Err(AppError::UnknownContract(contract_id));
        }

        self.edit.cancel();
        self.points.clear();
        let ticket = self.selection.select(contract_id);
        self.load_for(ticket).await;
        Ok(())
    }

    /// Replace the ledger with the points for the ticketed contract. The
    /// result is committed only while the ticket still matches the active
    /// selection; a stale response is dropped. A failed fetch is logged and
    /// the ledger is left as it was.
    pub async fn load_for(&mut self, ticket: FetchTicket) {
        match self.point_gateway.fetch_points(ticket.contract_id).await {
            Ok(points) => {
                if self.selection.is_current(&ticket) {
                    self.points = points;
                } else {
                    tracing::debug!(
                        contract_id = ticket.contract_id,
                        "Discarding points fetch for a stale selection"
                    );
                }
            }
            Err(e) => tracing::error!("Failed to load points: {}", e),
        }
    }

    /// Open the shared draft pair for a new point on the active contract.
    pub fn begin_add(&mut self) -> Result<()> {
        self.selection
            .selected()
            .ok_or(AppError::NoContractSelected)?;
        self.edit.begin(PointTarget::New, PointDraft::default());
        Ok(())
    }

    /// Open the shared draft pair seeded from an existing point.
    pub fn begin_edit(&mut self, point_id: i64) -> Result<()> {
        let point = self
            .points
            .iter()
            .find(|p| p.id == point_id)
            .ok_or(AppError::UnknownPoint(point_id))?;
        self.edit
            .begin(PointTarget::Existing(point_id), PointDraft::from_point(point));
        Ok(())
    }

    /// Update one field of the shared draft pair.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        let draft = self.edit.draft_mut().ok_or(AppError::NoActiveEdit)?;
        match field {
            "point" => draft.point = value.to_string(),
            "value" => draft.value = value.to_string(),
            _ => return Err(AppError::Validation(format!("Unknown field: {}", field))),
        }
        Ok(())
    }

    /// Persist the draft: an update when an existing point is being edited,
    /// a create scoped to the active contract otherwise. There is no
    /// client-side validation before save; label and value may be empty.
    /// Success clears the draft and reloads the ledger.
    pub async fn save(&mut self) -> Result<()> {
        let contract_id = self
            .selection
            .selected()
            .ok_or(AppError::NoContractSelected)?;
        let (target, draft) = match &self.edit {
            EditState::Editing { target, draft } => (*target, draft.clone()),
            EditState::Idle => return Err(AppError::NoActiveEdit),
        };

        let payload = PointPayload::new(contract_id, &draft);
        match target {
            PointTarget::Existing(id) => self.point_gateway.update_point(id, &payload).await?,
            PointTarget::New => self.point_gateway.create_point(&payload).await?,
        }

        self.edit.finish();
        if let Some(ticket) = self.current_ticket() {
            self.load_for(ticket).await;
        }
        Ok(())
    }

    /// Close the draft pair without saving.
    pub fn cancel(&mut self) {
        self.edit.cancel();
    }

    pub async fn delete(&mut self, point_id: i64) -> Result<()> {
        self.point_gateway.delete_point(point_id).await?;
        if let Some(ticket) = self.current_ticket() {
            self.load_for(ticket).await;
        }
        Ok(())
    }
}
