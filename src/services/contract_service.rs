use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::{AppError, Result};
use crate::gateway::ContractApi;
use crate::handlers::EditState;
use crate::models::{Contract, ContractDraft, ContractPayload};

/// The contract registry: the in-memory contract list plus the single edit
/// slot and the inline validation error for the contract table.
///
/// The list is loaded wholesale from the gateway and reloaded after every
/// mutation, so the visible rows always reflect the last completed load. The
/// only local-only state is the unsaved row appended by `begin_add`, which
/// lives until it is saved or cancelled.
pub struct ContractService {
    gateway: Arc<dyn ContractApi>,
    rows: Vec<Contract>,
    edit: EditState<usize, ContractDraft>,
    error: Option<String>,
}

impl ContractService {
    pub fn new(gateway: Arc<dyn ContractApi>) -> Self {
        Self {
            gateway,
            rows: Vec::new(),
            edit: EditState::default(),
            error: None,
        }
    }

    pub fn rows(&self) -> &[Contract] {
        &self.rows
    }

    /// Index of the row in edit mode, if any.
    pub fn editing_row(&self) -> Option<usize> {
        self.edit.target().copied()
    }

    pub fn draft(&self) -> Option<&ContractDraft> {
        self.edit.draft()
    }

    /// The inline validation error currently surfaced, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Advisory minimum for the draft's end-date input, derived from its
    /// start date. Not enforced on save.
    pub fn min_end_date(&self) -> Option<NaiveDate> {
        self.edit.draft().and_then(ContractDraft::min_end_date)
    }

    /// Replace the local list with the gateway's current contract list.
    /// A failed load is logged and the stale list is kept; no retry.
    pub async fn load(&mut self) {
        match self.gateway.fetch_contracts().await {
            Ok(contracts) => self.rows = contracts,
            Err(e) => tracing::error!("Failed to load contracts: {}", e),
        }
    }

    /// Append an unsaved row and enter edit mode on it. No gateway call is
    /// made until the row is saved.
    pub fn begin_add(&mut self) {
        self.discard_edit_slot();
        self.rows.push(Contract::unsaved());
        self.edit
            .begin(self.rows.len() - 1, ContractDraft::default());
        self.error = None;
    }

    /// Enter edit mode on an existing row, seeding the draft from its
    /// current values.
    pub fn begin_edit(&mut self, index: usize) -> Result<()> {
        self.discard_edit_slot();
        let row = self
            .rows
            .get(index)
            .ok_or(AppError::UnknownRow(index))?;
        self.edit.begin(index, ContractDraft::from_row(row));
        self.error = None;
        Ok(())
    }

    /// Update one field of the active draft.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        let draft = self.edit.draft_mut().ok_or(AppError::NoActiveEdit)?;
        match field {
            "contract_name" => draft.contract_name = value.to_string(),
            "start_date" => draft.start_date = value.to_string(),
            "end_date" => draft.end_date = value.to_string(),
            _ => return Err(AppError::Validation(format!("Unknown field: {}", field))),
        }
        Ok(())
    }

    /// Persist the draft on `index`: an update when the row already carries a
    /// gateway id, a create otherwise. Success exits edit mode and reloads
    /// the list; a gateway failure leaves edit mode and the draft untouched.
    pub async fn save(&mut self, index: usize) -> Result<()> {
        if !self.edit.is_editing(&index) {
            return Err(AppError::NoActiveEdit);
        }
        let draft = self.edit.draft().cloned().ok_or(AppError::NoActiveEdit)?;

        if !draft.is_complete() {
            let message = "Please fill in all fields before saving.".to_string();
            self.error = Some(message.clone());
            return Err(AppError::Validation(message));
        }

        let payload = ContractPayload::from(&draft);
        let row = self.rows.get(index).ok_or(AppError::UnknownRow(index))?;
        match row.id {
            Some(id) => self.gateway.update_contract(id, &payload).await?,
            None => self.gateway.create_contract(&payload).await?,
        }

        self.edit.finish();
        self.error = None;
        self.load().await;
        Ok(())
    }

    /// Leave edit mode and discard the draft. A cancelled unsaved row is
    /// removed from the displayed sequence.
    pub fn cancel(&mut self) {
        self.discard_edit_slot();
        self.error = None;
    }

    pub async fn delete(&mut self, id: i64) -> Result<()> {
        self.gateway.delete_contract(id).await?;
        self.load().await;
        Ok(())
    }

    /// Drop whatever occupies the edit slot. Unsaved rows exist only while
    /// their draft does, so an implicitly discarded draft takes its row with
    /// it. The unsaved row is always the appended last row, so removing it
    /// never shifts the index of an earlier row.
    fn discard_edit_slot(&mut self) {
        if let Some((index, _)) = self.edit.cancel()
            && self.rows.get(index).is_some_and(|row| !row.is_persisted())
        {
            self.rows.remove(index);
        }
    }
}
