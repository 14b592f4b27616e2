use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A contract record as the gateway stores it.
///
/// Dates are carried as ISO-8601 text exactly as the gateway persists them;
/// the only invariant enforced before a save is that the fields are non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Gateway-assigned identifier. `None` for a locally-pending unsaved row.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub contract_name: String,
    pub start_date: String,
    pub end_date: String,
}

impl Contract {
    /// An empty unsaved row, appended to the registry when the operator
    /// requests an add.
    pub fn unsaved() -> Self {
        Self {
            id: None,
            contract_name: String::new(),
            start_date: String::new(),
            end_date: String::new(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// A contract decorated with the gateway's aggregate point totals, as
/// returned by the composite invoice view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractWithTotals {
    pub id: i64,
    pub contract_name: String,
    pub start_date: String,
    pub end_date: String,
    /// Count of associated points, computed by the gateway. Read-only.
    pub total_points: i64,
    /// Sum of associated point values, computed by the gateway. Read-only.
    pub total_value: f64,
}

/// Editable field buffer for a contract row in edit mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContractDraft {
    pub contract_name: String,
    pub start_date: String,
    pub end_date: String,
}

impl ContractDraft {
    /// Seed a draft from an existing row's current values.
    pub fn from_row(row: &Contract) -> Self {
        Self {
            contract_name: row.contract_name.clone(),
            start_date: row.start_date.clone(),
            end_date: row.end_date.clone(),
        }
    }

    /// True when every required field carries a value.
    pub fn is_complete(&self) -> bool {
        !self.contract_name.is_empty() && !self.start_date.is_empty() && !self.end_date.is_empty()
    }

    /// Advisory minimum for the end-date input, derived from the draft's
    /// start date (date-only). Not a validation gate.
    pub fn min_end_date(&self) -> Option<NaiveDate> {
        self.start_date.parse().ok()
    }
}

/// Request body for contract create and update calls.
#[derive(Debug, Clone, Serialize)]
pub struct ContractPayload {
    pub contract_name: String,
    pub start_date: String,
    pub end_date: String,
}

impl From<&ContractDraft> for ContractPayload {
    fn from(draft: &ContractDraft) -> Self {
        Self {
            contract_name: draft.contract_name.clone(),
            start_date: draft.start_date.clone(),
            end_date: draft.end_date.clone(),
        }
    }
}
