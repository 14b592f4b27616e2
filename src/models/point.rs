use serde::{Deserialize, Serialize};

/// A point line item. Every point belongs to exactly one contract and is only
/// ever loaded in the context of that contract's detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: i64,
    pub contract_id: i64,
    /// Free-text label.
    pub point: String,
    /// Decimal-valued text; parsed as a float for aggregation, with
    /// non-numeric or empty input treated as zero.
    pub value: String,
}

impl Point {
    /// The point's value as a number for aggregation.
    pub fn numeric_value(&self) -> f64 {
        self.value.parse().unwrap_or(0.0)
    }
}

/// The single shared draft pair used by the point ledger. Unlike contract
/// drafts there is no pre-save validation; label and value may be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointDraft {
    pub point: String,
    pub value: String,
}

impl PointDraft {
    pub fn from_point(point: &Point) -> Self {
        Self {
            point: point.point.clone(),
            value: point.value.clone(),
        }
    }
}

/// Request body for point create and update calls.
#[derive(Debug, Clone, Serialize)]
pub struct PointPayload {
    pub contract_id: i64,
    pub point: String,
    pub value: String,
}

impl PointPayload {
    pub fn new(contract_id: i64, draft: &PointDraft) -> Self {
        Self {
            contract_id,
            point: draft.point.clone(),
            value: draft.value.clone(),
        }
    }
}
