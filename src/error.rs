use thiserror::Error;

use crate::gateway::GatewayError;

#[derive(Error, Debug)]
pub enum AppError {
    /// Required fields missing before a save. Recovered locally: surfaced
    /// inline, no network call performed, edit mode retained.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Network failure or non-success gateway response. Surfaced to the
    /// operator as a blocking notification; the draft is preserved for retry.
    #[error("Gateway error: {0}")]
    Gateway(#[from] GatewayError),

    #[error("Session error: {0}")]
    Session(String),

    #[error("No row is currently being edited")]
    NoActiveEdit,

    #[error("No contract is currently selected")]
    NoContractSelected,

    #[error("No contract at row {0}")]
    UnknownRow(usize),

    #[error("Unknown contract: {0}")]
    UnknownContract(i64),

    #[error("Unknown point: {0}")]
    UnknownPoint(i64),
}

pub type Result<T> = std::result::Result<T, AppError>;
