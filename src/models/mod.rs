pub mod contract;
pub mod point;
pub mod session;

pub use contract::{Contract, ContractDraft, ContractPayload, ContractWithTotals};
pub use point::{Point, PointDraft, PointPayload};
pub use session::Session;
