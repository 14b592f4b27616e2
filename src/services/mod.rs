pub mod contract_service;
pub mod invoice_service;
pub mod point_service;
pub mod session_service;

pub use contract_service::ContractService;
pub use invoice_service::InvoiceService;
pub use point_service::PointService;
pub use session_service::SessionService;
