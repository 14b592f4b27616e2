pub mod edit_controller;
pub mod selection_handler;

pub use edit_controller::EditState;
pub use selection_handler::{FetchTicket, SelectionHandler};
