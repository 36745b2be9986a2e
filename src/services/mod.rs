pub mod admin_service;
pub mod ledger;
pub mod matching;
pub mod order_service;
pub mod order_store;

pub use admin_service::{AdminService, AdminServiceError};
pub use ledger::{Ledger, LedgerError};
pub use order_service::{OrderService, OrderServiceError};
pub use order_store::OrderStore;
