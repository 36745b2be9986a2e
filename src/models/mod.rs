pub mod balance;
pub mod instrument;
pub mod order;
pub mod trade;
pub mod user;

pub use balance::Balance;
pub use instrument::Instrument;
pub use order::{Direction, Order, OrderStatus};
pub use trade::Trade;
pub use user::{User, UserRole};
