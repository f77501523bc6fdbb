pub mod accounts;
pub mod dto;
pub mod error;

// Re-export commonly used types
pub use accounts::AccountService;
pub use dto::{AccountSnapshot, TransactionView};
pub use error::ServiceError;
