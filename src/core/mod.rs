//! Accounts, ledger figures and the rules that move money between them

pub mod account;
pub mod config;
pub mod error;
pub mod ledger;
pub mod log;
pub mod registry;
pub mod session;
pub mod transaction;

// Re-export main types for cleaner imports
pub use account::{Account, AccountId};
pub use config::{AppConfig, BankRules};
pub use error::BankError;
pub use registry::Registry;
pub use session::{AccountView, Session};
