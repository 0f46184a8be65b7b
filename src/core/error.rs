//! Reasons a banking action did not take effect.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BankError {
    #[error("No account with username '{0}'")]
    UnknownUser(String),

    #[error("Incorrect PIN")]
    WrongPin,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Amount must be greater than zero, got {0}")]
    NonPositiveAmount(f64),

    #[error("No receiver with username '{0}'")]
    UnknownReceiver(String),

    #[error("Insufficient funds: balance is {balance:.2}, requested {amount:.2}")]
    InsufficientFunds { balance: f64, amount: f64 },

    #[error("Cannot transfer to your own account")]
    SelfTransfer,

    #[error("Loan denied: no movement of at least {required:.2}")]
    LoanNotCovered { required: f64 },

    #[error("Username or PIN does not match the current account")]
    CredentialMismatch,

    #[error("Invalid {field}: '{value}'")]
    InvalidInput { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, BankError>;
