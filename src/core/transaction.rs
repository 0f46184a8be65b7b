//! Authentication and the operations that change account state.
//!
//! Every operation checks its preconditions before touching the registry, so
//! a returned error always means nothing was mutated.
use crate::core::account::{Account, AccountId};
use crate::core::config::BankRules;
use crate::core::error::{BankError, Result};
use crate::core::ledger;
use crate::core::registry::Registry;
use tracing::{debug, info};

/// Resolves `username` to the first matching account and checks its PIN.
pub fn login(registry: &Registry, username: &str, pin: u32) -> Result<AccountId> {
    let account = registry
        .find_by_username(username)
        .ok_or_else(|| BankError::UnknownUser(username.to_string()))?;

    if account.pin != pin {
        debug!(username, "PIN mismatch");
        return Err(BankError::WrongPin);
    }

    info!(owner = %account.owner, "Logged in");
    Ok(account.id)
}

/// Moves `amount` from `sender` to the account named `receiver_username`.
///
/// Checks, in order: positive amount, receiver exists, sender can cover the
/// amount, receiver is not the sender.
pub fn transfer(
    registry: &mut Registry,
    sender: AccountId,
    receiver_username: &str,
    amount: f64,
) -> Result<()> {
    let sender_account = registry.get(sender).ok_or(BankError::NotLoggedIn)?;

    if amount.is_nan() || amount <= 0.0 {
        return Err(BankError::NonPositiveAmount(amount));
    }

    let receiver = registry
        .find_by_username(receiver_username)
        .ok_or_else(|| BankError::UnknownReceiver(receiver_username.to_string()))?
        .id;

    let balance = ledger::balance(sender_account);
    if balance < amount {
        return Err(BankError::InsufficientFunds { balance, amount });
    }

    if receiver_username == sender_account.username {
        return Err(BankError::SelfTransfer);
    }

    push_movement(registry, sender, -amount)?;
    push_movement(registry, receiver, amount)?;

    info!(
        from = %sender,
        to = %receiver,
        amount,
        "Transfer completed"
    );
    Ok(())
}

/// Grants a loan when some existing movement covers `rules.loan_coverage` of it.
///
/// Movements are compared by signed value without separating deposits from
/// withdrawals.
pub fn request_loan(
    registry: &mut Registry,
    account: AccountId,
    amount: f64,
    rules: &BankRules,
) -> Result<()> {
    let borrower = registry.get(account).ok_or(BankError::NotLoggedIn)?;

    if amount.is_nan() || amount <= 0.0 {
        return Err(BankError::NonPositiveAmount(amount));
    }

    let required = amount * rules.loan_coverage;
    if !borrower.movements.iter().any(|&mov| mov >= required) {
        debug!(required, "No movement covers the loan");
        return Err(BankError::LoanNotCovered { required });
    }

    push_movement(registry, account, amount)?;
    info!(account = %account, amount, "Loan granted");
    Ok(())
}

/// Removes the current account once the user repeats its username and PIN.
pub fn close_account(
    registry: &mut Registry,
    username: &str,
    pin: u32,
    current: AccountId,
) -> Result<Account> {
    let account = registry.get(current).ok_or(BankError::NotLoggedIn)?;

    if account.username != username || account.pin != pin {
        return Err(BankError::CredentialMismatch);
    }

    let removed = registry.remove(current).ok_or(BankError::NotLoggedIn)?;
    info!(owner = %removed.owner, "Account closed");
    Ok(removed)
}

fn push_movement(registry: &mut Registry, id: AccountId, amount: f64) -> Result<()> {
    let account = registry.get_mut(id).ok_or(BankError::NotLoggedIn)?;
    account.movements.push(amount);
    Ok(())
}
