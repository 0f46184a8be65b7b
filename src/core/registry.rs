//! The in-memory list of accounts.
use crate::core::account::{Account, AccountId, generate_usernames};
use crate::core::config::AccountSeed;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Ordered accounts, keyed internally by [`AccountId`].
///
/// Accounts are never created after load; the only structural change is
/// removal on closure.
#[derive(Debug, Default)]
pub struct Registry {
    accounts: Vec<Account>,
}

impl Registry {
    pub fn new(mut accounts: Vec<Account>) -> Self {
        generate_usernames(&mut accounts);

        {
            let mut seen = HashSet::new();
            for account in &accounts {
                if !seen.insert(account.username.as_str()) {
                    warn!(
                        username = %account.username,
                        owner = %account.owner,
                        "Duplicate username, lookups resolve to the first account"
                    );
                }
            }
        }

        debug!("Registry loaded with {} accounts", accounts.len());
        Self { accounts }
    }

    /// Builds accounts from configuration, assigning ids in listed order.
    pub fn from_seeds(seeds: &[AccountSeed]) -> Self {
        let accounts = seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                Account::new(
                    AccountId(i as u64),
                    seed.owner.clone(),
                    seed.movements.clone(),
                    seed.interest_rate,
                    seed.pin,
                )
            })
            .collect();
        Self::new(accounts)
    }

    /// First account whose username equals `username`.
    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        let found = self.accounts.iter().find(|acc| acc.username == username);
        debug!(username, found = found.is_some(), "Username lookup");
        found
    }

    pub fn get(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.id == id)
    }

    pub fn get_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.id == id)
    }

    pub fn remove(&mut self, id: AccountId) -> Option<Account> {
        let index = self.accounts.iter().position(|acc| acc.id == id)?;
        Some(self.accounts.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
