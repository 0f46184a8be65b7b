use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of an account within one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(pub u64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A bank customer and their movement history.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: AccountId,
    pub owner: String,
    pub username: String,
    /// Chronological signed amounts, positive for deposits.
    pub movements: Vec<f64>,
    /// Percentage paid on deposits.
    pub interest_rate: f64,
    pub pin: u32,
}

impl Account {
    pub fn new(
        id: AccountId,
        owner: impl Into<String>,
        movements: Vec<f64>,
        interest_rate: f64,
        pin: u32,
    ) -> Self {
        let owner = owner.into();
        let username = derive_username(&owner);
        Self {
            id,
            owner,
            username,
            movements,
            interest_rate,
            pin,
        }
    }

    /// First word of the owner's name, used in greetings.
    pub fn first_name(&self) -> &str {
        self.owner.split(' ').next().unwrap_or_default()
    }
}

/// Lowercase initials of each space-separated word in `owner`.
///
/// "Jonas Schmedtmann" becomes "js". Empty words, as produced by repeated
/// spaces, contribute nothing.
pub fn derive_username(owner: &str) -> String {
    owner
        .to_lowercase()
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}

/// Recomputes every account's username from its owner, in place.
pub fn generate_usernames(accounts: &mut [Account]) {
    for account in accounts.iter_mut() {
        account.username = derive_username(&account.owner);
    }
}
