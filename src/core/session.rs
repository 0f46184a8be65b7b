//! The logged-in user's view of the bank.
//!
//! A [`Session`] turns raw text input into transaction engine calls and hands
//! back an [`AccountView`] with everything a front end needs to redraw.
use crate::core::account::{Account, AccountId};
use crate::core::config::BankRules;
use crate::core::error::{BankError, Result};
use crate::core::ledger::{self, MovementRow, Summary};
use crate::core::registry::Registry;
use crate::core::transaction;
use serde::Serialize;
use tracing::debug;

/// Everything shown for the current account after an action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountView {
    pub owner: String,
    pub username: String,
    pub welcome: String,
    pub movements: Vec<MovementRow>,
    pub balance: f64,
    pub summary: Summary,
    pub sorted: bool,
}

impl AccountView {
    pub fn new(account: &Account, sorted: bool) -> Self {
        Self {
            owner: account.owner.clone(),
            username: account.username.clone(),
            welcome: format!("Welcome back, {}!", account.first_name()),
            movements: ledger::movement_rows(account, sorted),
            balance: ledger::balance(account),
            summary: ledger::summary(account),
            sorted,
        }
    }
}

#[derive(Debug, Default)]
pub struct Session {
    current: Option<AccountId>,
    sorted: bool,
    rules: BankRules,
}

impl Session {
    pub fn new(rules: BankRules) -> Self {
        Self {
            current: None,
            sorted: false,
            rules,
        }
    }

    /// The logged-in account, if it still exists in `registry`.
    pub fn current<'a>(&self, registry: &'a Registry) -> Option<&'a Account> {
        self.current.and_then(|id| registry.get(id))
    }

    pub fn is_logged_in(&self, registry: &Registry) -> bool {
        self.current(registry).is_some()
    }

    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn login(
        &mut self,
        registry: &Registry,
        username: &str,
        pin_text: &str,
    ) -> Result<AccountView> {
        let pin = parse_pin(pin_text)?;
        let id = transaction::login(registry, username.trim(), pin)?;

        self.current = Some(id);
        self.sorted = false;
        self.view(registry)
    }

    pub fn transfer(
        &mut self,
        registry: &mut Registry,
        receiver: &str,
        amount_text: &str,
    ) -> Result<AccountView> {
        let sender = self.current_id(registry)?;
        let amount = parse_amount(amount_text)?;

        transaction::transfer(registry, sender, receiver.trim(), amount)?;
        self.view(registry)
    }

    pub fn request_loan(&mut self, registry: &mut Registry, amount_text: &str) -> Result<AccountView> {
        let account = self.current_id(registry)?;
        let amount = parse_amount(amount_text)?;

        transaction::request_loan(registry, account, amount, &self.rules)?;
        self.view(registry)
    }

    /// Closes the logged-in account and ends the session.
    pub fn close_account(
        &mut self,
        registry: &mut Registry,
        username: &str,
        pin_text: &str,
    ) -> Result<Account> {
        let current = self.current_id(registry)?;
        let pin = parse_pin(pin_text)?;

        let removed = transaction::close_account(registry, username.trim(), pin, current)?;
        self.current = None;
        self.sorted = false;
        Ok(removed)
    }

    /// Flips between chronological and ascending order.
    pub fn toggle_sort(&mut self, registry: &Registry) -> Result<AccountView> {
        self.current_id(registry)?;
        self.sorted = !self.sorted;
        debug!(sorted = self.sorted, "Toggled movement order");
        self.view(registry)
    }

    pub fn view(&self, registry: &Registry) -> Result<AccountView> {
        let account = self.current(registry).ok_or(BankError::NotLoggedIn)?;
        debug!(owner = %account.owner, "Refreshing view");
        Ok(AccountView::new(account, self.sorted))
    }

    fn current_id(&self, registry: &Registry) -> Result<AccountId> {
        self.current(registry)
            .map(|account| account.id)
            .ok_or(BankError::NotLoggedIn)
    }
}

fn parse_pin(text: &str) -> Result<u32> {
    text.trim().parse().map_err(|_| BankError::InvalidInput {
        field: "PIN",
        value: text.to_string(),
    })
}

fn parse_amount(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| BankError::InvalidInput {
            field: "amount",
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AppConfig;
    use crate::core::ledger::MovementKind;

    fn demo() -> (Registry, Session) {
        let config = AppConfig::example().expect("example config should parse");
        (Registry::from_seeds(&config.accounts), Session::new(config.rules()))
    }

    #[test]
    fn test_login_builds_view() {
        let (registry, mut session) = demo();

        let view = session.login(&registry, "js", "1111").unwrap();
        assert_eq!(view.welcome, "Welcome back, Jonas!");
        assert_eq!(view.balance, 3840.0);
        assert_eq!(view.summary.income, 5020.0);
        assert_eq!(view.summary.outgoing, 1180.0);
        assert_eq!(view.movements.len(), 8);
        assert_eq!(view.movements[2].kind, MovementKind::Withdrawal);
        assert!(!view.sorted);
        assert!(session.is_logged_in(&registry));
    }

    #[test]
    fn test_failed_login_creates_no_session() {
        let (registry, mut session) = demo();

        assert_eq!(session.login(&registry, "js", "2222"), Err(BankError::WrongPin));
        assert_eq!(
            session.login(&registry, "js", "abc"),
            Err(BankError::InvalidInput {
                field: "PIN",
                value: "abc".to_string()
            })
        );
        assert_eq!(
            session.login(&registry, "nobody", "1111"),
            Err(BankError::UnknownUser("nobody".to_string()))
        );
        assert!(!session.is_logged_in(&registry));
        assert_eq!(session.view(&registry), Err(BankError::NotLoggedIn));
    }

    #[test]
    fn test_actions_require_login() {
        let (mut registry, mut session) = demo();

        assert_eq!(session.transfer(&mut registry, "jd", "10"), Err(BankError::NotLoggedIn));
        assert_eq!(session.request_loan(&mut registry, "10"), Err(BankError::NotLoggedIn));
        assert_eq!(session.toggle_sort(&registry), Err(BankError::NotLoggedIn));
        assert!(matches!(
            session.close_account(&mut registry, "js", "1111"),
            Err(BankError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_transfer_refreshes_view() {
        let (mut registry, mut session) = demo();
        session.login(&registry, "js", "1111").unwrap();

        let view = session.transfer(&mut registry, "jd", " 840 ").unwrap();
        assert_eq!(view.balance, 3000.0);
        assert_eq!(view.movements.last().map(|row| row.value), Some(-840.0));

        let receiver = registry.find_by_username("jd").unwrap();
        assert_eq!(receiver.movements.last(), Some(&840.0));
    }

    #[test]
    fn test_transfer_rejects_unparsable_amount() {
        let (mut registry, mut session) = demo();
        session.login(&registry, "js", "1111").unwrap();

        for text in ["", "ten", "inf", "NaN"] {
            assert!(matches!(
                session.transfer(&mut registry, "jd", text),
                Err(BankError::InvalidInput { field: "amount", .. })
            ));
        }
        assert_eq!(registry.find_by_username("js").unwrap().movements.len(), 8);
    }

    #[test]
    fn test_loan_refreshes_view() {
        let (mut registry, mut session) = demo();
        session.login(&registry, "stw", "3333").unwrap();

        let view = session.request_loan(&mut registry, "600").unwrap();
        assert_eq!(view.movements.len(), 9);
        assert_eq!(view.movements[8].value, 600.0);

        assert_eq!(
            session.request_loan(&mut registry, "2000"),
            Err(BankError::LoanNotCovered { required: 600.0 })
        );
    }

    #[test]
    fn test_toggle_sort_does_not_touch_data() {
        let (registry, mut session) = demo();
        session.login(&registry, "ss", "4444").unwrap();

        let sorted = session.toggle_sort(&registry).unwrap();
        let values: Vec<f64> = sorted.movements.iter().map(|row| row.value).collect();
        assert_eq!(values, vec![50.0, 90.0, 430.0, 700.0, 1000.0]);
        assert!(sorted.sorted);

        let unsorted = session.toggle_sort(&registry).unwrap();
        let values: Vec<f64> = unsorted.movements.iter().map(|row| row.value).collect();
        assert_eq!(values, vec![430.0, 1000.0, 700.0, 50.0, 90.0]);
        assert_eq!(
            registry.find_by_username("ss").unwrap().movements,
            vec![430.0, 1000.0, 700.0, 50.0, 90.0]
        );
    }

    #[test]
    fn test_login_resets_sort_order() {
        let (registry, mut session) = demo();
        session.login(&registry, "ss", "4444").unwrap();
        session.toggle_sort(&registry).unwrap();
        assert!(session.is_sorted());

        let view = session.login(&registry, "se", "5555").unwrap();
        assert!(!view.sorted);
    }

    #[test]
    fn test_close_account_ends_session() {
        let (mut registry, mut session) = demo();
        session.login(&registry, "se", "5555").unwrap();

        assert_eq!(
            session.close_account(&mut registry, "js", "5555").map(|acc| acc.id),
            Err(BankError::CredentialMismatch)
        );
        assert!(session.is_logged_in(&registry));

        let removed = session.close_account(&mut registry, "se", "5555").unwrap();
        assert_eq!(removed.owner, "Samuel Egbeola");
        assert_eq!(registry.len(), 4);
        assert!(!session.is_logged_in(&registry));
        assert_eq!(session.login(&registry, "se", "5555"), Err(BankError::UnknownUser("se".to_string())));
    }
}
