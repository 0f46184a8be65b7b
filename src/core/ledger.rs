//! Figures derived from an account's movement history.
use crate::core::account::Account;
use serde::Serialize;

/// Totals shown under an account's statement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Summary {
    /// Sum of deposits.
    pub income: f64,
    /// Absolute sum of withdrawals.
    pub outgoing: f64,
    /// Interest earned on every deposit at the account's rate.
    pub interest: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    pub fn of(amount: f64) -> Self {
        if amount > 0.0 {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

/// One line of the movements list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovementRow {
    /// 1-based position in the displayed order.
    pub index: usize,
    pub kind: MovementKind,
    pub value: f64,
}

/// Sum of all movements; an account without movements has a balance of zero.
pub fn balance(account: &Account) -> f64 {
    account.movements.iter().fold(0.0, |total, mov| total + mov)
}

pub fn summary(account: &Account) -> Summary {
    let deposits = || account.movements.iter().copied().filter(|&mov| mov > 0.0);

    let income = deposits().fold(0.0, |total, mov| total + mov);
    let outgoing = account
        .movements
        .iter()
        .copied()
        .filter(|&mov| mov < 0.0)
        .fold(0.0, |total, mov| total + mov);
    let interest = deposits()
        .map(|deposit| deposit * account.interest_rate / 100.0)
        .fold(0.0, |total, earned| total + earned);

    Summary {
        income,
        outgoing: outgoing.abs(),
        interest,
    }
}

/// Movements in chronological order, or an ascending copy when `sort_ascending`.
pub fn ordered_movements(account: &Account, sort_ascending: bool) -> Vec<f64> {
    let mut movements = account.movements.clone();
    if sort_ascending {
        movements.sort_by(|a, b| a.total_cmp(b));
    }
    movements
}

pub fn movement_rows(account: &Account, sort_ascending: bool) -> Vec<MovementRow> {
    ordered_movements(account, sort_ascending)
        .into_iter()
        .enumerate()
        .map(|(i, value)| MovementRow {
            index: i + 1,
            kind: MovementKind::of(value),
            value,
        })
        .collect()
}
