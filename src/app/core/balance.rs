use crate::app::types::FriendId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A friend and the running balance between them and the user.
///
/// Negative balances mean the user owes the friend, positive balances mean
/// the friend owes the user and zero means the two are even.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Friend {
    pub id: FriendId,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub balance: i64,
}

/// Derived, display-ready view of a balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BalanceStatus {
    /// The user owes the friend this (positive) amount.
    YouOwe(u64),
    /// The friend owes the user this (positive) amount.
    OwesYou(u64),
    Even,
}

impl BalanceStatus {
    pub fn of(balance: i64) -> Self {
        match balance {
            b if b < 0 => BalanceStatus::YouOwe(b.unsigned_abs()),
            b if b > 0 => BalanceStatus::OwesYou(b.unsigned_abs()),
            _ => BalanceStatus::Even,
        }
    }
}

impl Friend {
    /// New friend with a settled balance.
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Friend {
            id,
            name: name.into(),
            image: image.into(),
            balance: 0,
        }
    }

    pub fn with_balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    pub fn status(&self) -> BalanceStatus {
        BalanceStatus::of(self.balance)
    }

    /// Human readable status line, recomputed from the current balance.
    pub fn status_line(&self) -> String {
        StatusLine(self).to_string()
    }
}

struct StatusLine<'a>(&'a Friend);

impl fmt::Display for StatusLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let friend = self.0;
        match friend.status() {
            BalanceStatus::YouOwe(amount) => write!(f, "You owe {} {}$", friend.name, amount),
            BalanceStatus::OwesYou(amount) => write!(f, "{} owes you {}$", friend.name, amount),
            BalanceStatus::Even => write!(f, "You are even with {}", friend.name),
        }
    }
}
