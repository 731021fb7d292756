use crate::app::types::Payer;
use thiserror::Error;

/// In-progress split of a single bill with the selected friend.
///
/// Empty fields are `None`; `Some(0)` is a real amount. `user_paid` never
/// exceeds `bill` (an empty bill counts as zero for that rule).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitDraft {
    bill: Option<i64>,
    user_paid: Option<i64>,
    pub payer: Payer,
}

impl SplitDraft {
    pub fn new() -> Self {
        SplitDraft::default()
    }

    pub fn bill(&self) -> Option<i64> {
        self.bill
    }

    pub fn user_paid(&self) -> Option<i64> {
        self.user_paid
    }

    /// Set the bill total. Negative amounts are ignored. A stored user share
    /// larger than the new total is pulled down to it.
    pub fn set_bill(&mut self, bill: Option<i64>) {
        if bill.is_some_and(|b| b < 0) {
            return;
        }
        self.bill = bill;
        let cap = self.cap();
        if let Some(paid) = self.user_paid.as_mut() {
            if *paid > cap {
                *paid = cap;
            }
        }
    }

    /// Set the user's share. Returns `false` (keeping the previous value)
    /// when the amount is negative or larger than the bill.
    pub fn set_user_paid(&mut self, paid: Option<i64>) -> bool {
        match paid {
            Some(p) if p < 0 || p > self.cap() => false,
            _ => {
                self.user_paid = paid;
                true
            }
        }
    }

    /// The friend's share: what is left of a non-zero bill after the user's
    /// share.
    pub fn friend_paid(&self) -> Option<i64> {
        match self.bill {
            Some(bill) if bill != 0 => Some(bill - self.user_paid.unwrap_or(0)),
            _ => None,
        }
    }

    /// Balance change to apply to the friend, or `None` while the draft is
    /// not ready to submit.
    pub fn settlement_delta(&self) -> Option<i64> {
        let paid = self.user_paid?;
        let friend_paid = self.friend_paid()?;
        Some(match self.payer {
            Payer::User => friend_paid,
            Payer::Friend => -paid,
        })
    }

    fn cap(&self) -> i64 {
        self.bill.unwrap_or(0)
    }
}

/// Text that is not a plain non-negative integer amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not an amount: {0:?}")]
pub struct InvalidAmount(pub String);

/// Parse the text of an amount field. Empty text is `None`.
pub fn parse_amount(text: &str) -> Result<Option<i64>, InvalidAmount> {
    if text.is_empty() {
        return Ok(None);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidAmount(text.to_string()));
    }
    text.parse::<i64>()
        .map(Some)
        .map_err(|_| InvalidAmount(text.to_string()))
}

/// Inverse of `parse_amount`, used to seed the text being edited.
pub fn amount_text(amount: Option<i64>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_default()
}
