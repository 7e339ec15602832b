use crate::common::money::Money;

/// Outcome of a deposit attempt. The rejected case never mutates the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositOutcome {
    Accepted { balance: Money },
    InvalidAmount,
}

/// Outcome of a withdrawal attempt. A single rejected case covers both
/// non-positive amounts and amounts above the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawOutcome {
    Accepted { balance: Money },
    Rejected,
}

#[derive(Debug, Clone)]
pub struct Account {
    /// Registration name, unique within the ledger, immutable afterwards.
    pub name: String,
    /// Current balance, never negative.
    pub balance: Money,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_balance(name, Money::zero())
    }

    pub fn with_balance(name: impl Into<String>, balance: Money) -> Self {
        Self {
            name: name.into(),
            balance,
        }
    }

    pub fn deposit(&mut self, amount: Money) -> DepositOutcome {
        if amount <= Money::zero() {
            return DepositOutcome::InvalidAmount;
        }
        self.balance += amount;
        DepositOutcome::Accepted {
            balance: self.balance,
        }
    }

    pub fn withdraw(&mut self, amount: Money) -> WithdrawOutcome {
        if amount <= Money::zero() || amount > self.balance {
            return WithdrawOutcome::Rejected;
        }
        self.balance -= amount;
        WithdrawOutcome::Accepted {
            balance: self.balance,
        }
    }

    pub fn balance_report(&self) -> String {
        format!("Account balance for {}: ${}", self.name, self.balance)
    }
}
