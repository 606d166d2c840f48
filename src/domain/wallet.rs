use rust_decimal::Decimal;
use serde::Serialize;

/// The float balance belonging to one agent.
///
/// `balance == total_earned - total_spent` holds after every committed
/// operation, and `balance` never goes negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wallet {
    pub balance: Decimal,       // funds available for member registrations
    pub total_earned: Decimal,  // lifetime sum of credits
    pub total_spent: Decimal,   // lifetime sum of debits
}

impl Wallet {
    pub fn new() -> Self {
        Self {
            balance: Decimal::ZERO,
            total_earned: Decimal::ZERO,
            total_spent: Decimal::ZERO,
        }
    }

    pub fn is_balanced(&self) -> bool {
        self.balance == self.total_earned - self.total_spent
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}
