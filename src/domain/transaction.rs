use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::agent::{ActorId, AgentId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Credit,
    Debit,
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Credit => write!(f, "credit"),
            Direction::Debit => write!(f, "debit"),
        }
    }
}

/// One committed ledger entry. Never mutated or deleted once written.
///
/// `seq` is a store-assigned monotonic tiebreaker; wall-clock timestamps may
/// collide, the sequence never does.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub seq: u64,
    pub agent_id: AgentId,
    pub direction: Direction,
    pub amount: Decimal,
    pub description: String,
    pub reference_type: String,
    pub reference_id: Option<u64>,
    pub balance_before: Decimal,
    pub balance_after: Decimal,
    pub performed_by: Option<ActorId>,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields of a ledger entry.
///
/// Balances come from the ledger operation, never from the log; the store
/// stamps `seq` and `created_at` at append time.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub agent_id: AgentId,
    pub direction: Direction,
    pub amount: Decimal,
    pub description: String,
    pub reference_type: String,
    pub reference_id: Option<u64>,
    pub balance_before: Decimal,
    pub balance_after: Decimal,
    pub performed_by: Option<ActorId>,
}

impl NewTransaction {
    pub fn into_record(self, seq: u64, created_at: DateTime<Utc>) -> Transaction {
        Transaction {
            seq,
            agent_id: self.agent_id,
            direction: self.direction,
            amount: self.amount,
            description: self.description,
            reference_type: self.reference_type,
            reference_id: self.reference_id,
            balance_before: self.balance_before,
            balance_after: self.balance_after,
            performed_by: self.performed_by,
            created_at,
        }
    }
}
