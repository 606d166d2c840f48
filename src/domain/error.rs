use rust_decimal::Decimal;

use crate::domain::agent::{AgentId, AgentStatus};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ingestion failed with: {0}")]
    Ingestion(String),

    #[error("no wallet exists for agent {0}")]
    WalletNotFound(AgentId),

    #[error("a wallet already exists for agent {0}")]
    WalletExists(AgentId),

    #[error("insufficient funds for agent {agent_id}: balance is {balance}, tried to debit {requested}")]
    InsufficientFunds {
        agent_id: AgentId,
        balance: Decimal,
        requested: Decimal,
    },

    #[error("amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    #[error("wallet for agent {0} was modified concurrently")]
    Conflict(AgentId),

    #[error("agent {agent_id} cannot move from {from} to {to}")]
    InvalidTransition {
        agent_id: AgentId,
        from: AgentStatus,
        to: AgentStatus,
    },
}

impl Error {
    /// Transient conflicts are absorbed by a bounded retry inside the
    /// ledger; everything else surfaces to the caller as-is.
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Conflict(_))
    }
}
