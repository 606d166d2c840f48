use crate::domain::agent::{ActorId, AgentId, AgentStatus};
use crate::domain::amount::Amount;

/// One replayable wallet operation, as ingested from an operator CSV.
#[derive(Debug, Clone)]
pub enum Command {
    Open {
        agent_id: AgentId,
    },
    Credit {
        agent_id: AgentId,
        amount: Amount,
        description: String,
        reference_type: String,
        performed_by: Option<ActorId>,
    },
    Debit {
        agent_id: AgentId,
        amount: Amount,
        description: String,
        reference_type: String,
        reference_id: Option<u64>,
        performed_by: Option<ActorId>,
    },
    SetStatus {
        agent_id: AgentId,
        status: AgentStatus,
    },
}

impl core::fmt::Display for Command {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Command::Open { agent_id } => write!(f, "open agent={agent_id}"),
            Command::Credit {
                agent_id, amount, ..
            } => write!(f, "credit agent={agent_id} amount={amount}"),
            Command::Debit {
                agent_id,
                amount,
                reference_type,
                ..
            } => write!(f, "debit agent={agent_id} amount={amount} ref={reference_type}"),
            Command::SetStatus { agent_id, status } => {
                write!(f, "set-status agent={agent_id} status={status}")
            }
        }
    }
}
