use serde::Serialize;

use crate::domain::Error;

pub type AgentId = u64;
pub type ActorId = u64;

/// Lifecycle state of an agent. Agents are onboarded as `Pending`, put to
/// work as `Active`, and suspended as `Blocked`; they are never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgentStatus {
    Pending,
    Active,
    Blocked,
}

impl AgentStatus {
    fn can_become(self, next: AgentStatus) -> bool {
        use AgentStatus::*;
        matches!((self, next), (Pending, Active) | (Active, Blocked) | (Blocked, Active))
    }
}

impl core::fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AgentStatus::Pending => write!(f, "PENDING"),
            AgentStatus::Active => write!(f, "ACTIVE"),
            AgentStatus::Blocked => write!(f, "BLOCKED"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub id: AgentId,
    pub status: AgentStatus,
}

impl Agent {
    pub fn new(id: AgentId) -> Self {
        Self {
            id,
            status: AgentStatus::Pending,
        }
    }

    /// Status changes never touch the agent's wallet.
    pub fn transition_to(&mut self, next: AgentStatus) -> Result<(), Error> {
        if !self.status.can_become(next) {
            return Err(Error::InvalidTransition {
                agent_id: self.id,
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
