use futures::Stream;

use crate::domain::{
    Agent, AgentId, AgentStatus, Command, Error, NewTransaction, Transaction, Wallet,
};

pub trait CommandStream {
    type CmdStream: Stream<Item = Result<Command, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::CmdStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

impl<D: DeadLetterQueue> DeadLetterQueue for &D {
    fn report(&self, error: &Error) {
        D::report(self, error);
    }
}

/// Page of a per-agent statement, zero-based.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self { page, page_size }
    }

    pub fn offset(&self) -> usize {
        self.page * self.page_size
    }
}

/// Storage seam for wallet rows and their transaction history.
///
/// `update` is the concurrency primitive: implementations run the closure
/// while no other mutation on the same agent can interleave, and commit the
/// returned wallet row together with the appended entry, or commit nothing.
/// Optimistic implementations may fail with [`Error::Conflict`] instead;
/// the ledger retries those. Mutations on different agents must not block
/// each other.
pub trait LedgerStore: Send + Sync {
    /// Creates the agent record and its zero wallet as one unit.
    /// Fails with [`Error::WalletExists`] rather than overwrite.
    fn create_wallet(&self, agent_id: AgentId) -> Result<Wallet, Error>;

    fn balance(&self, agent_id: AgentId) -> Result<Wallet, Error>;

    fn agent(&self, agent_id: AgentId) -> Result<Agent, Error>;

    /// Applies the status machine. Leaves the wallet and the log untouched.
    fn set_status(&self, agent_id: AgentId, status: AgentStatus) -> Result<Agent, Error>;

    fn update(
        &self,
        agent_id: AgentId,
        apply: &mut dyn FnMut(&Wallet) -> Result<(Wallet, NewTransaction), Error>,
    ) -> Result<Transaction, Error>;

    /// Statement page, newest first: creation time descending with the
    /// append sequence as tiebreaker.
    fn list_by_agent(&self, agent_id: AgentId, page: PageRequest)
    -> Result<Vec<Transaction>, Error>;

    /// Point-in-time snapshot of every wallet, for statement output.
    fn wallets(&self) -> Vec<(Agent, Wallet)>;
}
