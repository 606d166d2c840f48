use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{
    ActorId, Agent, AgentId, AgentStatus, Amount, Direction, Error, NewTransaction, Transaction,
    Wallet,
    traits::{LedgerStore, PageRequest},
};

/// How many times a transient store conflict is absorbed before it is
/// surfaced to the caller.
const MAX_CONFLICT_RETRIES: usize = 3;

/// The two mutating entry points over agent wallets.
///
/// Each `credit`/`debit` runs its read, balance computation, wallet write
/// and log append as one atomic unit against the store; a rejected debit
/// leaves balance, totals and log untouched. Methods take `&self` and are
/// safe to call from concurrent request handlers.
#[derive(Debug)]
pub struct Ledger<S>
where
    S: LedgerStore,
{
    store: S,
}

impl<S> Ledger<S>
where
    S: LedgerStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Onboards an agent: agent record plus zero-balance wallet, atomically.
    pub fn open_wallet(&self, agent_id: AgentId) -> Result<Wallet, Error> {
        let wallet = self.store.create_wallet(agent_id)?;
        debug!(agent_id, "wallet opened");
        Ok(wallet)
    }

    pub fn balance(&self, agent_id: AgentId) -> Result<Wallet, Error> {
        self.store.balance(agent_id)
    }

    pub fn agent(&self, agent_id: AgentId) -> Result<Agent, Error> {
        self.store.agent(agent_id)
    }

    /// Status changes never touch the wallet. A blocked agent keeps its
    /// balance, and credit/debit stay callable at this layer; gating them
    /// is the authorization layer's job.
    pub fn set_status(&self, agent_id: AgentId, status: AgentStatus) -> Result<Agent, Error> {
        let agent = self.store.set_status(agent_id, status)?;
        debug!(agent_id, status = %agent.status, "agent status changed");
        Ok(agent)
    }

    pub fn credit(
        &self,
        agent_id: AgentId,
        amount: Amount,
        description: &str,
        reference_type: &str,
        performed_by: Option<ActorId>,
    ) -> Result<Decimal, Error> {
        let tx = self.commit(agent_id, &mut |wallet: &Wallet| {
            let updated = Wallet {
                balance: wallet.balance + amount.get(),
                total_earned: wallet.total_earned + amount.get(),
                total_spent: wallet.total_spent,
            };
            Ok((
                updated,
                NewTransaction {
                    agent_id,
                    direction: Direction::Credit,
                    amount: amount.get(),
                    description: description.to_owned(),
                    reference_type: reference_type.to_owned(),
                    reference_id: None,
                    balance_before: wallet.balance,
                    balance_after: updated.balance,
                    performed_by,
                },
            ))
        })?;
        debug!(agent_id, amount = %amount, balance = %tx.balance_after, "credit committed");
        Ok(tx.balance_after)
    }

    pub fn debit(
        &self,
        agent_id: AgentId,
        amount: Amount,
        description: &str,
        reference_type: &str,
        reference_id: Option<u64>,
        performed_by: Option<ActorId>,
    ) -> Result<Decimal, Error> {
        let tx = self.commit(agent_id, &mut |wallet: &Wallet| {
            if wallet.balance < amount.get() {
                return Err(Error::InsufficientFunds {
                    agent_id,
                    balance: wallet.balance,
                    requested: amount.get(),
                });
            }
            let updated = Wallet {
                balance: wallet.balance - amount.get(),
                total_earned: wallet.total_earned,
                total_spent: wallet.total_spent + amount.get(),
            };
            Ok((
                updated,
                NewTransaction {
                    agent_id,
                    direction: Direction::Debit,
                    amount: amount.get(),
                    description: description.to_owned(),
                    reference_type: reference_type.to_owned(),
                    reference_id,
                    balance_before: wallet.balance,
                    balance_after: updated.balance,
                    performed_by,
                },
            ))
        })?;
        debug!(agent_id, amount = %amount, balance = %tx.balance_after, "debit committed");
        Ok(tx.balance_after)
    }

    pub fn statement(
        &self,
        agent_id: AgentId,
        page: PageRequest,
    ) -> Result<Vec<Transaction>, Error> {
        self.store.list_by_agent(agent_id, page)
    }

    pub fn wallets(&self) -> Vec<(Agent, Wallet)> {
        self.store.wallets()
    }

    fn commit(
        &self,
        agent_id: AgentId,
        apply: &mut dyn FnMut(&Wallet) -> Result<(Wallet, NewTransaction), Error>,
    ) -> Result<Transaction, Error> {
        let mut attempt = 0;
        loop {
            match self.store.update(agent_id, &mut *apply) {
                Err(e) if e.is_transient() && attempt < MAX_CONFLICT_RETRIES => {
                    attempt += 1;
                    warn!(agent_id, attempt, "wallet update conflicted, retrying");
                }
                other => return other,
            }
        }
    }
}
