use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use parking_lot::{Mutex, RwLock};

use crate::domain::{
    Agent, AgentId, AgentStatus, Error, NewTransaction, Transaction, Wallet,
    traits::{LedgerStore, PageRequest},
};

#[derive(Debug)]
struct Record {
    agent: Agent,
    wallet: Wallet,
    log: Vec<Transaction>,
}

/// Process-local [`LedgerStore`] keyed by agent.
///
/// The outer map lock is held only to look up or insert a record handle.
/// Each record carries its own mutex, held for the whole
/// read-modify-write-append, so mutations on the same agent serialize while
/// different agents never contend.
#[derive(Default, Debug)]
pub struct InMemoryStore {
    records: RwLock<HashMap<AgentId, Arc<Mutex<Record>>>>,
    seq: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, agent_id: AgentId) -> Result<Arc<Mutex<Record>>, Error> {
        self.records
            .read()
            .get(&agent_id)
            .cloned()
            .ok_or(Error::WalletNotFound(agent_id))
    }
}

impl LedgerStore for InMemoryStore {
    fn create_wallet(&self, agent_id: AgentId) -> Result<Wallet, Error> {
        match self.records.write().entry(agent_id) {
            Entry::Occupied(_) => Err(Error::WalletExists(agent_id)),
            Entry::Vacant(e) => {
                let wallet = Wallet::new();
                e.insert(Arc::new(Mutex::new(Record {
                    agent: Agent::new(agent_id),
                    wallet,
                    log: Vec::new(),
                })));
                Ok(wallet)
            }
        }
    }

    fn balance(&self, agent_id: AgentId) -> Result<Wallet, Error> {
        Ok(self.record(agent_id)?.lock().wallet)
    }

    fn agent(&self, agent_id: AgentId) -> Result<Agent, Error> {
        Ok(self.record(agent_id)?.lock().agent)
    }

    fn set_status(&self, agent_id: AgentId, status: AgentStatus) -> Result<Agent, Error> {
        let record = self.record(agent_id)?;
        let mut record = record.lock();
        record.agent.transition_to(status)?;
        Ok(record.agent)
    }

    fn update(
        &self,
        agent_id: AgentId,
        apply: &mut dyn FnMut(&Wallet) -> Result<(Wallet, NewTransaction), Error>,
    ) -> Result<Transaction, Error> {
        let record = self.record(agent_id)?;
        let mut record = record.lock();
        let (wallet, entry) = apply(&record.wallet)?;
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let tx = entry.into_record(seq, Utc::now());
        record.wallet = wallet;
        record.log.push(tx.clone());
        Ok(tx)
    }

    fn list_by_agent(
        &self,
        agent_id: AgentId,
        page: PageRequest,
    ) -> Result<Vec<Transaction>, Error> {
        let record = self.record(agent_id)?;
        let record = record.lock();
        // The log is in commit order, so a reverse scan is exactly
        // creation-time descending with seq as tiebreaker.
        Ok(record
            .log
            .iter()
            .rev()
            .skip(page.offset())
            .take(page.page_size)
            .cloned()
            .collect())
    }

    fn wallets(&self) -> Vec<(Agent, Wallet)> {
        self.records
            .read()
            .values()
            .map(|record| {
                let record = record.lock();
                (record.agent, record.wallet)
            })
            .collect()
    }
}
