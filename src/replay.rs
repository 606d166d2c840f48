use futures::StreamExt;
use tracing::debug;

use crate::domain::traits::{CommandStream, DeadLetterQueue, LedgerStore};
use crate::domain::{Command, Error};
use crate::ledger::Ledger;

/// Drains a command stream into the ledger.
///
/// Rejected commands (insufficient funds, duplicate onboarding, bad status
/// transitions, malformed rows) go to the dead letter queue; the run keeps
/// going.
#[derive(Debug)]
pub struct Replay<I, S, D>
where
    I: CommandStream,
    S: LedgerStore,
    D: DeadLetterQueue,
{
    ingestion: I,
    ledger: Ledger<S>,
    dlq: D,
}

impl<I, S, D> Replay<I, S, D>
where
    I: CommandStream,
    S: LedgerStore,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, ledger: Ledger<S>, dlq: D) -> Self {
        Self {
            ingestion,
            ledger,
            dlq,
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut commands = self.ingestion.stream();

        while let Some(command) = commands.next().await {
            match command {
                Ok(command) => match self.apply_command(command) {
                    Ok(()) => {}
                    Err(e) => self.dlq.report(&e),
                },
                Err(e) => self.dlq.report(&e),
            }
        }

        Ok(())
    }

    fn apply_command(&self, command: Command) -> Result<(), Error> {
        debug!(%command, "applying");

        match command {
            Command::Open { agent_id } => {
                self.ledger.open_wallet(agent_id)?;
            }
            Command::Credit {
                agent_id,
                amount,
                description,
                reference_type,
                performed_by,
            } => {
                self.ledger
                    .credit(agent_id, amount, &description, &reference_type, performed_by)?;
            }
            Command::Debit {
                agent_id,
                amount,
                description,
                reference_type,
                reference_id,
                performed_by,
            } => {
                self.ledger.debit(
                    agent_id,
                    amount,
                    &description,
                    &reference_type,
                    reference_id,
                    performed_by,
                )?;
            }
            Command::SetStatus { agent_id, status } => {
                self.ledger.set_status(agent_id, status)?;
            }
        }
        Ok(())
    }

    /// Final statement, one row per wallet, sorted by agent id so the
    /// output is stable.
    pub fn flush(&self) {
        let mut rows = self.ledger.wallets();
        rows.sort_by_key(|(agent, _)| agent.id);

        println!("agent,status,balance,total_earned,total_spent");
        for (agent, wallet) in rows {
            println!(
                "{},{},{:.4},{:.4},{:.4}",
                agent.id, agent.status, wallet.balance, wallet.total_earned, wallet.total_spent
            );
        }
    }
}
