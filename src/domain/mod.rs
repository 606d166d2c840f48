pub mod agent;
pub mod amount;
pub mod command;
pub mod error;
pub mod traits;
pub mod transaction;
pub mod wallet;

pub use agent::{ActorId, Agent, AgentId, AgentStatus};
pub use amount::Amount;
pub use command::Command;
pub use error::Error;
pub use traits::{CommandStream, DeadLetterQueue, LedgerStore, PageRequest};
pub use transaction::{Direction, NewTransaction, Transaction};
pub use wallet::Wallet;
