//! Float-wallet ledger for an agent network.
//!
//! One mutable balance record per agent, an append-only transaction log,
//! and two mutating operations (`credit`, `debit`) that commit the wallet
//! write and the log append as a single atomic unit per agent.

pub mod dlq;
pub mod domain;
pub mod ingestion;
pub mod ledger;
pub mod replay;
pub mod store;
