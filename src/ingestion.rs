use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::traits::CommandStream;
use crate::domain::{AgentStatus, Amount, Command, Error};

/// Streams wallet commands out of an operator-supplied CSV file.
pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    op: String,
    agent: u64,
    amount: Option<Amount>,
    description: Option<String>,
    reference: Option<String>,
    ref_id: Option<u64>,
    actor: Option<u64>,
}

impl TryFrom<CsvRow> for Command {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let agent_id = row.agent;
        let description = row.description.unwrap_or_default();

        match (row.op.to_ascii_lowercase().as_str(), row.amount) {
            ("open", None) => Ok(Command::Open { agent_id }),
            ("credit", Some(amount)) => Ok(Command::Credit {
                agent_id,
                amount,
                description,
                reference_type: row.reference.unwrap_or_else(|| "admin_topup".to_owned()),
                performed_by: row.actor,
            }),
            ("debit", Some(amount)) => Ok(Command::Debit {
                agent_id,
                amount,
                description,
                reference_type: row
                    .reference
                    .unwrap_or_else(|| "user_registration".to_owned()),
                reference_id: row.ref_id,
                performed_by: row.actor,
            }),
            ("activate", None) => Ok(Command::SetStatus {
                agent_id,
                status: AgentStatus::Active,
            }),
            ("block", None) => Ok(Command::SetStatus {
                agent_id,
                status: AgentStatus::Blocked,
            }),
            (other, _) => Err(Error::Ingestion(format!("invalid wallet op: {other}"))),
        }
    }
}

impl<R: Read + Send + 'static> CommandStream for CsvReader<R> {
    type CmdStream = Pin<Box<dyn Stream<Item = Result<Command, Error>> + Send>>;

    fn stream(&mut self) -> Self::CmdStream {
        // Take ownership of the reader so the iterator we build owns all data
        // and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<Command, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Command::try_from(row),
                Err(e) => Err(Error::Ingestion(format!("CSV deserialization error: {e}"))),
            });

        Box::pin(stream::iter(iter))
    }
}
