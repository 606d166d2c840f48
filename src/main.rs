use std::{env, fs::File, path::Path};

use tracing::info;

use wallet_ledger::dlq::StdErrDlq;
use wallet_ledger::ingestion::CsvReader;
use wallet_ledger::ledger::Ledger;
use wallet_ledger::replay::Replay;
use wallet_ledger::store::InMemoryStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The statement goes to stdout; keep diagnostics out of it.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let file_path = env::args()
        .nth(1)
        .ok_or("usage: wallet_ledger <commands.csv>")?;
    let file = File::open(Path::new(&file_path))?;

    let ingestion = CsvReader::new(file);
    let ledger = Ledger::new(InMemoryStore::new());
    let dlq = StdErrDlq::new();

    let mut replay = Replay::new(ingestion, ledger, &dlq);
    replay.process().await?;
    replay.flush();

    info!(rejected = dlq.rejected(), "replay finished");
    Ok(())
}
