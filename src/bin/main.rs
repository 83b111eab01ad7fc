use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use simple_bank::{AccountId, Amount, Ledger, Request, Teller};

/// The only account that exists when the counter opens
const SEED_ACCOUNT: &str = "12345678";
const SEED_BALANCE: f64 = 200000.0;

/// A cli counter in front of the in-memory ledger
#[derive(Debug, Parser)]
#[clap(version)]
struct Args {
    /// The path to the request CSV file, read from stdin if omitted
    script: Option<std::path::PathBuf>,
    /// Write a CSV summary of all accounts after the script ran
    #[clap(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut ledger = Ledger::new();
    ledger.create_account(&AccountId::from(SEED_ACCOUNT), Amount::new(SEED_BALANCE));

    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All);
    let reader: Box<dyn std::io::Read> = match &args.script {
        Some(path) => Box::new(
            std::fs::File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?,
        ),
        None => Box::new(std::io::stdin()),
    };
    let mut reader = builder.from_reader(reader);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut teller = Teller::new(&mut ledger);

    for (line, request) in reader.deserialize::<Request>().enumerate() {
        // malformed and rejected requests are skipped
        let request = match request {
            Ok(request) => request,
            Err(err) => {
                tracing::warn!(line = line + 2, %err, "skipping malformed request");
                continue;
            }
        };
        match teller.perform(&request) {
            Ok(outcome) => writeln!(out, "{outcome}")?,
            Err(err) => tracing::warn!(line = line + 2, %err, "request rejected"),
        }
    }

    if args.summary {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(out);

        for account in ledger.accounts() {
            writer.serialize(account)?;
        }
        writer.flush()?;
    }

    Ok(())
}

/// Logs go to stderr, stdout is reserved for outcomes and the summary
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
