use std::sync::Arc;

use simplebank::prelude::*;
use tracing::debug;

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for the snapshot
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    CliApp::new("simplebank").run(run_ledger).await
}

/// Parse and validate command-line arguments
fn parse_args() -> Result<String, AppError> {
    let mut args = std::env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(path), None) => Ok(path),
        _ => Err(AppError::InvalidArguments(
            "Usage: simplebank <operations.csv>".to_string(),
        )),
    }
}

/// Main application logic: process an operations file and write the account
/// snapshot to stdout
async fn run_ledger(
    mut stdout: tokio::io::BufWriter<tokio::io::Stdout>,
) -> Result<(), AppError> {
    let input_file = parse_args()?;
    let config = AppConfig::from_env();

    // Audit side channel; the drain task just traces the routed envelopes
    // here, a broker consumer would take its place in a deployment
    let audit = if config.audit.enabled {
        let (sink, mut receiver) = QueueSink::bounded(config.audit.queue_capacity);
        tokio::spawn(async move {
            while let Some(envelope) = receiver.recv().await {
                debug!(routing_key = %envelope.routing_key, "audit event: {}", envelope.payload);
            }
        });
        AuditLogger::with_sink(Arc::new(sink))
    } else {
        AuditLogger::disabled()
    };

    let accounts = Arc::new(ConcurrentAccountStore::<FixedPoint>::new());
    let transactions = Arc::new(ConcurrentTransactionStore::<FixedPoint>::new());
    let service = AccountService::new(Arc::clone(&accounts), transactions, audit);

    // Rejected operations are reported and skipped; the rest of the batch
    // still runs
    let stream = CsvOperationStream::from_file(&input_file).await?;
    let mut session = OperationSession::new(service, SkipErrors);
    session.process_stream(stream).await;

    // snapshot() flushes the writer
    write_snapshot(&accounts, &mut stdout).await?;

    Ok(())
}
