use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use todoapp::command::spawn_input_reader;
use todoapp::{Cli, Runtime, UreqTransport};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    let output = cli.output();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    let result = rt.block_on(async move {
        let runtime = Runtime::new(&config, UreqTransport::new(), output);
        spawn_input_reader(BufReader::new(tokio::io::stdin()), runtime.sender());
        runtime.run().await
    });

    // The stdin reader sits on a blocking read; don't wait for it.
    rt.shutdown_background();
    result.context("failed to write rendered page")?;
    Ok(())
}
