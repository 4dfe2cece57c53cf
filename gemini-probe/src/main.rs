use std::io::{self, Write};
use std::process::ExitCode;

use gemini_probe::probe::{self, ProbeConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut stdout = io::stdout().lock();
    let status = probe::execute(
        ProbeConfig::from_env(),
        ProbeConfig::build_client,
        &mut stdout,
    )
    .await;
    let _ = stdout.flush();
    status.into()
}
