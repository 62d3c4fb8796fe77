use std::{env, fs::File};

use account_models::{
    dlq::LogDLQ, engine::Engine, ingestion::CsvReader, report::StdOutReport,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    // without a script, replay the built-in usage example as a self-check
    match env::args().nth(1) {
        Some(path) => {
            tracing::info!(script = %path, "replaying script");
            let file = File::open(&path)?;
            run(CsvReader::new(file)).await
        }
        None => {
            tracing::info!("replaying usage example");
            run(CsvReader::usage_script()).await
        }
    }
}

async fn run<R>(ingestion: CsvReader<R>) -> Result<(), Box<dyn std::error::Error>>
where
    R: std::io::Read + Send + 'static,
{
    let mut engine = Engine::new(ingestion, StdOutReport::new(), LogDLQ::default());
    engine.process().await?;
    engine.flush();

    Ok(())
}
