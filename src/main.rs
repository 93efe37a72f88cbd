//! opencall CLI
//!
//! Reads `name,url` records from a CSV file, fetches each URL, and asks a
//! chat-completion model whether the event is currently accepting
//! applications. One classification line per record, strictly in order.

use anyhow::{Context, Result};
use clap::Parser;
use opencall::{
    Classifier, ClassifyPipeline, HttpFetcher, OpenAiProvider, RecordSource, Reporter, Settings,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "opencall")]
#[command(about = "Check event pages for open application windows")]
#[command(version)]
struct Cli {
    /// CSV file with `name` and `url` columns
    #[arg(default_value = "urls.csv")]
    input: PathBuf,

    /// Chat-completion model to query
    #[arg(long, default_value = "gpt-4o-mini")]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dotenv::dotenv().context("failed to load .env file")?;
    let settings = Settings::from_env()?;

    let source = RecordSource::open(&cli.input)?;
    let mut reporter = Reporter::stdout(source.total_records());

    let provider = OpenAiProvider::new(settings.api_key, cli.model);
    let pipeline = ClassifyPipeline::new(HttpFetcher::new(), Classifier::new(provider));
    pipeline.run(source, &mut reporter).await
}
