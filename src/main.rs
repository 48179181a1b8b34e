use bookmark_client::cli::{self, Args};
use bookmark_client::{BookmarkClient, Config};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = args.apply_to(Config::from_env()?);
    config.log_startup();

    let client = BookmarkClient::from_config(&config)?;
    let output = cli::run(&client, args.command).await?;
    println!("{}", output);

    Ok(())
}
