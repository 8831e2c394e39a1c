use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use mcvers::catalog::probe::UrlProber;
use mcvers::catalog::resolver::Resolver;
use mcvers::catalog::sources::{MojangSource, VexyhostSource};
use mcvers::catalog::store::FileStore;
use mcvers::config::{self, CatalogConfig};

#[derive(Parser)]
#[command(name = "mcvers")]
#[command(version, about = "Minecraft server version catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Force a fresh fetch, bypassing the cache validity check
    Refresh,
    /// Print the cached-or-fetched catalog
    List,
    /// Print the record for a single version
    Find { id: String },
    /// Print the newest versions
    Latest {
        #[arg(default_value_t = 5)]
        count: usize,
    },
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout stays pure JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mcvers=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command.unwrap_or(Command::List)))
}

fn build_resolver(config: &CatalogConfig) -> Resolver {
    Resolver::new(
        Box::new(FileStore::new(
            config::cache_path(),
            Duration::from_secs(config.cache.max_age_secs),
        )),
        vec![
            Box::new(MojangSource::with_version_cap(
                config.sources.mojang.version_cap,
            )),
            Box::new(VexyhostSource::with_version_cap(
                config.sources.vexyhost.version_cap,
            )),
        ],
    )
}

async fn run(command: Command) -> anyhow::Result<()> {
    let config = CatalogConfig::load(&config::config_path());
    let resolver = build_resolver(&config);

    match command {
        Command::Refresh => print_json(&resolver.resolve(true).await)?,
        Command::List => print_json(&resolver.resolve(false).await)?,
        Command::Latest { count } => {
            let catalog = resolver.resolve(false).await;
            print_json(&serde_json::json!({ "versions": catalog.latest(count) }))?;
        }
        Command::Find { id } => {
            let catalog = resolver.resolve(false).await;
            if let Some(record) = catalog.find(&id) {
                print_json(record)?;
            } else if let Some(url) = UrlProber::new().probe(&id).await {
                print_json(&UrlProber::searched_record(&id, url))?;
            } else {
                print_json(&serde_json::json!({ "error": "Version not found" }))?;
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
