//! Command line interface for the pass card ledger demo.

mod console;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::ConsoleRenderer;
use dotenv::dotenv;
use passcard_client::{ClientConfig, InProcessClient, LedgerClient};
use passcard_domain::AccountId;
use passcard_ledger::{Ledger, seed::toronto_museums};
use passcard_sync::{Renderer, SyncConfig, Synchronizer};
use prettytable::{Table, row};
use std::env;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "passcard")]
#[command(about = "Museum pass card ledger client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the seeded offer catalogue
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run the event-driven synchronization demo
    Demo,
}

fn client_config() -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Ok(endpoint) = env::var("PASSCARD_ENDPOINT") {
        config.endpoint = endpoint;
    }
    if let Ok(account) = env::var("PASSCARD_ACCOUNT") {
        config.account = Some(AccountId::new(account));
    }
    config
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let ledger = Arc::new(Ledger::with_offers(toronto_museums()));
    let client = Arc::new(InProcessClient::connect(Arc::clone(&ledger), &client_config()));

    match cli.command {
        Commands::List { json } => list(client.as_ref(), json).await,
        Commands::Demo => demo(ledger, client).await,
    }
}

async fn list(client: &InProcessClient, json: bool) -> Result<()> {
    let count = client.offer_count().await?;
    let mut offers = Vec::with_capacity(count as usize);
    for id in 1..=count {
        offers.push(client.offer(id).await?);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&offers)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["ID", "MUSEUM", "LOCATION", "HOURS", "EXPIRES", "LEFT"]);
    for offer in &offers {
        table.add_row(row![
            offer.id,
            offer.name,
            offer.location,
            offer.hours,
            offer.expiry,
            offer.remaining
        ]);
    }
    table.printstd();
    Ok(())
}

/// Replays the original user flow: acquire and relinquish a pass, then
/// watch another user drain the last pass of the smallest offer.
async fn demo(ledger: Arc<Ledger>, client: Arc<InProcessClient>) -> Result<()> {
    let renderer = Arc::new(ConsoleRenderer);
    let sync = Synchronizer::initialize(
        client,
        Arc::clone(&renderer) as Arc<dyn Renderer>,
        SyncConfig::default(),
    )
    .await?;

    // Give the event-driven refresh time to settle after each action.
    let settle = Duration::from_millis(400);

    println!("\n== acquiring a pass for the Royal Ontario Museum ==");
    sync.acquire_offer(1).await;
    tokio::time::sleep(settle).await;

    println!("\n== relinquishing it again ==");
    sync.relinquish_offer(1).await;
    tokio::time::sleep(settle).await;

    println!("\n== another visitor takes the last Textile Museum pass ==");
    ledger
        .acquire(4, &AccountId::new("0xother_visitor"))
        .await?;
    tokio::time::sleep(settle).await;

    println!("\n== trying to acquire the sold-out offer ==");
    sync.acquire_offer(4).await;
    tokio::time::sleep(settle).await;

    Ok(())
}
