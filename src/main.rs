//! Demo driver for the ledger engine.
//!
//! Seeds the in-memory stores from config and runs a short transfer
//! sequence through the service, logging every outcome. The real consumer
//! of this crate is an upstream request layer wiring its own stores into
//! [`LedgerService`].

use std::sync::Arc;

use tracing::{info, warn};

use ledger_engine::config::AppConfig;
use ledger_engine::money::{format_amount, parse_amount};
use ledger_engine::{
    AccountStore, InMemoryAccountStore, InMemoryTransferStore, LedgerService, logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "default".to_string());
    let config = AppConfig::load_or_default(&env);
    let _guard = logging::init_logging(&config);

    info!(git = env!("GIT_HASH"), env = %env, "ledger engine demo starting");

    let accounts = Arc::new(InMemoryAccountStore::new());
    for seed in &config.seed_accounts {
        let balance = parse_amount(&seed.balance)?;
        accounts.open(seed.id, balance);
        info!(account = seed.id, balance = %format_amount(balance), "account seeded");
    }

    let [alice, bob] = match config.seed_accounts.as_slice() {
        [a, b, ..] => [a.id, b.id],
        _ => anyhow::bail!("demo needs at least two seed accounts"),
    };

    let transfers = Arc::new(InMemoryTransferStore::new());
    let service = LedgerService::new(accounts.clone(), transfers);

    // A committed transfer
    let amount = parse_amount("100.00")?;
    let transfer = service.initiate_transfer(alice, bob, amount).await?;
    info!(%transfer, "initiated");

    // A rejected one: more than the sender now holds
    let too_much = accounts.balance(alice).await? + parse_amount("0.01")?;
    if let Err(e) = service.initiate_transfer(alice, bob, too_much).await {
        warn!(code = e.code(), "transfer rejected: {e}");
    }

    // Reverse the committed transfer
    let reversed = service.reverse_transfer(transfer.id).await?;
    info!(%reversed, "reversed");

    for record in service.all_transfers().await? {
        info!(%record, "ledger record");
    }
    info!(
        alice = %format_amount(accounts.balance(alice).await?),
        bob = %format_amount(accounts.balance(bob).await?),
        total = %format_amount(accounts.total()),
        "final balances"
    );

    Ok(())
}
