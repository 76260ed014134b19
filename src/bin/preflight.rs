use donation_tracker::{Config, PgStore, StorageBackend};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Requires env vars:\n\
           DATABASE_URL (a postgres:// URL)\n\
         Optional:\n\
           PORT, BIND_ADDR, DATABASE_MAX_CONNECTIONS, BCRYPT_COST\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if missing)
    let config = Config::from_env()?;

    println!("> Preflight:");
    println!("  Listen address: {}", config.listen_addr());
    println!("  BCRYPT_COST={}", config.bcrypt_cost);

    let (url, max_connections) = match &config.storage {
        StorageBackend::Postgres {
            url,
            max_connections,
        } => (url.clone(), *max_connections),
        StorageBackend::Memory => {
            println!("  DATABASE_URL selects the in-memory store; nothing to check.");
            println!("> Preflight OK.");
            return Ok(());
        }
    };
    println!("  DATABASE_MAX_CONNECTIONS={}", max_connections);

    // Connecting also creates the tables if they are missing.
    let store = PgStore::connect(&url, max_connections)
        .await
        .map_err(|e| anyhow::anyhow!("Database is not reachable: {}", e))?;
    println!("  Database reachable, schema in place.");

    let counts = store.collection_counts().await?;
    println!("  users:     {}", counts.users);
    println!("  donations: {}", counts.donations);
    println!("  feedback:  {}", counts.feedback);

    store.close().await;
    println!("> Preflight OK.");
    Ok(())
}
