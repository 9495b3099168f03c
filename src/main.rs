use log::{error, info};
use mongodb::bson::doc;
use mongodb::Client;

use user_directory::config::CONFIG;
use user_directory::MongoStore;

#[tokio::main]
async fn main() {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Err(e) = run().await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Connecting to MongoDB...");
    let client = Client::with_uri_str(&CONFIG.mongodb_uri).await?;
    let db = client.database(&CONFIG.database_name);

    db.run_command(doc! { "ping": 1 }).await?;
    info!("Connected to MongoDB database '{}'", CONFIG.database_name);

    let store = MongoStore::from_config(&db, &CONFIG);
    store.ensure_indexes().await?;

    let count = store.count().await?;
    info!(
        "Collection '{}' is ready with {} user(s)",
        CONFIG.users_collection, count
    );
    Ok(())
}
