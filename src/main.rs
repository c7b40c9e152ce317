use leaguedb::cli;
use leaguedb::infrastructure::db;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::warn!("DATABASE_URL not set, using default");
        "sqlite://league.db".to_string()
    });

    // Connect to database
    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    db::initialize(&pool)
        .await
        .expect("Failed to initialize database");

    let result = cli::run(&pool).await;

    // Release the store connection on every exit path
    pool.close().await;

    if let Err(e) = result {
        tracing::error!("console loop failed: {e}");
        std::process::exit(1);
    }
}
