use fitness_center::api::routes::create_routes;
use fitness_center::config::{run_migrations, AppConfig, DatabaseConfig};
use tokio::net::TcpListener;
use tracing::{info, instrument};
use tracing_subscriber;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env()?;
    let database_config = DatabaseConfig::from_env()?;

    let db = database_config.create_pool().await?;
    run_migrations(&db).await?;

    // Create the application routes
    let app = create_routes(db);

    // Start the server
    let listener = TcpListener::bind(config.server_address()).await?;
    info!(
        "Fitness center server starting on http://{}",
        config.server_address()
    );
    info!(
        "Health check available at http://{}/health",
        config.server_address()
    );

    axum::serve(listener, app).await?;

    Ok(())
}
