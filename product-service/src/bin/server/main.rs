use std::sync::Arc;

use auth::TokenService;
use product_service::config::Config;
use product_service::domain::product::ports::ProductServicePort;
use product_service::domain::product::service::ProductService;
use product_service::inbound::http::router::create_router;
use product_service::outbound::repositories::PostgresProductRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "product-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(max_connections = 5, "Database connection pool created");

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!("Database migrations completed");

    let token_service = Arc::new(TokenService::new(config.jwt.secret.as_bytes()));
    let repository = Arc::new(PostgresProductRepository::new(pg_pool));

    let product_service: Arc<dyn ProductServicePort> =
        Arc::new(ProductService::new(repository));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(address = %http_address, "Http server listening");

    let application = create_router(product_service, token_service);
    axum::serve(listener, application).await?;

    Ok(())
}
