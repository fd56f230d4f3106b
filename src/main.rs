use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orderdesk::config::{Config, DatabaseConfig, LogFormat};
use orderdesk::core::{BroadcastEventBus, EventBus};
use orderdesk::middleware::{ErrorHandler, RequestId};
use orderdesk::modules::billing::controllers::configure_billing_routes;
use orderdesk::modules::billing::services::{BillingService, LineItemNormalizer};
use orderdesk::modules::pricing::repositories::{MySqlConfigStore, MySqlMenuCatalog};
use orderdesk::modules::pricing::services::ConfigResolver;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;

    init_tracing(&config);

    tracing::info!("Starting OrderDesk billing service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let db_pool = config
        .database
        .create_pool()
        .await
        .context("Failed to create database pool")?;
    DatabaseConfig::run_migrations(&db_pool).await?;

    tracing::info!(
        "Database pool initialized ({} connections)",
        config.database.pool_size
    );

    // Collaborators are built once and shared by every worker
    let events: Arc<dyn EventBus> =
        Arc::new(BroadcastEventBus::new(config.billing.event_bus_capacity)?);
    let resolver = ConfigResolver::new(Arc::new(MySqlConfigStore::new(db_pool.clone())))
        .with_version_policy(config.billing.version_policy);
    let billing = web::Data::new(
        BillingService::new(resolver, events)
            .with_normalizer(LineItemNormalizer::with_strict(
                config.billing.strict_line_items,
            ))
            .with_menu_catalog(Arc::new(MySqlMenuCatalog::new(db_pool))),
    );

    tracing::info!(
        strict_line_items = config.billing.strict_line_items,
        version_policy = %config.billing.version_policy,
        "Billing engine ready"
    );

    let bind_address = config.server.bind_address();
    let origins = config.server.cors_allowed_origins.clone();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .wrap(cors(&origins))
            .app_data(billing.clone())
            .route("/health", web::get().to(health_check))
            .configure(configure_billing_routes)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("orderdesk={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

fn cors(origins: &[String]) -> Cors {
    if origins.is_empty() {
        return Cors::permissive();
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "orderdesk"
    }))
}
