use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use api::auth::IdentityClient;
use api::config::Config;
use api::enhance::LlmEnhancer;
use api::llm_client::{self, LlmClient};
use api::routes::build_router;
use api::state::AppState;
use api::store::{create_pool, PgCvStore, PgUserLookup};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Burnish API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize the identity provider client
    let identity = IdentityClient::new(
        config.identity_url.clone(),
        config.identity_secret_key.clone(),
    );
    info!("Identity client initialized ({})", config.identity_url);

    // Initialize the LLM-backed enhancement gateway
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Build app state
    let state = AppState {
        identity: Arc::new(identity),
        users: Arc::new(PgUserLookup::new(db.clone())),
        cv_store: Arc::new(PgCvStore::new(db)),
        enhancer: Arc::new(LlmEnhancer(llm)),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
