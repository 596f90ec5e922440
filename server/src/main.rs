use std::env;
use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use tureen_server::{api, app, db, AppState, SharedState};

#[tokio::main]
async fn main() {
    // Dump the OpenAPI spec and exit, for client codegen and CI diffing.
    if env::args().any(|arg| arg == "--openapi") {
        let spec = api::openapi().to_pretty_json().unwrap();
        println!("{}", spec);
        return;
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = db::create_pool(&database_url);

    let llm = tureen_core::llm::create_provider_from_env()
        .expect("Failed to configure LLM provider");
    tracing::info!(
        provider = llm.provider_name(),
        model = llm.model_name(),
        "LLM provider configured"
    );

    let state: SharedState = Arc::new(AppState {
        pool,
        llm: Arc::from(llm),
    });

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await.unwrap();

    tracing::info!("Server listening on {}", listener.local_addr().unwrap());
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_addr);

    axum::serve(listener, app(state)).await.unwrap();
}
