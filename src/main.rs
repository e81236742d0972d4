//! Tasktrack process bootstrap.
//!
//! Loads configuration, initializes tracing, connects the database pool,
//! wires the lifecycle handlers, and serves the HTTP API.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tasktrack::adapters::http::{task_routes, TaskHandlers};
use tasktrack::adapters::postgres::PostgresTaskRepository;
use tasktrack::application::handlers::task::{
    CreateTaskHandler, DeleteTaskHandler, GetTaskHandler, ListTasksHandler, UpdateTaskHandler,
};
use tasktrack::config::{AppConfig, ServerConfig};
use tasktrack::ports::TaskRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("migrations applied");
    }

    // The pool is owned here and shared into the adapter.
    let repository: Arc<dyn TaskRepository> = Arc::new(PostgresTaskRepository::new(pool));

    let handlers = TaskHandlers::new(
        Arc::new(CreateTaskHandler::new(repository.clone())),
        Arc::new(ListTasksHandler::new(repository.clone())),
        Arc::new(GetTaskHandler::new(repository.clone())),
        Arc::new(UpdateTaskHandler::new(repository.clone())),
        Arc::new(DeleteTaskHandler::new(repository)),
    );

    let app = Router::new()
        .nest("/tasks", task_routes(handlers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config.server));

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Restrict CORS to the configured origins; without configuration, stay
/// permissive for local development against the frontend dev server.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
