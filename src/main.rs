use anyhow::Context as _;
use axum::{
    extract::Extension,
    routing::{get, get_service, post},
    Router,
};
use std::sync::Arc;
use tera::Tera;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

mod config;
mod data;
mod features;
mod handlers;
mod utils;

use config::{AppConfig, StoreConfig};
use data::repositories::{RequestLogBackend, SanityStore};
use handlers::{admin::create_word, requests::request, search::search, status::check_store};

/// Shared handler state. The store is `None` when its configuration was
/// unusable, in which case every page load serves the fallback dataset.
#[derive(Clone)]
pub struct AppState {
    pub store: Option<SanityStore>,
    pub request_log: RequestLogBackend,
    pub store_config: Arc<StoreConfig>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env();

    // Content store configuration
    let store = match SanityStore::from_config(&config.store) {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("{}; using fallback data", e);
            None
        }
    };
    let request_log = RequestLogBackend::select(config.request_log, store.as_ref());
    log::info!("Word requests are kept in the {} log", request_log.kind());

    // Templates configuration
    let templates = Tera::new(&config.templates_glob)
        .with_context(|| format!("template parsing error in {}", config.templates_glob))?;

    let state = AppState {
        store,
        request_log,
        store_config: Arc::new(config.store.clone()),
    };
    let app = app(state, Arc::new(templates), &config.static_dir);

    // Start server
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    log::info!("Server running on http://{}", config.bind_addr);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

fn app(state: AppState, templates: Arc<Tera>, static_dir: &str) -> Router {
    let api_router = Router::new()
        .route("/words", get(search::words_api))
        .route("/search", get(search::search_api))
        .route("/suggest", get(search::suggest_api))
        .route("/request", post(request::request_word))
        .route("/create-word", post(create_word::create_word_api))
        .route("/check-store", get(check_store::check_store));

    Router::new()
        .route("/", get(search::dictionary_page))
        .route("/admin", get(create_word::admin_page))
        .nest("/api", api_router)
        .nest_service("/static", get_service(ServeDir::new(static_dir)))
        .layer(Extension(templates))
        .with_state(state)
}
