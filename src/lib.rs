use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tokio::sync::Mutex;

pub mod config;
pub mod errors;
pub mod http;
pub mod library;
pub mod logging;

use library::Library;

#[derive(Clone, Default)]
pub struct AppState {
    pub library: Arc<Mutex<Library>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every book and restarts ids at 1. Not reachable over HTTP.
    pub async fn reset(&self) {
        self.library.lock().await.reset();
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::describe_api))
        .route(
            "/books",
            get(http::handlers::list_books).post(http::handlers::create_book),
        )
        .route(
            "/books/{id}",
            get(http::handlers::get_book)
                .put(http::handlers::update_book)
                .delete(http::handlers::delete_book),
        )
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
