//! Axum router configuration with middleware.
//!
//! Middleware: permissive CORS (any origin, method and header) and request
//! tracing. When the configured web directory exists, the browser client is
//! served from it under `/ui`; otherwise only the API is exposed.

use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::http::handlers;
use crate::state::AppState;

/// Mount point of the static browser client.
pub const WEB_UI_PATH: &str = "/ui";

/// Build the complete API router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let web_dir = state.server.web_dir.clone();

    let mut router = Router::new()
        .route("/", get(handlers::status::root))
        .route("/health", get(handlers::status::health))
        .route("/client-config", get(handlers::client_config::get_client_config))
        .route("/chat-message", post(handlers::chat::post_chat_message))
        .route(
            "/get-conversation-history/{conversation_id}",
            get(handlers::history::get_conversation_history),
        );

    if !web_dir.is_empty() && Path::new(&web_dir).is_dir() {
        router = router.nest_service(WEB_UI_PATH, ServeDir::new(&web_dir));
        info!(path = %web_dir, mount = WEB_UI_PATH, "Static web client enabled");
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
