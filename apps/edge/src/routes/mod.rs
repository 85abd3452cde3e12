pub mod health;

use axum::{middleware, routing::get, Router};
use tower_http::services::{ServeDir, ServeFile};

use crate::prerender;
use crate::state::AppState;

/// Assembles the edge router: the health probe, the built SPA bundle served
/// for everything else, and the prerender middleware layered over both so
/// crawler requests are intercepted before any static file is resolved.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    // Client-routed paths (e.g. /editor, /templates/modern) have no file on
    // disk; fall back to the SPA shell and let the client router take over.
    let index = format!("{static_dir}/index.html");
    let spa = ServeDir::new(&static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/health", get(health::health_handler))
        .fallback_service(spa)
        .layer(middleware::from_fn_with_state(
            state,
            prerender::prerender_articles,
        ))
}
