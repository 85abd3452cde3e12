use std::sync::Arc;

use crate::config::Config;
use crate::registry::ArticleRegistry;

/// Shared application state injected into the prerender middleware via Axum
/// extractors. The registry is built and validated once at startup and never
/// mutated afterwards, so cloning the state is two pointer copies.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ArticleRegistry>,
    pub config: Config,
}
