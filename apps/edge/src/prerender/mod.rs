//! Crawler prerender middleware.
//!
//! Social preview fetchers do not execute client-side rendering, so the SPA's
//! article pages are blank to them. This middleware sits in front of the whole
//! router and, for crawler requests to a known article route, responds with a
//! server-rendered document carrying the article's sharing metadata. Every
//! other request — wrong path shape, interactive browser, unregistered slug —
//! passes through untouched to the next handler.
//!
//! Each invocation is a pure function of (request, frozen registry): no I/O,
//! no locks, no upstream call on the respond path. Any uncertainty resolves
//! to pass-through, so the preview feature can never take the app down.

pub mod crawler;
pub mod path;
pub mod render;

use axum::{
    extract::{Request, State},
    http::header::{CACHE_CONTROL, CONTENT_TYPE, USER_AGENT},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::state::AppState;

/// Client caches for 1 hour, shared/CDN caches for 24 hours, 7-day
/// stale-while-revalidate window.
const CACHE_POLICY: &str = "public, max-age=3600, s-maxage=86400, stale-while-revalidate=604800";

const HTML_UTF8: &str = "text/html; charset=utf-8";

/// The per-request decision chain: path gate → user-agent gate → registry
/// gate → synthesize. Wired over the router with
/// `axum::middleware::from_fn_with_state`.
pub async fn prerender_articles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    if let Some(response) = try_prerender(&state, &req) {
        return response;
    }
    next.run(req).await
}

fn try_prerender(state: &AppState, req: &Request) -> Option<Response> {
    let slug = path::extract_article_slug(req.uri().path())?;

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !crawler::is_crawler(user_agent) {
        return None;
    }

    let Some(article) = state.registry.resolve(slug) else {
        debug!(slug, "crawler requested unregistered article, passing through");
        return None;
    };

    debug!(slug, user_agent, "serving prerendered article page");
    let html = render::render_article_page(slug, article);
    Some(([(CONTENT_TYPE, HTML_UTF8), (CACHE_CONTROL, CACHE_POLICY)], html).into_response())
}
