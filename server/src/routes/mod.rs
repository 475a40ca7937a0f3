//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches Leptos SSR rendering, the compiled client bundle
//! under `/pkg`, and a liveness probe into a single Axum router. The REST
//! API the client talks to is a separate service and is not routed here.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;

/// Routes that do not depend on Leptos options.
pub fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Directory served at `/pkg`.
pub fn pkg_dir(site_root: &str, config: &HostConfig) -> PathBuf {
    config.site_root.clone().unwrap_or_else(|| PathBuf::from(site_root)).join("pkg")
}

/// Leptos SSR frontend: every client route, static assets, and `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn leptos_app(config: &HostConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "registered client routes");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let pkg = pkg_dir(leptos_options.site_root.as_ref(), config);
    tracing::info!(path = %pkg.display(), "serving client bundle");

    Ok(health_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
