//! HTTP surface: the comparison page plus a health check.

use crate::render::render_page;
use crate::report::{TrendParams, TrendsService};
use anyhow::{Context, Result};
use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

pub fn router(service: Arc<TrendsService>) -> Router {
    Router::new()
        .route("/", get(handle_trends))
        .route("/health", get(|| async { "ok" }))
        .with_state(service)
}

/// `GET /?query_1=..&year_1=..&query_2=..&year_2=..`
pub async fn handle_trends(
    State(service): State<Arc<TrendsService>>,
    Query(params): Query<TrendParams>,
) -> Response {
    match service.run(&params).await {
        Ok(report) => Html(render_page(&report)).into_response(),
        Err(e) => {
            log::error!("trend comparison failed: {e}");
            (
                StatusCode::BAD_GATEWAY,
                format!("upstream article search failed: {}", e.public_message()),
            )
                .into_response()
        }
    }
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(service: Arc<TrendsService>, addr: SocketAddr) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    log::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_on(tokio::signal::ctrl_c()))
        .await
        .context("http server")?;
    Ok(())
}

/// Resolve once `signal` fires. If the signal handler cannot be installed, keep serving.
async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => log::info!("shutdown requested"),
        Err(e) => {
            log::error!("cannot listen for Ctrl-C ({e}); serving until the process is killed");
            std::future::pending::<()>().await
        }
    }
}
