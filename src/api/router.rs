use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;

use super::resource::{routes, Eventos, Localidades, Ocorrencias, Postagens, Usuarios};
use super::AppState;
use crate::constants::LIVENESS_MESSAGE;

/// Build the full API router: liveness plus one CRUD route set per entity.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(liveness))
        .merge(routes::<Usuarios>())
        .merge(routes::<Localidades>())
        .merge(routes::<Eventos>())
        .merge(routes::<Postagens>())
        .merge(routes::<Ocorrencias>())
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}
