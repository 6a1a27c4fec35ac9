//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use carhub_app::ports::{OrderRepository, ReviewRepository, ServiceRepository, UserRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts the API routes at the root (the original site had no `/api`
/// prefix), permits cross-origin requests from any origin, and includes a
/// [`TraceLayer`] that logs each HTTP request/response at the `DEBUG` level
/// using the `tracing` ecosystem.
pub fn build<SR, RR, OR, UR>(state: AppState<SR, RR, OR, UR>) -> Router
where
    SR: ServiceRepository + Send + Sync + 'static,
    RR: ReviewRepository + Send + Sync + 'static,
    OR: OrderRepository + Send + Sync + 'static,
    UR: UserRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(liveness))
        .merge(crate::api::routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn liveness() -> &'static str {
    "Running Antique Cars"
}
