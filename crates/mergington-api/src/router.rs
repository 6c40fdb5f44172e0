//! Axum router construction for the activities API.
//!
//! Assembles the API routes and the static file mount into a single
//! [`Router`] with CORS and request tracing enabled.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- redirect to `/static/index.html`
/// - `GET /activities` -- all activities
/// - `POST /activities/{activity_name}/signup` -- sign up by `?email=`
/// - `GET /static/*` -- files from [`AppState::static_dir`]
///
/// CORS allows any origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(handlers::root))
        .route("/activities", get(handlers::list_activities))
        .route(
            "/activities/{activity_name}/signup",
            post(handlers::signup_for_activity),
        )
        .nest_service("/static", static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
