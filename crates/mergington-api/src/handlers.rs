//! HTTP endpoint handlers for the activities API.
//!
//! All handlers work against the [`ActivityDirectory`] held in the shared
//! [`AppState`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Redirect to the landing page |
//! | `GET` | `/activities` | All activities keyed by name |
//! | `POST` | `/activities/{activity_name}/signup?email=` | Sign a student up |
//!
//! [`ActivityDirectory`]: mergington_directory::ActivityDirectory

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::Redirect;
use axum::Json;
use indexmap::IndexMap;
use mergington_types::{Activity, SignupConfirmation};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::AppState;

/// Landing page the root path redirects to.
pub const LANDING_PAGE: &str = "/static/index.html";

/// Query parameters for the signup endpoint.
#[derive(Debug, serde::Deserialize)]
pub struct SignupQuery {
    /// The student's email address.
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// GET / -- redirect to the landing page
// ---------------------------------------------------------------------------

/// Redirect to the static landing page with a 307.
pub async fn root() -> Redirect {
    Redirect::temporary(LANDING_PAGE)
}

// ---------------------------------------------------------------------------
// GET /activities -- list activities
// ---------------------------------------------------------------------------

/// Return every activity keyed by name, in seed order.
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<IndexMap<String, Activity>> {
    let directory = state.directory.read().await;
    Json(directory.snapshot())
}

// ---------------------------------------------------------------------------
// POST /activities/{activity_name}/signup -- sign up for an activity
// ---------------------------------------------------------------------------

/// Add `email` to the roster of `activity_name`.
///
/// The write lock is held from the first check until the email is
/// appended.
///
/// # Query Parameters
///
/// - `email` (required): the student's email address.
///
/// A query string that does not deserialize (e.g. `email` given twice) is
/// rejected with a `detail` body like every other error.
pub async fn signup_for_activity(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<SignupConfirmation>, ApiError> {
    let Query(params) =
        query.map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))?;
    let email = params
        .email
        .ok_or_else(|| ApiError::MissingParameter(String::from("email")))?;

    let mut directory = state.directory.write().await;

    match directory.signup(&activity_name, &email) {
        Ok(activity) => {
            info!(
                activity = %activity_name,
                email = %email,
                participants = activity.participants.len(),
                "student signed up"
            );
            Ok(Json(SignupConfirmation::new(&email, &activity_name)))
        }
        Err(e) => {
            debug!(activity = %activity_name, email = %email, reason = %e, "signup rejected");
            Err(e.into())
        }
    }
}
