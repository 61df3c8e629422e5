//! Myth route.
//!
//! `GET /api/myth?seed=<text>&starId=<id>` returns `{id, title, story}`.
//! A missing or blank `starId` is a 400; a generation failure is a 500. Both
//! carry an `{"error": ...}` body.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::services::myth::Myth;
use crate::state::AppState;

pub const MISSING_STAR_ID: &str = "Missing star id";
pub const GENERATION_FAILED: &str = "Myth generation failed";

#[derive(Debug, Default, Deserialize)]
pub struct MythQuery {
    pub seed: Option<String>,
    #[serde(rename = "starId")]
    pub star_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Error response with a fixed client-facing message.
#[derive(Debug, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

/// `GET /api/myth`: tell a random myth for the clicked star.
pub async fn get_myth(State(state): State<AppState>, Query(query): Query<MythQuery>) -> Result<Json<Myth>, ApiError> {
    tell_myth(&state, &query, &mut rand::rng()).map(Json)
}

pub(crate) fn tell_myth<R: Rng + ?Sized>(state: &AppState, query: &MythQuery, rng: &mut R) -> Result<Myth, ApiError> {
    let Some(star_id) = query.star_id.as_deref().map(str::trim).filter(|id| !id.is_empty()) else {
        return Err(ApiError { status: StatusCode::BAD_REQUEST, message: MISSING_STAR_ID });
    };
    let seed = query.seed.as_deref().filter(|s| !s.is_empty()).unwrap_or(state.config.default_seed.as_str());

    match state.myths.tell(star_id, rng) {
        Ok(myth) => {
            tracing::debug!(%seed, %star_id, title = %myth.title, "myth told");
            Ok(myth)
        }
        Err(e) => {
            tracing::error!(error = %e, %seed, %star_id, "myth generation failed");
            Err(ApiError { status: StatusCode::INTERNAL_SERVER_ERROR, message: GENERATION_FAILED })
        }
    }
}

#[cfg(test)]
#[path = "myth_test.rs"]
mod tests;
