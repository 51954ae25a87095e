use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

use crate::db;
use crate::models::NamedRef;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response;

pub mod artists;
pub mod shows;
pub mod venues;

const RECENTLY_LISTED: i64 = 10;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

#[derive(Serialize)]
struct HomePayload {
    recent_venues: Vec<NamedRef>,
    recent_artists: Vec<NamedRef>,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "fyyur",
    };

    response::success(payload, "Health check successful")
}

/// Home page: the most recently listed venues and artists.
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let recent_venues = db::venues::recent(&state.pool, RECENTLY_LISTED).await?;
    let recent_artists = db::artists::recent(&state.pool, RECENTLY_LISTED).await?;

    Ok(response::data(HomePayload {
        recent_venues,
        recent_artists,
    }))
}

pub async fn not_found() -> AppError {
    AppError::NotFound("The requested page could not be found".to_string())
}
