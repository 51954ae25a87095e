use axum::extract::State;
use axum::response::Response;
use axum::Form;
use serde::Serialize;

use crate::db;
use crate::forms::{self, FormData};
use crate::models::{ShowEntry, ShowListing};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response;

#[derive(Serialize)]
struct ShowsPayload {
    shows: Vec<ShowEntry<ShowListing>>,
}

pub async fn list_shows(State(state): State<AppState>) -> Result<Response, AppError> {
    let shows = db::shows::list(&state.pool).await?;

    Ok(response::data(ShowsPayload {
        shows: shows.into_iter().map(ShowEntry::from).collect(),
    }))
}

pub async fn create_show_form() -> Response {
    response::data(forms::show::schema())
}

pub async fn create_show_submission(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let new_show = forms::show::validate(&FormData::from(fields))?;

    let show = db::shows::create(&state.pool, &new_show)
        .await
        .map_err(AppError::failed(
            "An error occurred. Show could not be listed.",
        ))?;

    Ok(response::created(show, "Show was successfully listed!"))
}
