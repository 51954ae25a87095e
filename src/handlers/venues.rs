use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use chrono::Utc;
use serde::Serialize;

use crate::db;
use crate::filters::parse_genres;
use crate::forms::{self, FormData, FormSchema};
use crate::models::{group_by_area, Area, SearchResults, Venue, VenueDetail};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response;

#[derive(Serialize)]
struct AreasPayload {
    areas: Vec<Area>,
}

#[derive(Serialize)]
struct EditVenuePayload {
    form: FormSchema,
    venue: Venue,
    selected_genres: Vec<String>,
}

pub async fn list_venues(State(state): State<AppState>) -> Result<Response, AppError> {
    let rows = db::venues::list(&state.pool, Utc::now()).await?;

    Ok(response::data(AreasPayload {
        areas: group_by_area(rows),
    }))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = FormData::from(fields);
    let term = form.get("search_term").unwrap_or_default().to_string();
    let venues = db::venues::search(&state.pool, &term, Utc::now()).await?;

    Ok(response::data(SearchResults::new(venues, term)))
}

pub async fn show_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
) -> Result<Response, AppError> {
    let venue = db::venues::find(&state.pool, venue_id)
        .await?
        .ok_or_else(|| AppError::not_found("Venue", venue_id))?;
    let shows = db::venues::shows(&state.pool, venue_id).await?;

    Ok(response::data(VenueDetail::new(venue, shows, Utc::now())))
}

pub async fn create_venue_form() -> Response {
    response::data(forms::venue::schema())
}

pub async fn create_venue_submission(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let new_venue = forms::venue::validate(&FormData::from(fields))?;

    let venue = db::venues::create(&state.pool, &new_venue)
        .await
        .map_err(AppError::failed(format!(
            "An error occurred. Venue {} could not be listed.",
            new_venue.name
        )))?;

    let message = format!("Venue {} was successfully listed!", venue.name);
    Ok(response::created(venue, message))
}

pub async fn edit_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
) -> Result<Response, AppError> {
    let venue = db::venues::find(&state.pool, venue_id)
        .await?
        .ok_or_else(|| AppError::not_found("Venue", venue_id))?;

    Ok(response::data(EditVenuePayload {
        form: forms::venue::schema(),
        selected_genres: parse_genres(&venue.genres),
        venue,
    }))
}

pub async fn edit_venue_submission(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let changes = forms::venue::validate(&FormData::from(fields))?;

    match db::venues::update(&state.pool, venue_id, &changes).await {
        Ok(Some(venue)) => {
            let message = format!("Venue {} has been updated!", venue.name);
            Ok(response::success(venue, message))
        }
        Ok(None) => Err(AppError::not_found("Venue", venue_id)),
        Err(e) => Err(AppError::failed("An error occurred while updating the venue.")(e)),
    }
}

pub async fn delete_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
) -> Result<Response, AppError> {
    match db::venues::delete(&state.pool, venue_id).await {
        Ok(Some(venue)) => {
            let message = format!("Venue {} was successfully deleted.", venue.name);
            Ok(response::success(venue, message))
        }
        Ok(None) => Err(AppError::not_found("Venue", venue_id)),
        Err(e) => Err(AppError::failed("An error occurred. Venue could not be deleted.")(e)),
    }
}
