use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use chrono::Utc;
use serde::Serialize;

use crate::db;
use crate::filters::parse_genres;
use crate::forms::{self, FormData, FormSchema};
use crate::models::{Artist, ArtistDetail, NamedRef, SearchResults};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response;

#[derive(Serialize)]
struct ArtistsPayload {
    artists: Vec<NamedRef>,
}

#[derive(Serialize)]
struct EditArtistPayload {
    form: FormSchema,
    artist: Artist,
    selected_genres: Vec<String>,
}

pub async fn list_artists(State(state): State<AppState>) -> Result<Response, AppError> {
    let artists = db::artists::list(&state.pool).await?;
    Ok(response::data(ArtistsPayload { artists }))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = FormData::from(fields);
    let term = form.get("search_term").unwrap_or_default().to_string();
    let artists = db::artists::search(&state.pool, &term, Utc::now()).await?;

    Ok(response::data(SearchResults::new(artists, term)))
}

pub async fn show_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
) -> Result<Response, AppError> {
    let artist = db::artists::find(&state.pool, artist_id)
        .await?
        .ok_or_else(|| AppError::not_found("Artist", artist_id))?;
    let shows = db::artists::shows(&state.pool, artist_id).await?;

    Ok(response::data(ArtistDetail::new(artist, shows, Utc::now())))
}

pub async fn create_artist_form() -> Response {
    response::data(forms::artist::schema())
}

pub async fn create_artist_submission(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let new_artist = forms::artist::validate(&FormData::from(fields))?;

    let artist = db::artists::create(&state.pool, &new_artist)
        .await
        .map_err(AppError::failed(format!(
            "An error occurred. Artist {} could not be listed.",
            new_artist.name
        )))?;

    let message = format!("Artist {} was successfully listed!", artist.name);
    Ok(response::created(artist, message))
}

pub async fn edit_artist(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
) -> Result<Response, AppError> {
    let artist = db::artists::find(&state.pool, artist_id)
        .await?
        .ok_or_else(|| AppError::not_found("Artist", artist_id))?;

    Ok(response::data(EditArtistPayload {
        form: forms::artist::schema(),
        selected_genres: parse_genres(&artist.genres),
        artist,
    }))
}

pub async fn edit_artist_submission(
    State(state): State<AppState>,
    Path(artist_id): Path<i32>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let changes = forms::artist::validate(&FormData::from(fields))?;

    match db::artists::update(&state.pool, artist_id, &changes).await {
        Ok(Some(artist)) => {
            let message = format!("Artist {} has been updated!", artist.name);
            Ok(response::success(artist, message))
        }
        Ok(None) => Err(AppError::not_found("Artist", artist_id)),
        Err(e) => Err(AppError::failed("An error occurred while updating the artist.")(e)),
    }
}
