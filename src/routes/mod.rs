use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, security_header_layers, Config};
use crate::handlers::{artists, health_check, index, not_found, shows, venues};
use crate::state::AppState;

pub fn create_routes(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .merge(venue_routes())
        .merge(artist_routes())
        .merge(show_routes())
        .fallback(not_found)
        .with_state(state);

    for layer in security_header_layers(config.production) {
        router = router.layer(layer);
    }

    router
        .layer(create_cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", post(venues::search_venues))
        .route(
            "/venues/create",
            get(venues::create_venue_form).post(venues::create_venue_submission),
        )
        .route(
            "/venues/:venue_id",
            get(venues::show_venue).delete(venues::delete_venue),
        )
        .route(
            "/venues/:venue_id/edit",
            get(venues::edit_venue).post(venues::edit_venue_submission),
        )
}

fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", post(artists::search_artists))
        .route(
            "/artists/create",
            get(artists::create_artist_form).post(artists::create_artist_submission),
        )
        .route("/artists/:artist_id", get(artists::show_artist))
        .route(
            "/artists/:artist_id/edit",
            get(artists::edit_artist).post(artists::edit_artist_submission),
        )
}

fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(shows::list_shows))
        .route(
            "/shows/create",
            get(shows::create_show_form).post(shows::create_show_submission),
        )
}
